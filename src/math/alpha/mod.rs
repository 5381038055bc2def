// src/math/alpha/mod.rs

// Ranking und Maske über den Umkreisradien
pub mod ranking;
// Zusammensetzen ausgewählter Dreiecke zu Flächen
pub mod assembler;
pub mod shape;
// Suche nach dem optimalen Alpha
pub mod optimizer;

pub mod config;
pub mod shaper;

pub use assembler::ShapeAssembler;
pub use config::AlphaShaperConfig;
pub use optimizer::CoverageOptimizer;
pub use ranking::{AlphaRanking, Mask};
pub use shape::{Boundary, Shape};
pub use shaper::{AlphaShaper, Optimum};
