// src/debug/visualization/mod.rs
pub mod svg;

pub use svg::{DEFAULT_SVG_PIXEL_SIZE, shape_svg_document, write_shape_svg};
