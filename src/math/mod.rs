pub mod alpha;
pub mod error;
pub mod geometry;
pub mod types;
pub mod utils;

// Re-exports für einfache Verwendung
pub use error::{AlphaError, AlphaResult};
pub use types::*;

// Öffentliche API
pub mod prelude {
    pub use super::{
        alpha::{AlphaShaper, AlphaShaperConfig, Mask, Optimum, Shape},
        error::{AlphaError, AlphaResult},
        geometry::{GeoUnion, PolygonUnion, SpadeTriangulator, Triangulator},
        types::*,
    };
}
