// src/math/geometry/mod.rs
pub mod circumradius;
pub mod normalization;
pub mod triangulation;
pub mod union;

pub use circumradius::*;
pub use normalization::Normalization;
pub use triangulation::{SpadeTriangulator, TriangulatedPointSet, Triangulator};
pub use union::{GeoUnion, PolygonUnion, triangle_polygon};
