// src/math/error.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlphaError {
    #[error("Not enough points: expected at least {expected}, got {actual}")]
    NotEnoughPoints { expected: usize, actual: usize },

    #[error(
        "Optimization failed: {uncovered} point(s) not covered by any triangle (e.g. {sample:?}). Maybe there are duplicate points?"
    )]
    OptimizationFailure { uncovered: usize, sample: Vec<usize> },

    #[error("Triangulation failed: {reason}")]
    TriangulationFailed { reason: String },

    #[error("Triangle {triangle} references vertex {vertex}, but only {num_points} points exist")]
    InvalidTriangle {
        triangle: usize,
        vertex: usize,
        num_points: usize,
    },

    #[error("Triangle index {triangle} out of range ({count} triangles)")]
    TriangleIndexOutOfRange { triangle: usize, count: usize },

    #[error("Mask length mismatch: expected {expected}, got {actual}")]
    MaskLength { expected: usize, actual: usize },

    #[error("Polygon union failed: {reason}")]
    UnionFailed { reason: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AlphaResult<T> = Result<T, AlphaError>;
