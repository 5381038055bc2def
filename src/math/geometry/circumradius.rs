// src/math/geometry/circumradius.rs

//! # Circumradius Kernel
//!
//! Squared circumradius of a triangle from its side lengths (Heron form):
//!
//! ```text
//! s   = (a + b + c) / 2
//! r^2 = (abc)^2 / (16 s (s-a)(s-b)(s-c))
//! ```
//!
//! Degenerate (collinear or coincident) triangles map to
//! [`DEGENERATE_CIRCUMRADIUS_SQ`], so they rank last and never enter a
//! finite-alpha shape.

use crate::math::{
    types::{Point2D, distance},
    utils::constants::{DEGENERACY_TOLERANCE, DEGENERATE_CIRCUMRADIUS_SQ},
};

/// Squared circumradius for side lengths `[a, b, c]`, default tolerance.
#[inline]
pub fn circumradius_sq(lengths: [f64; 3]) -> f64 {
    circumradius_sq_with_tolerance(lengths, DEGENERACY_TOLERANCE)
}

/// Squared circumradius for side lengths `[a, b, c]`.
///
/// Returns [`DEGENERATE_CIRCUMRADIUS_SQ`] when the Heron denominator is
/// below `tolerance` or not a number.
pub fn circumradius_sq_with_tolerance(lengths: [f64; 3], tolerance: f64) -> f64 {
    let [a, b, c] = lengths;
    let s = (a + b + c) / 2.0;

    let num = (a * b * c).powi(2);
    let denom = 16.0 * s * (s - a) * (s - b) * (s - c);

    if denom.is_nan() || denom < tolerance {
        return DEGENERATE_CIRCUMRADIUS_SQ;
    }

    num / denom
}

/// Squared circumradius of the triangle `(p0, p1, p2)`.
#[inline]
pub fn triangle_circumradius_sq(p0: Point2D, p1: Point2D, p2: Point2D) -> f64 {
    triangle_circumradius_sq_with_tolerance(p0, p1, p2, DEGENERACY_TOLERANCE)
}

pub fn triangle_circumradius_sq_with_tolerance(
    p0: Point2D,
    p1: Point2D,
    p2: Point2D,
    tolerance: f64,
) -> f64 {
    let lengths = [distance(p0, p1), distance(p1, p2), distance(p2, p0)];
    circumradius_sq_with_tolerance(lengths, tolerance)
}

/// `true` wenn der Wert der Entartungs-Sentinel ist.
#[inline]
pub fn is_degenerate(radius_sq: f64) -> bool {
    radius_sq == DEGENERATE_CIRCUMRADIUS_SQ
}
