// src/math/geometry/normalization.rs

//! Koordinaten-Normalisierung vor der Triangulation.
//!
//! Umkreisradien sind skalenabhängig: dominiert eine Achse mit großem
//! Wertebereich, werden die "kleinen" Dreiecke verzerrt ausgewählt. Die
//! Punkte werden daher auf Mittelwert 0 und Spannweite 1 pro Achse gebracht
//! und die Ergebnis-Geometrie anschließend zurücktransformiert.

use crate::math::{
    alpha::shape::Shape,
    error::{AlphaError, AlphaResult},
    types::*,
    utils::comparison::non_zero_scale,
};
use geo::MapCoords;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

/// Affine Achsen-Skalierung `p_norm = (p - center) / scale`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Normalization {
    center: Vector2<f64>,
    scale: Vector2<f64>,
}

impl Normalization {
    /// Mittelwert und Spannweite (peak-to-peak) pro Achse.
    ///
    /// Eine Achse ohne Ausdehnung bekommt Skala 1.0.
    pub fn fit(points: &[Point2D]) -> AlphaResult<Self> {
        let bounds = Bounds2D::from_points_iter(points.iter().copied()).ok_or(
            AlphaError::NotEnoughPoints {
                expected: 1,
                actual: 0,
            },
        )?;

        let sum = points
            .iter()
            .fold(Vector2::zeros(), |acc, p| acc + Vector2::new(p.x, p.y));
        let center = sum / points.len() as f64;
        let size = bounds.size();
        let scale = Vector2::new(non_zero_scale(size.x), non_zero_scale(size.y));

        Ok(Self { center, scale })
    }

    /// Identität (Zentrum 0, Skala 1).
    pub fn identity() -> Self {
        Self {
            center: Vector2::zeros(),
            scale: Vector2::new(1.0, 1.0),
        }
    }

    pub fn center(&self) -> Point2D {
        Point2D {
            x: self.center.x,
            y: self.center.y,
        }
    }

    pub fn scale(&self) -> Point2D {
        Point2D {
            x: self.scale.x,
            y: self.scale.y,
        }
    }

    pub fn normalize_coord(&self, p: Point2D) -> Point2D {
        let v = (Vector2::new(p.x, p.y) - self.center).component_div(&self.scale);
        Point2D { x: v.x, y: v.y }
    }

    pub fn denormalize_coord(&self, p: Point2D) -> Point2D {
        let v = Vector2::new(p.x, p.y).component_mul(&self.scale) + self.center;
        Point2D { x: v.x, y: v.y }
    }

    pub fn normalize_points(&self, points: &[Point2D]) -> Vec<Point2D> {
        points.iter().map(|&p| self.normalize_coord(p)).collect()
    }

    pub fn denormalize_points(&self, points: &[Point2D]) -> Vec<Point2D> {
        points.iter().map(|&p| self.denormalize_coord(p)).collect()
    }

    /// Transformiert jede Koordinate jedes Rings (außen und Löcher) zurück.
    pub fn denormalize_shape(&self, shape: &Shape) -> Shape {
        Shape::from(
            shape
                .geometry()
                .map_coords(|c| self.denormalize_coord(c)),
        )
    }
}
