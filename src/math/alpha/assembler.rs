// src/math/alpha/assembler.rs

use crate::math::{
    alpha::shape::Shape,
    error::{AlphaError, AlphaResult},
    geometry::{PolygonUnion, TriangulatedPointSet, triangle_polygon},
    types::*,
};
use tracing::debug;

/// Setzt eine Auswahl von Dreiecken zu einer Fläche zusammen.
///
/// Jedes Dreieck wird zu einem einfachen Polygon und alle Polygone werden über
/// den [`PolygonUnion`]-Provider verschmolzen. Die Reihenfolge der Dreiecke
/// spielt keine Rolle; gleiche Eingaben ergeben exakt gleiche Koordinaten.
pub struct ShapeAssembler<'a> {
    point_set: &'a TriangulatedPointSet,
    union: &'a dyn PolygonUnion,
}

impl<'a> ShapeAssembler<'a> {
    pub fn new(point_set: &'a TriangulatedPointSet, union: &'a dyn PolygonUnion) -> Self {
        Self { point_set, union }
    }

    pub fn assemble(&self, triangle_indices: &[usize]) -> AlphaResult<Shape> {
        if triangle_indices.is_empty() {
            return Ok(Shape::empty());
        }

        let polygons = triangle_indices
            .iter()
            .map(|&t| {
                self.point_set
                    .triangle_coords(t)
                    .map(triangle_polygon)
                    .ok_or(AlphaError::TriangleIndexOutOfRange {
                        triangle: t,
                        count: self.point_set.len(),
                    })
            })
            .collect::<AlphaResult<Vec<Polygon<f64>>>>()?;

        let merged = self.union.union(&polygons)?;
        debug!(
            "ShapeAssembler: {} triangles -> {} polygon part(s)",
            polygons.len(),
            merged.0.len()
        );
        Ok(Shape::from(merged))
    }
}
