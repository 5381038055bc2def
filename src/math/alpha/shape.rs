// src/math/alpha/shape.rs

use crate::math::types::*;
use geo::Area;
use serde::{Deserialize, Serialize};

/// Ergebnis-Geometrie eines Alpha-Shapes: ein oder mehrere Polygone,
/// jeweils mit optionalen Löchern. Besitzt ihre Koordinaten selbst.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    geometry: MultiPolygon<f64>,
}

impl Default for Shape {
    fn default() -> Self {
        Self {
            geometry: MultiPolygon::new(Vec::new()),
        }
    }
}

impl Shape {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn geometry(&self) -> &MultiPolygon<f64> {
        &self.geometry
    }

    pub fn into_geometry(self) -> MultiPolygon<f64> {
        self.geometry
    }

    pub fn polygons(&self) -> &[Polygon<f64>] {
        &self.geometry.0
    }

    pub fn num_parts(&self) -> usize {
        self.geometry.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometry.0.is_empty()
    }

    pub fn area(&self) -> f64 {
        self.geometry.unsigned_area()
    }

    /// Eine [`Boundary`] pro Teilpolygon.
    pub fn boundaries(&self) -> Vec<Boundary> {
        self.geometry.0.iter().map(Boundary::from).collect()
    }
}

impl From<MultiPolygon<f64>> for Shape {
    fn from(geometry: MultiPolygon<f64>) -> Self {
        Self { geometry }
    }
}

impl From<Polygon<f64>> for Shape {
    fn from(polygon: Polygon<f64>) -> Self {
        Self {
            geometry: MultiPolygon::new(vec![polygon]),
        }
    }
}

/// Koordinaten des Randes eines Teilpolygons: Außenring und Lochringe,
/// jeweils geschlossen (erster Punkt == letzter Punkt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Boundary {
    pub exterior: Vec<[f64; 2]>,
    pub holes: Vec<Vec<[f64; 2]>>,
}

fn ring_coords(ring: &LineString<f64>) -> Vec<[f64; 2]> {
    ring.coords().map(|c| [c.x, c.y]).collect()
}

impl From<&Polygon<f64>> for Boundary {
    fn from(polygon: &Polygon<f64>) -> Self {
        Self {
            exterior: ring_coords(polygon.exterior()),
            holes: polygon.interiors().iter().map(ring_coords).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::polygon;

    #[test]
    fn test_empty_shape() {
        let shape = Shape::empty();
        assert!(shape.is_empty());
        assert_eq!(shape.area(), 0.0);
        assert!(shape.boundaries().is_empty());
    }

    #[test]
    fn test_boundaries_of_polygon_with_hole() {
        let poly: Polygon<f64> = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 4.0, y: 0.0), (x: 4.0, y: 4.0), (x: 0.0, y: 4.0)],
            interiors: [[(x: 1.0, y: 1.0), (x: 2.0, y: 1.0), (x: 2.0, y: 2.0), (x: 1.0, y: 2.0)]]
        );
        let shape = Shape::from(poly);
        assert_eq!(shape.num_parts(), 1);
        assert!((shape.area() - 15.0).abs() < 1e-12);

        let boundaries = shape.boundaries();
        assert_eq!(boundaries.len(), 1);
        assert_eq!(boundaries[0].exterior.len(), 5);
        assert_eq!(boundaries[0].exterior.first(), boundaries[0].exterior.last());
        assert_eq!(boundaries[0].holes.len(), 1);
        assert_eq!(boundaries[0].holes[0][0], [1.0, 1.0]);
    }

    #[test]
    fn test_boundary_serializes() {
        let boundary = Boundary {
            exterior: vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0], [0.0, 0.0]],
            holes: vec![],
        };
        let json = serde_json::to_string(&boundary).unwrap();
        let back: Boundary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, boundary);
    }
}
