// src/math/geometry/union.rs

use crate::math::{error::AlphaResult, types::*};
use geo::algorithm::bool_ops::unary_union;

/// Verschmilzt eine Menge einfacher Polygone zu einer (Multi-)Fläche mit Löchern.
pub trait PolygonUnion: Send + Sync {
    fn union(&self, polygons: &[Polygon<f64>]) -> AlphaResult<MultiPolygon<f64>>;
}

/// Union über `geo`s `BooleanOps`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoUnion;

impl PolygonUnion for GeoUnion {
    fn union(&self, polygons: &[Polygon<f64>]) -> AlphaResult<MultiPolygon<f64>> {
        if polygons.is_empty() {
            return Ok(MultiPolygon::new(Vec::new()));
        }
        Ok(unary_union(polygons))
    }
}

/// Baut ein geschlossenes Dreieckspolygon aus drei Eckpunkten.
pub fn triangle_polygon(corners: [Point2D; 3]) -> Polygon<f64> {
    // `Polygon::new` schließt den Ring selbst
    Polygon::new(LineString::from(corners.to_vec()), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use geo::{Area, coord};

    fn tri(a: (f64, f64), b: (f64, f64), c: (f64, f64)) -> Polygon<f64> {
        triangle_polygon([a.into(), b.into(), c.into()])
    }

    #[test]
    fn test_empty_union() {
        let merged = GeoUnion.union(&[]).unwrap();
        assert!(merged.0.is_empty());
    }

    #[test]
    fn test_triangle_polygon_is_closed() {
        let poly = triangle_polygon([
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 0.0, y: 1.0 },
        ]);
        let ring = poly.exterior();
        assert_eq!(ring.0.len(), 4);
        assert_eq!(ring.0.first(), ring.0.last());
    }

    #[test]
    fn test_adjacent_triangles_merge_into_one_square() {
        let merged = GeoUnion
            .union(&[
                tri((0.0, 0.0), (1.0, 0.0), (1.0, 1.0)),
                tri((0.0, 0.0), (1.0, 1.0), (0.0, 1.0)),
            ])
            .unwrap();
        assert_eq!(merged.0.len(), 1);
        assert!(merged.0[0].interiors().is_empty());
        assert_relative_eq!(merged.unsigned_area(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_disjoint_triangles_stay_separate() {
        let merged = GeoUnion
            .union(&[
                tri((0.0, 0.0), (1.0, 0.0), (0.0, 1.0)),
                tri((5.0, 5.0), (6.0, 5.0), (5.0, 6.0)),
            ])
            .unwrap();
        assert_eq!(merged.0.len(), 2);
        assert_relative_eq!(merged.unsigned_area(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_ring_of_triangles_has_hole() {
        // Quadratischer Rahmen: außen [0,3]^2, innen [1,2]^2
        let o = [(0.0, 0.0), (3.0, 0.0), (3.0, 3.0), (0.0, 3.0)];
        let i = [(1.0, 1.0), (2.0, 1.0), (2.0, 2.0), (1.0, 2.0)];
        let mut triangles = Vec::new();
        for k in 0..4 {
            let n = (k + 1) % 4;
            triangles.push(tri(o[k], o[n], i[n]));
            triangles.push(tri(o[k], i[n], i[k]));
        }
        let merged = GeoUnion.union(&triangles).unwrap();
        assert_eq!(merged.0.len(), 1);
        assert_eq!(merged.0[0].interiors().len(), 1);
        assert_relative_eq!(merged.unsigned_area(), 8.0, epsilon = 1e-9);
    }
}
