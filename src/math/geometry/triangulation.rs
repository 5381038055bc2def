// src/math/geometry/triangulation.rs

use crate::math::{
    error::{AlphaError, AlphaResult},
    types::*,
    utils::constants,
};
use spade::{DelaunayTriangulation, Triangulation};
use std::collections::BTreeSet;
use tracing::debug;

/// Liefert zu einer Punktmenge eine Liste von Dreiecken (Index-Tripel).
///
/// Implementierungen dürfen Punkte auslassen (z.B. exakte Duplikate); das ist
/// kein Fehler und wird erst vom Optimizer bemerkt.
pub trait Triangulator: Send + Sync {
    fn triangulate(&self, points: &[Point2D]) -> AlphaResult<Vec<TriangleIndices>>;
}

/// Delaunay-Triangulation über `spade`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpadeTriangulator;

impl Triangulator for SpadeTriangulator {
    fn triangulate(&self, points: &[Point2D]) -> AlphaResult<Vec<TriangleIndices>> {
        let mut triangulation: DelaunayTriangulation<SpadePoint> = DelaunayTriangulation::new();

        // spade vergibt Handles in Einfügereihenfolge; Duplikate liefern das
        // Handle des bereits vorhandenen Vertex zurück.
        let mut handle_to_point: Vec<Option<usize>> = Vec::with_capacity(points.len());
        for (index, &point) in points.iter().enumerate() {
            let handle = triangulation.insert(to_spade_point(point)).map_err(|e| {
                AlphaError::TriangulationFailed {
                    reason: format!("Failed to insert point {index} ({point:?}): {e:?}"),
                }
            })?;
            let slot = handle.index();
            if slot >= handle_to_point.len() {
                handle_to_point.resize(slot + 1, None);
            }
            if handle_to_point[slot].is_none() {
                handle_to_point[slot] = Some(index);
            }
        }

        let mut triangles = Vec::with_capacity(triangulation.num_inner_faces());
        for face in triangulation.inner_faces() {
            let mut triangle = [0usize; 3];
            for (slot, vertex) in triangle.iter_mut().zip(face.vertices()) {
                *slot = handle_to_point
                    .get(vertex.fix().index())
                    .copied()
                    .flatten()
                    .ok_or_else(|| AlphaError::TriangulationFailed {
                        reason: format!("Unknown vertex handle {:?}", vertex.fix()),
                    })?;
            }
            triangles.push(triangle);
        }

        debug!(
            "SpadeTriangulator: {} points -> {} vertices, {} triangles",
            points.len(),
            triangulation.num_vertices(),
            triangles.len()
        );
        Ok(triangles)
    }
}

/// Punktmenge plus Dreiecksliste; die Indizes der Punkte sind stabile IDs.
#[derive(Debug, Clone)]
pub struct TriangulatedPointSet {
    points: Vec<Point2D>,
    triangles: Vec<TriangleIndices>,
}

impl TriangulatedPointSet {
    /// Trianguliert `points` mit dem gegebenen Triangulator.
    ///
    /// Fails with [`AlphaError::NotEnoughPoints`] before triangulating when
    /// fewer than 3 points are supplied. Triangulator errors pass through.
    pub fn new(points: Vec<Point2D>, triangulator: &dyn Triangulator) -> AlphaResult<Self> {
        Self::check_point_count(&points)?;
        let triangles = triangulator.triangulate(&points)?;
        Self::from_triangles(points, triangles)
    }

    /// Übernimmt eine extern berechnete Triangulation.
    pub fn from_triangles(
        points: Vec<Point2D>,
        triangles: Vec<TriangleIndices>,
    ) -> AlphaResult<Self> {
        Self::check_point_count(&points)?;
        for (triangle, indices) in triangles.iter().enumerate() {
            if let Some(&vertex) = indices.iter().find(|&&v| v >= points.len()) {
                return Err(AlphaError::InvalidTriangle {
                    triangle,
                    vertex,
                    num_points: points.len(),
                });
            }
        }
        Ok(Self { points, triangles })
    }

    fn check_point_count(points: &[Point2D]) -> AlphaResult<()> {
        if points.len() < constants::MIN_POINTS {
            return Err(AlphaError::NotEnoughPoints {
                expected: constants::MIN_POINTS,
                actual: points.len(),
            });
        }
        Ok(())
    }

    /// Wendet `f` auf jede Koordinate an; die Dreiecke bleiben unverändert.
    pub fn map_points<F>(mut self, f: F) -> Self
    where
        F: Fn(Point2D) -> Point2D,
    {
        for point in &mut self.points {
            *point = f(*point);
        }
        self
    }

    pub fn num_points(&self) -> usize {
        self.points.len()
    }

    pub fn points(&self) -> &[Point2D] {
        &self.points
    }

    pub fn point(&self, index: usize) -> Option<Point2D> {
        self.points.get(index).copied()
    }

    pub fn triangles(&self) -> &[TriangleIndices] {
        &self.triangles
    }

    /// Die drei Eckpunkte des Dreiecks `triangle`.
    pub fn triangle_coords(&self, triangle: usize) -> Option<[Point2D; 3]> {
        let [a, b, c] = *self.triangles.get(triangle)?;
        Some([self.points[a], self.points[b], self.points[c]])
    }

    /// Anzahl der Dreiecke.
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = [Point2D; 3]> + '_ {
        self.triangles
            .iter()
            .map(|&[a, b, c]| [self.points[a], self.points[b], self.points[c]])
    }

    /// Alle Punkt-Indizes, die in mindestens einem Dreieck vorkommen.
    pub fn all_vertices(&self) -> BTreeSet<usize> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Punkte, die von keinem Dreieck berührt werden.
    pub fn isolated_points(&self) -> Vec<usize> {
        let used = self.all_vertices();
        (0..self.points.len())
            .filter(|index| !used.contains(index))
            .collect()
    }
}
