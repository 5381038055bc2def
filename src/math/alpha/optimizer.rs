// src/math/alpha/optimizer.rs

//! # Coverage Optimizer
//!
//! Finds the shortest prefix of the radius ranking whose triangles touch
//! every point of the set. The result is reported as the rank position `n`
//! of the last triangle needed, so the covering complex is
//! `rank_order[..=n]`.
//!
//! The scan starts at `T / 3` (at least `N / 3` triangles are needed to
//! touch `N` points, and a planar triangulation has `T < 2N`). If that
//! prefix already covers everything, the answer lies below it and is found
//! by rescanning from rank 0, so the result is always minimal.

use crate::math::{
    alpha::ranking::AlphaRanking,
    error::{AlphaError, AlphaResult},
    geometry::TriangulatedPointSet,
    types::TriangleIndices,
    utils::constants,
};
use tracing::{debug, warn};

/// Tracks which point indices are still untouched by the scanned triangles.
struct CoverageTracker {
    covered: Vec<bool>,
    remaining: usize,
}

impl CoverageTracker {
    fn new(num_points: usize) -> Self {
        Self {
            covered: vec![false; num_points],
            remaining: num_points,
        }
    }

    fn cover(&mut self, triangle: &TriangleIndices) {
        for &vertex in triangle {
            if let Some(flag) = self.covered.get_mut(vertex) {
                if !*flag {
                    *flag = true;
                    self.remaining -= 1;
                }
            }
        }
    }

    fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    fn uncovered(&self) -> impl Iterator<Item = usize> + '_ {
        self.covered
            .iter()
            .enumerate()
            .filter_map(|(index, &covered)| (!covered).then_some(index))
    }
}

pub struct CoverageOptimizer;

impl CoverageOptimizer {
    /// Rank position `n` of the boundary triangle of the minimal covering
    /// prefix.
    ///
    /// Fails with [`AlphaError::OptimizationFailure`] if even the full
    /// triangulation leaves points untouched (typically duplicates the
    /// triangulator dropped).
    pub fn minimal_covering_rank(
        point_set: &TriangulatedPointSet,
        ranking: &AlphaRanking,
    ) -> AlphaResult<usize> {
        let triangles = point_set.triangles();
        let order = ranking.rank_order();
        let n_start = order.len() / 3;

        let mut tracker = CoverageTracker::new(point_set.num_points());
        for &t in &order[..n_start] {
            tracker.cover(&triangles[t]);
        }

        if tracker.is_complete() {
            // Die Heuristik hat überschossen; von vorne bis n_start suchen.
            debug!(
                "CoverageOptimizer: prefix of {} already covers all points, rescanning from 0",
                n_start
            );
            return Self::scan(point_set, order, 0, CoverageTracker::new(point_set.num_points()));
        }

        debug!(
            "CoverageOptimizer: {} of {} points uncovered after {} triangles",
            tracker.remaining,
            point_set.num_points(),
            n_start
        );
        Self::scan(point_set, order, n_start, tracker)
    }

    fn scan(
        point_set: &TriangulatedPointSet,
        order: &[usize],
        from: usize,
        mut tracker: CoverageTracker,
    ) -> AlphaResult<usize> {
        let triangles = point_set.triangles();
        for (n, &t) in order.iter().enumerate().skip(from) {
            tracker.cover(&triangles[t]);
            if tracker.is_complete() {
                debug!("CoverageOptimizer: all points covered at rank {}", n);
                return Ok(n);
            }
        }

        let sample: Vec<usize> = tracker
            .uncovered()
            .take(constants::UNCOVERED_SAMPLE_LEN)
            .collect();
        warn!(
            "CoverageOptimizer: {} point(s) never covered, first: {:?}",
            tracker.remaining, sample
        );
        Err(AlphaError::OptimizationFailure {
            uncovered: tracker.remaining,
            sample,
        })
    }

    /// Punkt-Indizes, die von `rank_order[..n]` nicht berührt werden.
    pub fn uncovered_after(
        point_set: &TriangulatedPointSet,
        ranking: &AlphaRanking,
        n: usize,
    ) -> Vec<usize> {
        let mut tracker = CoverageTracker::new(point_set.num_points());
        for &t in ranking.ranked_prefix(n) {
            tracker.cover(&point_set.triangles()[t]);
        }
        tracker.uncovered().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{geometry::SpadeTriangulator, types::Point2D};
    use geo::coord;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn ranked(points: Vec<Point2D>) -> (TriangulatedPointSet, AlphaRanking) {
        let set = TriangulatedPointSet::new(points, &SpadeTriangulator).unwrap();
        let ranking = AlphaRanking::new(&set);
        (set, ranking)
    }

    fn square_with_center() -> Vec<Point2D> {
        vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 0.0, y: 1.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
            coord! { x: 0.5, y: 0.5 },
        ]
    }

    fn assert_minimal(set: &TriangulatedPointSet, ranking: &AlphaRanking, n: usize) {
        assert!(
            CoverageOptimizer::uncovered_after(set, ranking, n + 1).is_empty(),
            "prefix ..={n} must cover every point"
        );
        assert!(
            !CoverageOptimizer::uncovered_after(set, ranking, n).is_empty(),
            "prefix ..{n} must leave a point uncovered"
        );
    }

    #[test]
    fn test_square_with_center() {
        let (set, ranking) = ranked(square_with_center());
        let n = CoverageOptimizer::minimal_covering_rank(&set, &ranking).unwrap();
        assert_minimal(&set, &ranking, n);
        // Zwei gegenüberliegende Dreiecke reichen, drei reichen immer
        assert!((1..=2).contains(&n));
    }

    #[test]
    fn test_duplicate_point_fails() {
        let mut points = square_with_center();
        points.push(coord! { x: 1.0, y: 1.0 });
        let (set, ranking) = ranked(points);
        match CoverageOptimizer::minimal_covering_rank(&set, &ranking) {
            Err(AlphaError::OptimizationFailure { uncovered, sample }) => {
                assert_eq!(uncovered, 1);
                assert_eq!(sample, vec![5]);
            }
            other => panic!("expected OptimizationFailure, got {other:?}"),
        }
    }

    #[test]
    fn test_no_triangles_fails() {
        let (set, ranking) = ranked(vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 2.0, y: 0.0 },
        ]);
        assert!(matches!(
            CoverageOptimizer::minimal_covering_rank(&set, &ranking),
            Err(AlphaError::OptimizationFailure { uncovered: 3, .. })
        ));
    }

    #[test]
    fn test_random_clouds_are_minimal() {
        let mut rng = StdRng::seed_from_u64(42);
        for count in [3, 4, 10, 57, 200] {
            let points: Vec<Point2D> = (0..count)
                .map(|_| coord! { x: rng.random_range(-5.0..5.0), y: rng.random_range(-1.0..1.0) })
                .collect();
            let (set, ranking) = ranked(points);
            let n = CoverageOptimizer::minimal_covering_rank(&set, &ranking).unwrap();
            assert!(n < set.len());
            assert_minimal(&set, &ranking, n);
        }
    }

    #[test]
    fn test_heuristic_overshoot_is_rescanned() {
        // Zwei kleine Dreiecke decken alle Punkte; die großen Füller-Dreiecke
        // verschieben n_start = T / 3 hinter die Lösung.
        let points = vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 0.0, y: 1.0 },
            coord! { x: 10.0, y: 10.0 },
            coord! { x: 11.0, y: 10.0 },
            coord! { x: 10.0, y: 11.0 },
        ];
        let triangles = vec![
            [0, 1, 2],
            [3, 4, 5],
            [1, 3, 4],
            [0, 2, 5],
            [0, 3, 5],
            [1, 2, 4],
            [2, 4, 5],
            [0, 1, 3],
            [1, 4, 5],
        ];
        let set = TriangulatedPointSet::from_triangles(points, triangles).unwrap();
        let ranking = AlphaRanking::new(&set);
        assert_eq!(&ranking.rank_order()[..2], &[0, 1]);
        let n = CoverageOptimizer::minimal_covering_rank(&set, &ranking).unwrap();
        assert_eq!(n, 1);
        assert_minimal(&set, &ranking, n);
    }
}
