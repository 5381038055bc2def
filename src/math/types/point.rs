// src/math/types/point.rs
use super::*;
use std::collections::HashSet;

/// Konvertiert einen `geo`-Koordinatenpunkt in einen `spade`-Punkt.
pub fn to_spade_point(p: Point2D) -> SpadePoint {
    SpadePoint::new(p.x, p.y)
}

/// Euklidischer Abstand zweier Punkte.
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}

/// Exakte Bit-Identität; `-0.0` und `0.0` gelten als gleich.
fn coord_key(p: Point2D) -> (u64, u64) {
    let canonical = |v: f64| if v == 0.0 { 0.0f64.to_bits() } else { v.to_bits() };
    (canonical(p.x), canonical(p.y))
}

/// Entfernt exakt doppelte Koordinaten. Die erste Vorkommnis bleibt erhalten,
/// die Reihenfolge der übrigen Punkte ändert sich nicht.
///
/// Returns the kept points and how many duplicates were dropped.
pub fn dedup_points(points: &[Point2D]) -> (Vec<Point2D>, usize) {
    let mut seen = HashSet::with_capacity(points.len());
    let kept: Vec<Point2D> = points
        .iter()
        .copied()
        .filter(|p| seen.insert(coord_key(*p)))
        .collect();
    let removed = points.len() - kept.len();
    (kept, removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let points = vec![
            coord! { x: 0.0, y: 0.0 },
            coord! { x: 1.0, y: 0.0 },
            coord! { x: 0.0, y: 0.0 },
            coord! { x: -0.0, y: 0.0 },
            coord! { x: 1.0, y: 1.0 },
        ];
        let (kept, removed) = dedup_points(&points);
        assert_eq!(removed, 2);
        assert_eq!(
            kept,
            vec![
                coord! { x: 0.0, y: 0.0 },
                coord! { x: 1.0, y: 0.0 },
                coord! { x: 1.0, y: 1.0 },
            ]
        );
    }

    #[test]
    fn test_dedup_leaves_near_duplicates() {
        let points = vec![coord! { x: 0.0, y: 0.0 }, coord! { x: 1e-12, y: 0.0 }];
        let (kept, removed) = dedup_points(&points);
        assert_eq!(removed, 0);
        assert_eq!(kept.len(), 2);
    }

    #[test]
    fn test_distance() {
        let d = distance(coord! { x: 0.0, y: 0.0 }, coord! { x: 3.0, y: 4.0 });
        assert!((d - 5.0).abs() < 1e-12);
    }
}
