// src/math/types/bounds.rs

use crate::math::types::*;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Erstellt eine Bounding Box die alle Punkte umschließt
    pub fn from_points_iter<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Point2D>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    /// Breite der Bounding Box (peak-to-peak in x)
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box (peak-to-peak in y)
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Größe der Bounding Box
    pub fn size(&self) -> Point2D {
        Point2D {
            x: self.width(),
            y: self.height(),
        }
    }

    /// Vergrößert die Box in alle Richtungen um `margin`
    pub fn expand(&self, margin: f64) -> Self {
        Self {
            min: Point2D {
                x: self.min.x - margin,
                y: self.min.y - margin,
            },
            max: Point2D {
                x: self.max.x + margin,
                y: self.max.y + margin,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::coord;

    #[test]
    fn test_bounds_from_points() {
        let bounds = Bounds2D::from_points_iter(vec![
            coord! { x: 1.0, y: -2.0 },
            coord! { x: -3.0, y: 4.0 },
            coord! { x: 0.5, y: 0.5 },
        ])
        .unwrap();
        assert_eq!(bounds.min, coord! { x: -3.0, y: -2.0 });
        assert_eq!(bounds.max, coord! { x: 1.0, y: 4.0 });
        assert_eq!(bounds.size(), coord! { x: 4.0, y: 6.0 });
    }

    #[test]
    fn test_bounds_empty_iter() {
        assert!(Bounds2D::from_points_iter(Vec::<Point2D>::new()).is_none());
    }

    #[test]
    fn test_expand() {
        let bounds = Bounds2D::from_points_iter(vec![coord! { x: 0.0, y: 0.0 }])
            .unwrap()
            .expand(1.5);
        assert_eq!(bounds.width(), 3.0);
        assert_eq!(bounds.height(), 3.0);
    }
}
