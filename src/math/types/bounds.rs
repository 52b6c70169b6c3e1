// src/math/types/bounds.rs

use crate::math::types::*;

/// 2D Bounding Box (Axis-Aligned Bounding Box)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2D {
    pub min: Point2D,
    pub max: Point2D,
}

impl Bounds2D {
    /// Quadrat mit linker unterer Ecke `origin` und Kantenlänge `side`
    pub fn from_origin_side(origin: Point2D, side: f64) -> Self {
        let other = origin + Point2D::splat(side);
        Self {
            min: Point2D::new(origin.x.min(other.x), origin.y.min(other.y)),
            max: Point2D::new(origin.x.max(other.x), origin.y.max(other.y)),
        }
    }

    /// Breite der Bounding Box
    pub fn width(&self) -> f64 {
        (self.max.x - self.min.x).max(0.0)
    }

    /// Höhe der Bounding Box
    pub fn height(&self) -> f64 {
        (self.max.y - self.min.y).max(0.0)
    }

    /// Prüft ob ein Punkt in [min, max) liegt; der obere/rechte Rand gehört nicht dazu
    pub fn contains_point_half_open(&self, point: Point2D) -> bool {
        point.x >= self.min.x && point.x < self.max.x && point.y >= self.min.y && point.y < self.max.y
    }

    /// Gleichmäßig verteilte Gitterpositionen entlang beider Achsen, `divisions` Abschnitte.
    pub fn grid_ticks(&self, divisions: usize) -> (Vec<f64>, Vec<f64>) {
        if divisions == 0 {
            return (Vec::new(), Vec::new());
        }
        let step_x = self.width() / divisions as f64;
        let step_y = self.height() / divisions as f64;
        let xs = (0..=divisions)
            .map(|i| self.min.x + step_x * i as f64)
            .collect();
        let ys = (0..=divisions)
            .map(|i| self.min.y + step_y * i as f64)
            .collect();
        (xs, ys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_origin_side() {
        let bounds = Bounds2D::from_origin_side(Point2D::new(-1.0, 2.0), 0.5);
        assert_relative_eq!(bounds.width(), 0.5);
        assert_relative_eq!(bounds.height(), 0.5);
        assert_eq!(bounds.min, Point2D::new(-1.0, 2.0));
        assert_eq!(bounds.max, Point2D::new(-0.5, 2.5));
    }

    #[test]
    fn test_half_open_excludes_upper_edge() {
        let bounds = Bounds2D::from_origin_side(Point2D::ZERO, 1.0);
        assert!(bounds.contains_point_half_open(Point2D::new(0.0, 0.0)));
        assert!(!bounds.contains_point_half_open(Point2D::new(1.0, 0.5)));
        assert!(bounds.contains_point_half_open(Point2D::new(0.999, 0.5)));
    }

    #[test]
    fn test_grid_ticks() {
        let bounds = Bounds2D::from_origin_side(Point2D::ZERO, 1.0);
        let (xs, ys) = bounds.grid_ticks(10);
        assert_eq!(xs.len(), 11);
        assert_eq!(ys.len(), 11);
        assert_relative_eq!(xs[3], 0.3, epsilon = 1e-12);
        assert_relative_eq!(ys[10], 1.0, epsilon = 1e-12);
        assert!(bounds.grid_ticks(0).0.is_empty());
    }
}
