//! Uniform sampling of points in an axis-aligned square.

use crate::math::types::Point2D;
use rand::Rng;

/// Quelle gleichverteilter Stichproben.
///
/// `sample_square` returns exactly `count` points with `x` in
/// `[origin.x, origin.x + side)` and `y` in `[origin.y, origin.y + side)`.
pub trait Sampler {
    fn sample_square(&mut self, origin: Point2D, side: f64, count: usize) -> Vec<Point2D>;
}

/// Zieht `count` Punkte aus dem Quadrat mit einem beliebigen `Rng`.
///
/// A square without extent in floating point has a single point, its origin;
/// that point is returned `count` times instead of sampling an empty range.
/// The same holds for a square whose far corner is not finite.
pub fn sample_square_with<R: Rng>(
    rng: &mut R,
    origin: Point2D,
    side: f64,
    count: usize,
) -> Vec<Point2D> {
    let x_range = origin.x..origin.x + side;
    let y_range = origin.y..origin.y + side;
    let finite = x_range.end.is_finite() && y_range.end.is_finite();
    if !finite || x_range.is_empty() || y_range.is_empty() {
        return vec![origin; count];
    }
    (0..count)
        .map(|_| {
            let x = rng.random_range(x_range.clone());
            let y = rng.random_range(y_range.clone());
            Point2D::new(x, y)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::types::Bounds2D;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_samples_stay_in_half_open_square() {
        let mut rng = StdRng::seed_from_u64(42);
        let origin = Point2D::new(-3.0, 10.0);
        let bounds = Bounds2D::from_origin_side(origin, 0.75);
        let points = sample_square_with(&mut rng, origin, 0.75, 2048);

        assert_eq!(points.len(), 2048);
        for point in &points {
            assert!(bounds.contains_point_half_open(*point), "{point:?}");
        }
    }

    #[test]
    fn test_zero_count_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(sample_square_with(&mut rng, Point2D::ZERO, 1.0, 0).is_empty());
    }

    #[test]
    fn test_degenerate_square_returns_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let origin = Point2D::new(2.0, 2.0);
        let points = sample_square_with(&mut rng, origin, 0.0, 3);
        assert_eq!(points, vec![origin; 3]);
        let points = sample_square_with(&mut rng, origin, -1.0, 2);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_overflowing_square_returns_origin() {
        let mut rng = StdRng::seed_from_u64(1);
        let origin = Point2D::new(1e308, 0.0);
        let points = sample_square_with(&mut rng, origin, 1e308, 4);
        assert_eq!(points, vec![origin; 4]);
    }

    #[test]
    fn test_samples_cover_square() {
        // Grobe Plausibilität: beide Hälften werden getroffen
        let mut rng = StdRng::seed_from_u64(3);
        let points = sample_square_with(&mut rng, Point2D::ZERO, 1.0, 1000);
        let left = points.iter().filter(|p| p.x < 0.5).count();
        assert!(left > 350 && left < 650, "left = {left}");
    }
}
