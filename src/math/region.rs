//! Circular target region and the validation of its text inputs.
//!
//! A `Region` is the circle `(x-a)² + (y-b)² = r²`. Samples are drawn from the
//! square `[a, a+r) × [b, b+r)`, i.e. the square starts at the center and only
//! covers one quadrant of the circle. The hit ratio therefore approximates π/4.

use crate::math::{error::*, types::*};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    a: f64,
    b: f64,
    r: f64,
}

impl Region {
    /// Erstellt eine validierte Region.
    ///
    /// Rejects non-finite values, `r <= 0`, squares that collapse in
    /// floating point (`a + r == a`) and regions whose far corner or squared
    /// distances overflow `f64`. Every `Region` thus has a finite, non-empty
    /// sampling square and an exact hit test.
    pub fn new(a: f64, b: f64, r: f64) -> MathResult<Self> {
        for (field, value) in [
            (RegionField::A, a),
            (RegionField::B, b),
            (RegionField::Radius, r),
        ] {
            if !value.is_finite() {
                return Err(MathError::NonFiniteValue { field, value });
            }
        }
        if r <= 0.0 {
            return Err(MathError::NonPositiveRadius { radius: r });
        }
        if !(a + r > a && b + r > b) {
            return Err(MathError::DegenerateSquare { a, b, r });
        }
        // dx² + dy² erreicht höchstens 2r²
        if !((a + r).is_finite() && (b + r).is_finite() && (2.0 * r * r).is_finite()) {
            return Err(MathError::RegionOutOfRange { a, b, r });
        }
        Ok(Self { a, b, r })
    }

    /// Parst die drei Texteingaben (a, b, r) und validiert das Ergebnis.
    pub fn parse(a: &str, b: &str, r: &str) -> MathResult<Self> {
        let a = parse_field(RegionField::A, a)?;
        let b = parse_field(RegionField::B, b)?;
        let r = parse_field(RegionField::Radius, r)?;
        Self::new(a, b, r)
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn radius(&self) -> f64 {
        self.r
    }

    pub fn center(&self) -> Point2D {
        Point2D::new(self.a, self.b)
    }

    /// Hit test. Points exactly on the circle count as hits.
    pub fn contains(&self, point: Point2D) -> bool {
        let dx = point.x - self.a;
        let dy = point.y - self.b;
        dx * dx + dy * dy <= self.r * self.r
    }

    /// Das Stichprobenquadrat `[a, a+r] × [b, b+r]`.
    pub fn sampling_bounds(&self) -> Bounds2D {
        Bounds2D::from_origin_side(self.center(), self.r)
    }

    /// Kreisgleichung für die Statusanzeige.
    pub fn formula(&self) -> String {
        format!("(x-{})²+(y-{})²=({})²", self.a, self.b, self.r)
    }
}

impl Default for Region {
    fn default() -> Self {
        Self {
            a: 0.0,
            b: 0.0,
            r: 1.0,
        }
    }
}

fn parse_field(field: RegionField, input: &str) -> MathResult<f64> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| MathError::InvalidNumber {
            field,
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_input() {
        let region = Region::parse(" 1.5", "-2", "0.25 ").unwrap();
        assert_eq!(region.a(), 1.5);
        assert_eq!(region.b(), -2.0);
        assert_eq!(region.radius(), 0.25);
    }

    #[test]
    fn test_parse_reports_failing_field() {
        let err = Region::parse("abc", "0", "1").unwrap_err();
        assert_eq!(
            err,
            MathError::InvalidNumber {
                field: RegionField::A,
                input: "abc".to_string()
            }
        );

        let err = Region::parse("0", "0", "").unwrap_err();
        assert!(matches!(
            err,
            MathError::InvalidNumber {
                field: RegionField::Radius,
                ..
            }
        ));
    }

    #[test]
    fn test_non_positive_radius_is_rejected() {
        assert_eq!(
            Region::new(0.0, 0.0, 0.0),
            Err(MathError::NonPositiveRadius { radius: 0.0 })
        );
        assert!(matches!(
            Region::parse("0", "0", "-1"),
            Err(MathError::NonPositiveRadius { .. })
        ));
    }

    #[test]
    fn test_non_finite_values_are_rejected() {
        assert!(matches!(
            Region::parse("inf", "0", "1"),
            Err(MathError::NonFiniteValue {
                field: RegionField::A,
                ..
            })
        ));
        assert!(matches!(
            Region::parse("0", "NaN", "1"),
            Err(MathError::NonFiniteValue {
                field: RegionField::B,
                ..
            })
        ));
    }

    #[test]
    fn test_collapsed_square_is_rejected() {
        assert!(matches!(
            Region::new(1e20, 0.0, 1.0),
            Err(MathError::DegenerateSquare { .. })
        ));
    }

    #[test]
    fn test_overflowing_corner_is_rejected() {
        assert_eq!(
            Region::parse("1e308", "0", "1e308"),
            Err(MathError::RegionOutOfRange {
                a: 1e308,
                b: 0.0,
                r: 1e308
            })
        );
        assert!(matches!(
            Region::new(0.0, -1e308, 1e308),
            Err(MathError::RegionOutOfRange { .. })
        ));
    }

    #[test]
    fn test_overflowing_squared_radius_is_rejected() {
        assert!(matches!(
            Region::parse("0", "0", "1e200"),
            Err(MathError::RegionOutOfRange { .. })
        ));
        // Größte noch zulässige Radien bleiben gültig
        let region = Region::new(0.0, 0.0, 1e150).unwrap();
        assert!(region.contains(Point2D::new(0.5e150, 0.5e150)));
        assert!(!region.contains(Point2D::new(0.99e150, 0.99e150)));
    }

    #[test]
    fn test_center_and_boundary_are_hits() {
        let region = Region::new(3.0, -1.0, 2.0).unwrap();
        assert!(region.contains(region.center()));
        // (3+2, -1) liegt genau auf dem Kreis
        assert!(region.contains(Point2D::new(5.0, -1.0)));
        assert!(region.contains(Point2D::new(3.0, 1.0)));
        assert!(!region.contains(Point2D::new(5.0, 1.0)));
    }

    #[test]
    fn test_unit_region_examples() {
        let region = Region::default();
        assert!(region.contains(Point2D::new(0.0, 0.0)));
        assert!(!region.contains(Point2D::new(2.0, 2.0)));
    }

    #[test]
    fn test_sampling_bounds_start_at_center() {
        let region = Region::new(1.0, 2.0, 0.5).unwrap();
        let bounds = region.sampling_bounds();
        assert_eq!(bounds.min, Point2D::new(1.0, 2.0));
        assert_eq!(bounds.max, Point2D::new(1.5, 2.5));
    }

    #[test]
    fn test_formula() {
        assert_eq!(Region::default().formula(), "(x-0)²+(y-0)²=(1)²");
    }
}
