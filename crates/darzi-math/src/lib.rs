#![warn(missing_docs)]

//! Math types for the darzi pattern drafting kernel.
//!
//! Thin wrappers around nalgebra providing the 2D types used by the
//! geometry builders and renderers: points, vectors, the 2-decimal
//! rounding rule for derived measurements, and a closed polygon with
//! an outward miter-offset routine for seam allowances.

use nalgebra::Vector2;

pub mod polygon;

pub use polygon::Polygon;

/// A point in 2D space (inches in body space, pixels after mapping).
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// Round a derived measurement to 2 decimal places.
///
/// Half-way cases round away from zero, matching the rounding applied
/// to every derived pattern quantity.
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Pixels per inch used for all drawing output.
pub const DPI: f64 = 96.0;

/// Convert inches to drawing pixels at [`DPI`].
pub fn inches_to_px(inches: f64) -> f64 {
    inches * DPI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2_truncates_to_two_decimals() {
        assert_eq!(round2(9.514285), 9.51);
        assert_eq!(round2(1.049999), 1.05);
        assert_eq!(round2(8.25), 8.25);
    }

    #[test]
    fn test_round2_half_away_from_zero() {
        assert_eq!(round2(2.005), 2.01);
        assert_eq!(round2(-2.005), -2.01);
    }

    #[test]
    fn test_inches_to_px() {
        assert_eq!(inches_to_px(1.0), 96.0);
        assert_eq!(inches_to_px(0.5), 48.0);
    }
}
