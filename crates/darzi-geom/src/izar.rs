//! Izar front-leg construction point set.
//!
//! The izar is the one garment drafted as a true construction drawing
//! rather than a plain panel: a base rectangle, a seat-depth line, a
//! crotch extension, a tapered leg, and a cubic Bézier crotch curve.

use darzi_math::Point2;
use darzi_measure::izar::IzarQuantities;

/// Horizontal ease added to the quarter hip for the base width.
pub const HIP_EASE: f64 = 3.0;

/// Extra ease on the crotch extension.
pub const CROTCH_EASE: f64 = 1.0;

/// Vertical offset for the upper crotch-curve control point.
pub const CTRL_DROP: f64 = 0.75;

// The three nudge factors below are visual calibration constants,
// tuned against reference drafts. They are not derived from any
// body measurement.

/// Fraction of the crotch extension the crotch anchor is pulled back
/// to avoid a sharp point.
pub const CROTCH_NUDGE: f64 = 0.15;

/// Fraction of the crotch extension the curve controls pull inward.
pub const CTRL_PULL: f64 = 0.2;

/// Fraction of the below-seat length the lower control rises.
pub const CTRL_RISE: f64 = 0.5;

/// Named construction points for the izar front leg, in body inches.
///
/// X grows toward the inner seam, y grows downward from the waist.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IzarGeometry {
    /// Waist corner on the outer seam.
    pub waist_outer: Point2,
    /// Hem corner on the outer seam.
    pub hem_outer: Point2,
    /// Waist corner on the inner reference line.
    pub waist_inner: Point2,
    /// Hem corner on the inner reference line.
    pub hem_inner: Point2,
    /// Seat-depth line at the outer seam.
    pub seat_outer: Point2,
    /// Seat-depth line at the inner reference line.
    pub seat_inner: Point2,
    /// Crotch point (extension tip, nudged back).
    pub crotch: Point2,
    /// Vertical drop of the crotch point to hem level (guide only).
    pub crotch_drop: Point2,
    /// Center of the leg opening.
    pub ankle_center: Point2,
    /// Inner edge of the leg opening.
    pub ankle_inner: Point2,
    /// Outer edge of the leg opening.
    pub ankle_outer: Point2,
    /// First control of the cubic crotch curve (near the ankle).
    pub ctrl1: Point2,
    /// Second control of the cubic crotch curve (near the crotch).
    pub ctrl2: Point2,
    /// Base panel width: hip/4 + ease.
    pub base_width: f64,
    /// Crotch extension: hip/4 + crotch ease.
    pub crotch_extension: f64,
    /// Seat depth used for the draft.
    pub seat_depth: f64,
    /// Half the leg-opening width.
    pub half_mori: f64,
    /// Max x extent of the construction, in inches.
    pub body_width: f64,
    /// Max y extent of the construction, in inches.
    pub body_height: f64,
}

impl IzarGeometry {
    /// Build the construction point set from derived quantities.
    ///
    /// Returns `None` when length, hip, or leg-opening width is not
    /// positive; the renderer then emits an error placeholder instead
    /// of a draft.
    pub fn build(q: &IzarQuantities) -> Option<Self> {
        let m = &q.measurements;
        let length = m.full_length;
        let hip = m.hip;
        let mori = m.bottom_width;

        if length <= 0.0 || hip <= 0.0 || mori <= 0.0 {
            return None;
        }

        // Seat depth falls back to a hip-proportional estimate when
        // the derived value is unusable.
        let seat_depth = if q.crotch_depth_front > 0.0 {
            q.crotch_depth_front
        } else {
            hip / 3.0 + 2.0
        };

        let base_width = hip / 4.0 + HIP_EASE;
        let crotch_extension = hip / 4.0 + CROTCH_EASE;
        let half_mori = mori / 2.0;

        let crotch_x = base_width + crotch_extension - crotch_extension * CROTCH_NUDGE;
        let ankle_center = Point2::new(base_width + crotch_extension / 2.0, length);
        let ankle_inner = Point2::new(ankle_center.x - half_mori, length);
        let ankle_outer = Point2::new(ankle_center.x + half_mori, length);
        let crotch = Point2::new(crotch_x, seat_depth);

        let ctrl1 = Point2::new(
            ankle_inner.x + crotch_extension * CTRL_PULL,
            ankle_inner.y - (length - seat_depth) * CTRL_RISE,
        );
        let ctrl2 = Point2::new(
            crotch.x - crotch_extension * CTRL_PULL,
            seat_depth - CTRL_DROP * CTRL_RISE,
        );

        Some(Self {
            waist_outer: Point2::new(0.0, 0.0),
            hem_outer: Point2::new(0.0, length),
            waist_inner: Point2::new(base_width, 0.0),
            hem_inner: Point2::new(base_width, length),
            seat_outer: Point2::new(0.0, seat_depth),
            seat_inner: Point2::new(base_width, seat_depth),
            crotch,
            crotch_drop: Point2::new(crotch_x, length),
            ankle_center,
            ankle_inner,
            ankle_outer,
            ctrl1,
            ctrl2,
            base_width,
            crotch_extension,
            seat_depth,
            half_mori,
            body_width: base_width + crotch_extension,
            body_height: length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use darzi_measure::izar::{IzarMeasurements, IzarQuantities};
    use darzi_measure::Measurements;

    fn reference_quantities() -> IzarQuantities {
        IzarQuantities::derive(&IzarMeasurements::normalize(&Measurements::default()))
    }

    #[test]
    fn test_build_reference_points() {
        // Defaults: waist 32, hip 36.8, length 38, mori 31.28.
        let g = IzarGeometry::build(&reference_quantities()).unwrap();
        assert_relative_eq!(g.base_width, 12.2);
        assert_relative_eq!(g.crotch_extension, 10.2);
        assert_relative_eq!(g.seat_depth, 9.95);
        assert_relative_eq!(g.half_mori, 15.64);

        assert_eq!(g.waist_outer, Point2::new(0.0, 0.0));
        assert_eq!(g.hem_outer, Point2::new(0.0, 38.0));
        assert_relative_eq!(g.waist_inner.x, 12.2);
        assert_relative_eq!(g.crotch.x, 12.2 + 10.2 - 10.2 * 0.15);
        assert_relative_eq!(g.crotch.y, 9.95);
        assert_relative_eq!(g.ankle_center.x, 12.2 + 5.1);
        assert_relative_eq!(g.ankle_inner.x, 17.3 - 15.64);
        assert_relative_eq!(g.ankle_outer.x, 17.3 + 15.64);
        assert_relative_eq!(g.body_width, 22.4);
        assert_relative_eq!(g.body_height, 38.0);
    }

    #[test]
    fn test_crotch_curve_controls() {
        let g = IzarGeometry::build(&reference_quantities()).unwrap();
        assert_relative_eq!(g.ctrl1.x, g.ankle_inner.x + 10.2 * 0.2);
        assert_relative_eq!(g.ctrl1.y, 38.0 - (38.0 - 9.95) * 0.5);
        assert_relative_eq!(g.ctrl2.x, g.crotch.x - 10.2 * 0.2);
        assert_relative_eq!(g.ctrl2.y, 9.95 - 0.375);
    }

    #[test]
    fn test_degenerate_measurements_refuse_to_build() {
        let mut q = reference_quantities();
        q.measurements.full_length = 0.0;
        assert!(IzarGeometry::build(&q).is_none());

        let mut q = reference_quantities();
        q.measurements.hip = -1.0;
        assert!(IzarGeometry::build(&q).is_none());

        let mut q = reference_quantities();
        q.measurements.bottom_width = 0.0;
        assert!(IzarGeometry::build(&q).is_none());
    }

    #[test]
    fn test_zero_crotch_depth_falls_back_to_hip_ratio() {
        let mut q = reference_quantities();
        q.crotch_depth_front = 0.0;
        let g = IzarGeometry::build(&q).unwrap();
        assert_relative_eq!(g.seat_depth, 36.8 / 3.0 + 2.0);
    }
}
