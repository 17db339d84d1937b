//! Izar (drawstring trouser) measurements and construction quantities.

use std::collections::BTreeMap;

use darzi_math::round2;

use crate::{resolve, Measurements};

/// Complete izar measurement record, all values in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IzarMeasurements {
    /// Waist circumference.
    pub waist: f64,
    /// Hip circumference.
    pub hip: f64,
    /// Waist-to-ankle length.
    pub full_length: f64,
    /// Leg-opening (mori) width per leg.
    pub bottom_width: f64,
}

impl IzarMeasurements {
    /// Complete a sparse record with the izar defaults.
    ///
    /// Waist resolves first (default 32); hip defaults to waist × 1.15
    /// and the mori to hip × 0.85, reading resolved values.
    pub fn normalize(m: &Measurements) -> Self {
        let waist = resolve(m.waist, 32.0);
        let hip = resolve(m.hip, waist * 1.15);
        Self {
            waist,
            hip,
            full_length: resolve(m.full_length, 38.0),
            bottom_width: resolve(m.bottom_width, hip * 0.85),
        }
    }
}

/// Derived izar construction quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IzarQuantities {
    /// The normalized measurements the formulas ran on.
    pub measurements: IzarMeasurements,
    /// hip / 4 + 0.75.
    pub crotch_depth_front: f64,
    /// hip / 3.5 + 1.
    pub crotch_depth_back: f64,
    /// crotchDepthFront + 1.5.
    pub rise_front: f64,
    /// crotchDepthBack + 2.
    pub rise_back: f64,
}

impl IzarQuantities {
    /// Run the izar formulas over a normalized record.
    pub fn derive(m: &IzarMeasurements) -> Self {
        let crotch_depth_front = round2(m.hip / 4.0 + 0.75);
        let crotch_depth_back = round2(m.hip / 3.5 + 1.0);
        Self {
            measurements: *m,
            crotch_depth_front,
            crotch_depth_back,
            rise_front: round2(crotch_depth_front + 1.5),
            rise_back: round2(crotch_depth_back + 2.0),
        }
    }

    /// Flatten to a name → value map for the draft record.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let m = &self.measurements;
        BTreeMap::from([
            ("waist".into(), m.waist),
            ("hip".into(), m.hip),
            ("fullLength".into(), m.full_length),
            ("bottomWidth".into(), m.bottom_width),
            ("crotchDepthFront".into(), self.crotch_depth_front),
            ("crotchDepthBack".into(), self.crotch_depth_back),
            ("riseFront".into(), self.rise_front),
            ("riseBack".into(), self.rise_back),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_all_defaults() {
        let i = IzarMeasurements::normalize(&Measurements::default());
        assert_eq!(i.waist, 32.0);
        assert_relative_eq!(i.hip, 36.8);
        assert_eq!(i.full_length, 38.0);
        assert_relative_eq!(i.bottom_width, 31.28);
    }

    #[test]
    fn test_normalize_zero_and_nan_take_defaults() {
        let m = Measurements {
            waist: Some(0.0),
            hip: Some(f64::NAN),
            ..Default::default()
        };
        let i = IzarMeasurements::normalize(&m);
        assert_eq!(i.waist, 32.0);
        assert_relative_eq!(i.hip, 36.8);
    }

    #[test]
    fn test_derive_reference_values() {
        let i = IzarMeasurements::normalize(&Measurements {
            waist: Some(32.0),
            hip: Some(36.8),
            full_length: Some(38.0),
            bottom_width: Some(31.28),
            ..Default::default()
        });
        let q = IzarQuantities::derive(&i);
        assert_eq!(q.crotch_depth_front, 9.95);
        assert_eq!(q.crotch_depth_back, 11.51);
        assert_eq!(q.rise_front, 11.45);
        assert_eq!(q.rise_back, 13.51);
    }

    #[test]
    fn test_rises_build_on_rounded_crotch_depths() {
        let i = IzarMeasurements::normalize(&Measurements {
            hip: Some(37.3),
            ..Default::default()
        });
        let q = IzarQuantities::derive(&i);
        assert_relative_eq!(q.rise_front, q.crotch_depth_front + 1.5, epsilon = 1e-9);
        assert_relative_eq!(q.rise_back, q.crotch_depth_back + 2.0, epsilon = 1e-9);
    }
}
