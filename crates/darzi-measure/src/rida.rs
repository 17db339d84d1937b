//! Rida (two-piece hooded garment) measurements and quantities.

use std::collections::BTreeMap;

use darzi_math::round2;

use crate::{resolve, Measurements};

/// Complete rida measurement record, all values in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidaMeasurements {
    /// Chest circumference.
    pub chest: f64,
    /// Waist circumference.
    pub waist: f64,
    /// Front length from shoulder.
    pub full_front_length: f64,
    /// Back length from shoulder.
    pub full_back_length: f64,
    /// Shoulder width.
    pub shoulder: f64,
    /// Sleeve length.
    pub sleeve_length: f64,
    /// Neck circumference.
    pub neck_round: f64,
}

impl RidaMeasurements {
    /// Complete a sparse record with the rida defaults (chest 38).
    pub fn normalize(m: &Measurements) -> Self {
        let chest = resolve(m.chest, 38.0);
        Self {
            chest,
            waist: resolve(m.waist, chest * 0.9),
            full_front_length: resolve(m.full_front_length, 27.0),
            full_back_length: resolve(m.full_back_length, 30.0),
            shoulder: resolve(m.shoulder, chest * 0.22),
            sleeve_length: resolve(m.sleeve_length, 18.0),
            neck_round: resolve(m.neck_round, chest * 0.35),
        }
    }
}

/// Derived rida construction quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RidaQuantities {
    /// The normalized measurements the formulas ran on.
    pub measurements: RidaMeasurements,
    /// chest / 5.
    pub armhole_depth: f64,
    /// fullFrontLength / 10.
    pub front_yoke_depth: f64,
}

impl RidaQuantities {
    /// Run the rida formulas over a normalized record.
    pub fn derive(m: &RidaMeasurements) -> Self {
        Self {
            measurements: *m,
            armhole_depth: round2(m.chest / 5.0),
            front_yoke_depth: round2(m.full_front_length / 10.0),
        }
    }

    /// Flatten to a name → value map for the draft record.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let m = &self.measurements;
        BTreeMap::from([
            ("chest".into(), m.chest),
            ("waist".into(), m.waist),
            ("fullFrontLength".into(), m.full_front_length),
            ("fullBackLength".into(), m.full_back_length),
            ("shoulder".into(), m.shoulder),
            ("sleeveLength".into(), m.sleeve_length),
            ("neckRound".into(), m.neck_round),
            ("armholeDepth".into(), self.armhole_depth),
            ("frontYokeDepth".into(), self.front_yoke_depth),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_all_defaults() {
        let r = RidaMeasurements::normalize(&Measurements::default());
        assert_eq!(r.chest, 38.0);
        assert_relative_eq!(r.waist, 34.2);
        assert_eq!(r.full_front_length, 27.0);
        assert_eq!(r.full_back_length, 30.0);
        assert_eq!(r.sleeve_length, 18.0);
        assert_relative_eq!(r.neck_round, 13.3);
    }

    #[test]
    fn test_derive_reference_values() {
        let r = RidaMeasurements::normalize(&Measurements::default());
        let q = RidaQuantities::derive(&r);
        assert_eq!(q.armhole_depth, 7.6);
        assert_eq!(q.front_yoke_depth, 2.7);
    }
}
