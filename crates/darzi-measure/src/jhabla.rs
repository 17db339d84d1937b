//! Jhabla (baby shirt) measurements and construction quantities.

use std::collections::BTreeMap;

use darzi_math::round2;

use crate::{resolve, Measurements};

/// Complete jhabla measurement record, all values in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JhablaMeasurements {
    /// Chest circumference.
    pub chest: f64,
    /// Waist circumference.
    pub waist: f64,
    /// Full garment length.
    pub full_length: f64,
    /// Sleeve length.
    pub sleeve_length: f64,
    /// Shoulder width.
    pub shoulder: f64,
    /// Neck circumference.
    pub neck_round: f64,
}

impl JhablaMeasurements {
    /// Complete a sparse record with the jhabla baby-size defaults
    /// (chest 22).
    pub fn normalize(m: &Measurements) -> Self {
        let chest = resolve(m.chest, 22.0);
        Self {
            chest,
            waist: resolve(m.waist, chest * 0.95),
            full_length: resolve(m.full_length, 14.0),
            sleeve_length: resolve(m.sleeve_length, 8.0),
            shoulder: resolve(m.shoulder, 7.5),
            neck_round: resolve(m.neck_round, chest * 0.4),
        }
    }
}

/// Derived jhabla construction quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JhablaQuantities {
    /// The normalized measurements the formulas ran on.
    pub measurements: JhablaMeasurements,
    /// chest / 4 + 0.5.
    pub quarter_chest: f64,
    /// chest / 6 + 1.
    pub armhole_depth: f64,
}

impl JhablaQuantities {
    /// Run the jhabla formulas over a normalized record.
    pub fn derive(m: &JhablaMeasurements) -> Self {
        Self {
            measurements: *m,
            quarter_chest: round2(m.chest / 4.0 + 0.5),
            armhole_depth: round2(m.chest / 6.0 + 1.0),
        }
    }

    /// Flatten to a name → value map for the draft record.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let m = &self.measurements;
        BTreeMap::from([
            ("chest".into(), m.chest),
            ("waist".into(), m.waist),
            ("fullLength".into(), m.full_length),
            ("sleeveLength".into(), m.sleeve_length),
            ("shoulder".into(), m.shoulder),
            ("neckRound".into(), m.neck_round),
            ("quarterChest".into(), self.quarter_chest),
            ("armholeDepth".into(), self.armhole_depth),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_normalize_baby_defaults() {
        let j = JhablaMeasurements::normalize(&Measurements::default());
        assert_eq!(j.chest, 22.0);
        assert_relative_eq!(j.waist, 20.9);
        assert_eq!(j.full_length, 14.0);
        assert_eq!(j.sleeve_length, 8.0);
        assert_eq!(j.shoulder, 7.5);
        assert_relative_eq!(j.neck_round, 8.8);
    }

    #[test]
    fn test_derive_reference_values() {
        let j = JhablaMeasurements::normalize(&Measurements::default());
        let q = JhablaQuantities::derive(&j);
        assert_eq!(q.quarter_chest, 6.0);
        assert_eq!(q.armhole_depth, 4.67);
    }
}
