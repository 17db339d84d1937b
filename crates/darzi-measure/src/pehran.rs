//! Pehran (long loose tunic) measurements and construction quantities.

use std::collections::BTreeMap;

use darzi_math::round2;

use crate::{resolve, Measurements};

/// Complete pehran measurement record, all values in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PehranMeasurements {
    /// Chest circumference.
    pub chest: f64,
    /// Waist circumference.
    pub waist: f64,
    /// Full garment length.
    pub full_length: f64,
    /// Sleeve length.
    pub sleeve_length: f64,
    /// Neck circumference.
    pub neck_round: f64,
    /// Shoulder width.
    pub shoulder: f64,
}

impl PehranMeasurements {
    /// Complete a sparse record with the pehran defaults (chest 40).
    pub fn normalize(m: &Measurements) -> Self {
        let chest = resolve(m.chest, 40.0);
        let full_length = resolve(m.full_length, 42.0);
        Self {
            chest,
            waist: resolve(m.waist, chest * 0.92),
            full_length,
            sleeve_length: resolve(m.sleeve_length, full_length * 0.45),
            neck_round: resolve(m.neck_round, chest * 0.32),
            shoulder: resolve(m.shoulder, chest * 0.24),
        }
    }
}

/// Derived pehran construction quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PehranQuantities {
    /// The normalized measurements the formulas ran on.
    pub measurements: PehranMeasurements,
    /// chest / 4 + 1.5.
    pub quarter_chest: f64,
    /// chest / 5 + 1.75.
    pub armhole_depth: f64,
    /// neckRound / 10.
    pub front_neck_depth: f64,
}

impl PehranQuantities {
    /// Run the pehran formulas over a normalized record.
    pub fn derive(m: &PehranMeasurements) -> Self {
        Self {
            measurements: *m,
            quarter_chest: round2(m.chest / 4.0 + 1.5),
            armhole_depth: round2(m.chest / 5.0 + 1.75),
            front_neck_depth: round2(m.neck_round / 10.0),
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
            ("neckRound".into(), m.neck_round),
            ("shoulder".into(), m.shoulder),
            ("quarterChest".into(), self.quarter_chest),
            ("armholeDepth".into(), self.armhole_depth),
            ("frontNeckDepth".into(), self.front_neck_depth),
        ])
    }
}
