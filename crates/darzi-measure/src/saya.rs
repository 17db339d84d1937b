//! Saya (long inner dress) measurements and construction quantities.

use std::collections::BTreeMap;

use darzi_math::round2;

use crate::{resolve, Measurements};

/// Complete saya measurement record, all values in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SayaMeasurements {
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

impl SayaMeasurements {
    /// Complete a sparse record with the saya defaults (chest 38).
    pub fn normalize(m: &Measurements) -> Self {
        let chest = resolve(m.chest, 38.0);
        Self {
            chest,
            waist: resolve(m.waist, chest * 0.9),
            full_length: resolve(m.full_length, 40.0),
            sleeve_length: resolve(m.sleeve_length, 23.0),
            neck_round: resolve(m.neck_round, chest * 0.32),
            shoulder: resolve(m.shoulder, chest * 0.23),
        }
    }
}

/// Derived saya construction quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SayaQuantities {
    /// The normalized measurements the formulas ran on.
    pub measurements: SayaMeasurements,
    /// chest / 4 + 1.
    pub quarter_chest: f64,
    /// chest / 5 + 1.25.
    pub armhole_depth: f64,
    /// neckRound / 8.
    pub collar_depth: f64,
}

impl SayaQuantities {
    /// Run the saya formulas over a normalized record.
    pub fn derive(m: &SayaMeasurements) -> Self {
        Self {
            measurements: *m,
            quarter_chest: round2(m.chest / 4.0 + 1.0),
            armhole_depth: round2(m.chest / 5.0 + 1.25),
            collar_depth: round2(m.neck_round / 8.0),
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
            ("collarDepth".into(), self.collar_depth),
        ])
    }
}
