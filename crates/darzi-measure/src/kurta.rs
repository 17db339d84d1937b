//! Kurta (tunic) measurements and construction quantities.
//!
//! The kurta draft also carries the quantities for its saya lining,
//! cut 2.5 in wider and 1.25 in longer than the kurta itself.

use std::collections::BTreeMap;

use darzi_math::round2;

use crate::{resolve, Measurements};

/// Complete kurta measurement record, all values in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KurtaMeasurements {
    /// Chest circumference.
    pub chest: f64,
    /// Waist circumference.
    pub waist: f64,
    /// Hip circumference.
    pub hip: f64,
    /// Full garment length.
    pub full_length: f64,
    /// Sleeve length.
    pub sleeve_length: f64,
    /// Neck circumference.
    pub neck_round: f64,
    /// Shoulder width.
    pub shoulder: f64,
}

impl KurtaMeasurements {
    /// Complete a sparse record with the kurta defaults.
    ///
    /// Chest resolves first (default 36); every proportional default
    /// below it reads the resolved value.
    pub fn normalize(m: &Measurements) -> Self {
        let chest = resolve(m.chest, 36.0);
        let full_length = resolve(m.full_length, 28.0);
        Self {
            chest,
            waist: resolve(m.waist, chest * 0.9),
            hip: resolve(m.hip, chest * 0.95),
            full_length,
            sleeve_length: resolve(m.sleeve_length, full_length * 0.6),
            neck_round: resolve(m.neck_round, chest * 0.35),
            shoulder: resolve(m.shoulder, chest * 0.22),
        }
    }
}

/// Derived kurta construction quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KurtaQuantities {
    /// The normalized measurements the formulas ran on.
    pub measurements: KurtaMeasurements,
    /// chest / 4.
    pub quarter_chest: f64,
    /// waist / 4.
    pub quarter_waist: f64,
    /// hip / 4.
    pub quarter_hip: f64,
    /// chest / 4 − 0.75.
    pub armhole_depth: f64,
    /// neckRound / 12.
    pub front_neck_depth: f64,
    /// Fixed 1.25 in.
    pub back_neck_depth: f64,
    /// Lining chest: chest + 2.5.
    pub saya_chest: f64,
    /// Lining length: fullLength + 1.25.
    pub saya_full_length: f64,
    /// Lining armhole: (chest + 2.5) / 4 − 0.75.
    pub saya_armhole_depth: f64,
}

impl KurtaQuantities {
    /// Run the kurta formulas over a normalized record.
    pub fn derive(m: &KurtaMeasurements) -> Self {
        let saya_chest = m.chest + 2.5;
        Self {
            measurements: *m,
            quarter_chest: round2(m.chest / 4.0),
            quarter_waist: round2(m.waist / 4.0),
            quarter_hip: round2(m.hip / 4.0),
            armhole_depth: round2(m.chest / 4.0 - 0.75),
            front_neck_depth: round2(m.neck_round / 12.0),
            back_neck_depth: 1.25,
            saya_chest,
            saya_full_length: m.full_length + 1.25,
            saya_armhole_depth: round2(saya_chest / 4.0 - 0.75),
        }
    }

    /// Flatten to a name → value map for the draft record.
    pub fn to_map(&self) -> BTreeMap<String, f64> {
        let m = &self.measurements;
        BTreeMap::from([
            ("chest".into(), m.chest),
            ("waist".into(), m.waist),
            ("hip".into(), m.hip),
            ("fullLength".into(), m.full_length),
            ("sleeveLength".into(), m.sleeve_length),
            ("neckRound".into(), m.neck_round),
            ("shoulder".into(), m.shoulder),
            ("quarterChest".into(), self.quarter_chest),
            ("quarterWaist".into(), self.quarter_waist),
            ("quarterHip".into(), self.quarter_hip),
            ("armholeDepth".into(), self.armhole_depth),
            ("frontNeckDepth".into(), self.front_neck_depth),
            ("backNeckDepth".into(), self.back_neck_depth),
            ("sayaChest".into(), self.saya_chest),
            ("sayaFullLength".into(), self.saya_full_length),
            ("sayaArmholeDepth".into(), self.saya_armhole_depth),
        ])
    }
}
