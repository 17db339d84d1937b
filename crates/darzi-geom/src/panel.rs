//! Panel extents for the rectangular garments.

use darzi_measure::jhabla::JhablaQuantities;
use darzi_measure::kurta::KurtaQuantities;
use darzi_measure::pehran::PehranQuantities;
use darzi_measure::rida::RidaQuantities;
use darzi_measure::saya::SayaQuantities;

/// Body-space extent of a rectangular pattern panel, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelExtent {
    /// Panel width in inches.
    pub width_in: f64,
    /// Panel height in inches.
    pub height_in: f64,
}

impl PanelExtent {
    /// Kurta body panel: half chest plus ease, floored at 18 × 28.
    pub fn kurta(q: &KurtaQuantities) -> Self {
        let m = &q.measurements;
        Self {
            width_in: (m.chest / 2.0 + 4.0).max(18.0),
            height_in: (m.full_length + 4.0).max(28.0),
        }
    }

    /// Pehran body panel: half chest (with its ease) plus 3 in.
    pub fn pehran(q: &PehranQuantities) -> Self {
        Self {
            width_in: q.quarter_chest * 2.0 + 3.0,
            height_in: q.measurements.full_length + 4.0,
        }
    }

    /// Saya body panel.
    pub fn saya(q: &SayaQuantities) -> Self {
        Self {
            width_in: q.quarter_chest * 2.0 + 2.5,
            height_in: q.measurements.full_length + 3.0,
        }
    }

    /// Rida body panel (quarter chest wide, back length tall).
    pub fn rida(q: &RidaQuantities) -> Self {
        let m = &q.measurements;
        Self {
            width_in: m.chest / 4.0 + 3.0,
            height_in: m.full_back_length + 3.0,
        }
    }

    /// Jhabla body panel.
    pub fn jhabla(q: &JhablaQuantities) -> Self {
        Self {
            width_in: q.quarter_chest * 2.0 + 2.0,
            height_in: q.measurements.full_length + 2.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use darzi_measure::kurta::KurtaMeasurements;
    use darzi_measure::Measurements;

    #[test]
    fn test_kurta_panel_from_defaults() {
        let q = KurtaQuantities::derive(&KurtaMeasurements::normalize(&Measurements::default()));
        let p = PanelExtent::kurta(&q);
        assert_relative_eq!(p.width_in, 22.0);
        assert_relative_eq!(p.height_in, 32.0);
    }

    #[test]
    fn test_kurta_panel_floors_small_sizes() {
        let q = KurtaQuantities::derive(&KurtaMeasurements::normalize(&Measurements {
            chest: Some(20.0),
            full_length: Some(18.0),
            ..Default::default()
        }));
        let p = PanelExtent::kurta(&q);
        assert_eq!(p.width_in, 18.0);
        assert_eq!(p.height_in, 28.0);
    }
}
