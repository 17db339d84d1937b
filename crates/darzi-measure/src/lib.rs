#![warn(missing_docs)]

//! Measurement normalization and the pattern formula engine.
//!
//! Each supported garment gets two stages, both pure:
//!
//! 1. **Normalize** — a sparse [`Measurements`] record is completed
//!    into a garment-specific record. Missing or unusable values
//!    (absent, zero, negative, NaN) are replaced by the garment's
//!    documented defaults, resolved in dependency order so that a
//!    default derived from another measurement sees the resolved
//!    value. Normalization never rejects input.
//! 2. **Derive** — fixed affine formulas map the complete record to
//!    the construction quantities used by the geometry builders.
//!    Every derived value is rounded to 2 decimals, half away from
//!    zero.
//!
//! Running either stage twice on the same input yields identical
//! output; nothing here reads the clock or any other ambient state.

use serde::{Deserialize, Serialize};

pub mod izar;
pub mod jhabla;
pub mod kurta;
pub mod pehran;
pub mod rida;
pub mod saya;

/// A sparse body measurement record, all values in inches.
///
/// This is the union of the inputs of all six garments; each garment
/// reads only the fields it needs. Field names serialize in camelCase
/// for compatibility with saved draft records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Measurements {
    /// Chest circumference.
    pub chest: Option<f64>,
    /// Waist circumference.
    pub waist: Option<f64>,
    /// Hip circumference.
    pub hip: Option<f64>,
    /// Full garment length.
    pub full_length: Option<f64>,
    /// Sleeve length.
    pub sleeve_length: Option<f64>,
    /// Neck circumference.
    pub neck_round: Option<f64>,
    /// Shoulder width.
    pub shoulder: Option<f64>,
    /// Hem / leg-opening width (izar).
    pub bottom_width: Option<f64>,
    /// Front length from shoulder (rida).
    pub full_front_length: Option<f64>,
    /// Back length from shoulder (rida).
    pub full_back_length: Option<f64>,
}

/// Resolve one measurement: keep the caller's value only when it is a
/// finite, strictly positive number, otherwise use `default`.
pub(crate) fn resolve(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v,
        _ => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_accepts_positive_finite() {
        assert_eq!(resolve(Some(36.0), 40.0), 36.0);
        assert_eq!(resolve(Some(0.01), 40.0), 0.01);
    }

    #[test]
    fn test_resolve_rejects_unusable_values() {
        assert_eq!(resolve(None, 40.0), 40.0);
        assert_eq!(resolve(Some(0.0), 40.0), 40.0);
        assert_eq!(resolve(Some(-3.0), 40.0), 40.0);
        assert_eq!(resolve(Some(f64::NAN), 40.0), 40.0);
        assert_eq!(resolve(Some(f64::INFINITY), 40.0), 40.0);
    }

    #[test]
    fn test_measurements_camel_case_round_trip() {
        let json = r#"{"chest":36,"fullLength":28,"neckRound":12.6}"#;
        let m: Measurements = serde_json::from_str(json).unwrap();
        assert_eq!(m.chest, Some(36.0));
        assert_eq!(m.full_length, Some(28.0));
        assert_eq!(m.neck_round, Some(12.6));
        assert_eq!(m.waist, None);
    }
}
