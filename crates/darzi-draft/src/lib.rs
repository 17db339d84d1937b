#![warn(missing_docs)]

//! Draft record assembly, persistence, and export.
//!
//! The core pipeline hands a finished [`DraftRecord`] to a
//! [`DraftStore`] and its SVG output to an [`Exporter`]; both are
//! boundary collaborators whose failures never reach the pattern
//! computation.

use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use darzi_measure::Measurements;

pub mod export;
pub mod store;

pub use export::{wrap_svg_html, Exporter, HtmlExporter};
pub use store::{DraftStore, JsonFileStore, StoreError};

/// Key prefix that separates saved drafts from settings and client
/// records in the flat store namespace.
pub const DRAFT_KEY_PREFIX: &str = "draft_";

/// A saved garment draft. Immutable once assembled; the `key` is its
/// sole identity in the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DraftRecord {
    /// Unique store key.
    pub key: String,
    /// The raw measurements the user supplied.
    pub input: Measurements,
    /// Normalized measurements and derived quantities, flattened.
    pub calculated: BTreeMap<String, f64>,
    /// Creation time, Unix milliseconds.
    pub timestamp: u64,
    /// Garment name ("kurta", "izar", ...).
    pub garment: String,
    /// Client the draft was taken for, if named.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
}

impl DraftRecord {
    /// Assemble a record for a garment draft.
    ///
    /// The key embeds the sanitized client name when one is given
    /// (`draft_<name>_<millis>`), otherwise the garment name
    /// (`<garment>_<millis>`); the millisecond timestamp keeps keys
    /// unique across saves.
    pub fn assemble(
        garment: &str,
        input: &Measurements,
        calculated: BTreeMap<String, f64>,
        client_name: Option<&str>,
    ) -> Self {
        let timestamp = unix_millis();
        let client_name = client_name
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);
        let key = match &client_name {
            Some(name) => format!("{DRAFT_KEY_PREFIX}{}_{timestamp}", sanitize_name(name)),
            None => format!("{DRAFT_KEY_PREFIX}{garment}_{timestamp}"),
        };
        Self {
            key,
            input: input.clone(),
            calculated,
            timestamp,
            garment: garment.to_string(),
            client_name,
        }
    }
}

/// Lowercase a client name and collapse whitespace runs to `_` so it
/// can live inside a store key.
pub fn sanitize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut in_space = false;
    for ch in name.trim().chars() {
        if ch.is_whitespace() {
            if !in_space {
                out.push('_');
            }
            in_space = true;
        } else {
            for lower in ch.to_lowercase() {
                out.push(lower);
            }
            in_space = false;
        }
    }
    out
}

/// Current wall-clock time in Unix milliseconds.
///
/// Used only for record identity, never for geometry.
fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
