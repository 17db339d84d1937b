#![warn(missing_docs)]

//! SVG outline rendering for darzi pattern drafts.
//!
//! Each garment gets a renderer that consumes its derived quantities
//! (and, for the izar, the mapped construction point set) and emits a
//! self-contained SVG document: background, optional 1-inch grid,
//! guide lines, the panel outline, measurement labels, and a seam
//! allowance visualization.
//!
//! Seam allowance policy: rectangular panels get a true outward
//! offset polygon stroked wide and translucent; panels with a curve
//! segment re-stroke the same curve path with a wide low-opacity
//! stroke instead of computing a true offset curve. The re-stroke is
//! a deliberate approximation kept for output parity.

pub mod izar;
pub mod jhabla;
pub mod kurta;
pub mod pehran;
pub mod rida;
pub mod saya;
pub mod writer;

pub use izar::render_izar;
pub use jhabla::render_jhabla;
pub use kurta::render_kurta;
pub use pehran::render_pehran;
pub use rida::render_rida;
pub use saya::render_saya;

/// Rendering toggles shared by all garments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Seam allowance in inches; 0 disables the visualization.
    pub seam_allowance: f64,
    /// Draw the 1-inch grid.
    pub show_grid: bool,
    /// Draw measurement labels.
    pub show_measurements: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            seam_allowance: 0.5,
            show_grid: true,
            show_measurements: true,
        }
    }
}

/// Translucent green used by every seam-allowance visualization.
pub(crate) const SEAM_COLOR: &str = "#10b981";
