#![warn(missing_docs)]

//! Construction geometry for the darzi pattern drafting kernel.
//!
//! Converts derived construction quantities into named 2D points in
//! body space (inches), and maps body space onto a drawing canvas
//! with a uniform scale. The izar gets a full construction point set
//! with a cubic crotch curve; the remaining garments are rectangular
//! panels whose internal curves the renderers place in drawing space.

pub mod izar;
pub mod mapper;
pub mod panel;

pub use izar::IzarGeometry;
pub use mapper::{Canvas, Mapper};
pub use panel::PanelExtent;
