//! Domain layer
//!
//! Pure timer vocabulary with no dependency on the terminal or the runtime:
//! - Clock arithmetic and `HH:MM:SS` rendering
//! - Numeric field parsing, bounds and normalisation
//! - The six UI elements and their startup validation
//! - The labelling policy variants

pub mod clock;
pub mod elements;
pub mod field;
pub mod variant;
