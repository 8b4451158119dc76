//! Error types for showcase interactions.

use crate::composite::StructureError;
use thiserror::Error;

/// Errors that can occur while running a showcase interaction.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ShowcaseError {
    /// The colour is not a `#RRGGBB` hex value.
    #[error("Invalid colour '{0}': expected #RRGGBB")]
    InvalidColor(String),

    /// A part tree could not be assembled.
    #[error(transparent)]
    Structure(#[from] StructureError),
}
