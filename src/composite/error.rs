//! Error types for part trees.

use thiserror::Error;

/// Errors raised while shaping a part tree.
///
/// Pricing itself never fails; only structural edits can.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StructureError {
    /// Children can only be attached to a composite part.
    #[error("Part '{name}' is a leaf and cannot hold sub-parts")]
    NotComposite { name: String },
}
