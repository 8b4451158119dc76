//! # Composite Pattern
//!
//! Composes parts into trees and prices a whole tree the same way as a single part.
//!
//! ## Structure
//!
//! - [`part`] - [`Part`], a tagged variant: `Leaf` or `Composite`
//! - [`error`] - [`StructureError`] for invalid structural edits
//!
//! ## Pricing
//!
//! ```rust
//! use pattern_recipe::composite::Part;
//!
//! let mut board = Part::composite("Motherboard", 300.0);
//! board.add_part(Part::leaf("CPU", 500.0))?;
//!
//! let mut case = Part::composite("Case", 100.0);
//! case.add_part(board)?;
//! assert_eq!(case.get_price(), 900.0);
//! # Ok::<(), pattern_recipe::composite::StructureError>(())
//! ```

pub mod error;
pub mod part;

pub use error::*;
pub use part::*;
