//! # Builder Pattern
//!
//! Separates the construction of a [`Car`] from its representation, so the same
//! construction steps can produce differently configured cars.
//!
//! ## Structure
//!
//! - [`car`] - The product, [`Car`], three optional fields
//! - [`CarBuilder`] - The capability contract: chained setters plus retrieval
//! - [`sports`] - [`SportsCarBuilder`], the one concrete builder
//! - [`director`] - [`Director`], canned setter sequences
//!
//! ## Semantics
//!
//! - Setters can be called in any order, any number of times. Last write wins.
//! - Retrieval never fails. Fields nobody set stay `None`.
//!
//! ```rust
//! use pattern_recipe::builder::{CarBuilder, Director, SportsCarBuilder};
//!
//! let mut director = Director::new(SportsCarBuilder::new());
//! let car = director.build_standard_car("#EFEFEF");
//! assert_eq!(car.to_string(), "Car specs: Engine - V8, Wheels - 18-inch Alloy, Color - #EFEFEF");
//! ```

pub mod car;
pub mod director;
pub mod sports;

pub use car::*;
pub use director::*;
pub use sports::*;

/// Engines offered by the showcase.
pub const ENGINE_OPTIONS: [&str; 3] = ["V6 Turbo", "V8 Supercharged", "Electric Motor"];

/// Wheels offered by the showcase.
pub const WHEEL_OPTIONS: [&str; 3] = ["18-inch Alloy", "19-inch Carbon Fiber", "20-inch Chrome"];

/// Colour preselected by the showcase.
pub const DEFAULT_COLOR: &str = "#EFEFEF";

/// Contract for anything that assembles a [`Car`] step by step.
///
/// Each setter stores its value and returns the builder so calls can be chained.
pub trait CarBuilder {
    fn set_engine(&mut self, engine: impl Into<String>) -> &mut Self;

    fn set_wheels(&mut self, wheels: impl Into<String>) -> &mut Self;

    fn set_color(&mut self, color: impl Into<String>) -> &mut Self;

    /// Returns the product in its current state, unset fields included.
    fn get_car(&self) -> Car;
}
