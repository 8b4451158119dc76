//! Canned build sequences.
//!
//! The director holds no state of its own beyond the builder it drives. It only decides
//! the order of the setter calls; the builder still owns the product.

use super::{Car, CarBuilder};
use tracing::debug;

/// Engine used by [`Director::build_standard_car`].
pub const STANDARD_ENGINE: &str = "V8";

/// Wheels used by [`Director::build_standard_car`].
pub const STANDARD_WHEELS: &str = "18-inch Alloy";

/// Drives a [`CarBuilder`] through a fixed sequence of setter calls.
#[derive(Debug, Clone)]
pub struct Director<B: CarBuilder> {
    builder: B,
}

impl<B: CarBuilder> Director<B> {
    pub fn new(builder: B) -> Self {
        Self { builder }
    }

    /// Builds the standard configuration in the requested colour.
    pub fn build_standard_car(&mut self, color: impl Into<String>) -> Car {
        debug!("build_standard_car");
        self.builder
            .set_engine(STANDARD_ENGINE)
            .set_wheels(STANDARD_WHEELS)
            .set_color(color)
            .get_car()
    }

    /// Builds a car from three caller-chosen values.
    pub fn build_custom_car(
        &mut self,
        engine: impl Into<String>,
        wheels: impl Into<String>,
        color: impl Into<String>,
    ) -> Car {
        debug!("build_custom_car");
        self.builder
            .set_engine(engine)
            .set_wheels(wheels)
            .set_color(color)
            .get_car()
    }

    /// Gives the builder back, e.g. to keep configuring after a canned sequence.
    pub fn into_builder(self) -> B {
        self.builder
    }
}
