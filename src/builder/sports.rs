//! The concrete builder.

use super::{Car, CarBuilder};
use tracing::debug;

/// Assembles a [`Car`] one field at a time through chained setters.
///
/// ```rust
/// use pattern_recipe::builder::{CarBuilder, SportsCarBuilder};
///
/// let car = SportsCarBuilder::new()
///     .set_engine("V8 Supercharged")
///     .set_wheels("20-inch Chrome")
///     .set_color("#C0FFEE")
///     .get_car();
/// assert_eq!(car.engine.as_deref(), Some("V8 Supercharged"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SportsCarBuilder {
    car: Car,
}

impl SportsCarBuilder {
    /// Starts from an empty car.
    pub fn new() -> Self {
        Self::default()
    }

    /// Consumes the builder and hands back the car in its current state.
    pub fn build(self) -> Car {
        self.car
    }
}

impl CarBuilder for SportsCarBuilder {
    fn set_engine(&mut self, engine: impl Into<String>) -> &mut Self {
        let engine = engine.into();
        debug!(%engine, "set_engine");
        self.car.engine = Some(engine);
        self
    }

    fn set_wheels(&mut self, wheels: impl Into<String>) -> &mut Self {
        let wheels = wheels.into();
        debug!(%wheels, "set_wheels");
        self.car.wheels = Some(wheels);
        self
    }

    fn set_color(&mut self, color: impl Into<String>) -> &mut Self {
        let color = color.into();
        debug!(%color, "set_color");
        self.car.color = Some(color);
        self
    }

    fn get_car(&self) -> Car {
        self.car.clone()
    }
}
