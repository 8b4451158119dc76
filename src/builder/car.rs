use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The product assembled by a [`CarBuilder`](crate::builder::CarBuilder).
///
/// Every field starts as `None` and stays that way until a builder assigns it.
/// No value is validated: whatever string the caller hands over is stored as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub engine: Option<String>,
    pub wheels: Option<String>,
    pub color: Option<String>,
}

impl Car {
    /// Creates an empty car with no field assigned.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` once all three fields carry a value.
    pub fn is_complete(&self) -> bool {
        self.engine.is_some() && self.wheels.is_some() && self.color.is_some()
    }
}

fn field(value: Option<&str>) -> &str {
    value.unwrap_or("None")
}

impl Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Car specs: Engine - {}, Wheels - {}, Color - {}",
            field(self.engine.as_deref()),
            field(self.wheels.as_deref()),
            field(self.color.as_deref())
        )
    }
}
