//! Add-ons a coffee can be wrapped with.

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// A single add-on. Each one contributes a fixed cost and a description suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Topping {
    Milk,
    Sugar,
    WhippedCream,
}

impl Topping {
    pub const ALL: [Topping; 3] = [Topping::Milk, Topping::Sugar, Topping::WhippedCream];

    /// Amount added to the wrapped item's cost.
    pub fn cost_delta(self) -> f64 {
        match self {
            Topping::Milk => 2.0,
            Topping::Sugar => 1.0,
            Topping::WhippedCream => 3.0,
        }
    }

    /// Human-readable name, e.g. `Whipped Cream`.
    pub fn label(self) -> &'static str {
        match self {
            Topping::Milk => "Milk",
            Topping::Sugar => "Sugar",
            Topping::WhippedCream => "Whipped Cream",
        }
    }

    /// Text appended to the wrapped item's description.
    pub fn suffix(self) -> String {
        format!(", with {}", self.label())
    }

    fn key(self) -> &'static str {
        match self {
            Topping::Milk => "milk",
            Topping::Sugar => "sugar",
            Topping::WhippedCream => "whipped-cream",
        }
    }
}

impl Display for Topping {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Returned when a string names no known topping.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Unknown topping '{0}' (expected one of: milk, sugar, whipped-cream)")]
pub struct UnknownTopping(pub String);

impl FromStr for Topping {
    type Err = UnknownTopping;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['_', ' '], "-");
        Topping::ALL
            .into_iter()
            .find(|topping| topping.key() == normalized)
            .ok_or_else(|| UnknownTopping(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_common_spellings() {
        assert_eq!("milk".parse::<Topping>(), Ok(Topping::Milk));
        assert_eq!("Sugar".parse::<Topping>(), Ok(Topping::Sugar));
        assert_eq!("whipped_cream".parse::<Topping>(), Ok(Topping::WhippedCream));
        assert_eq!("Whipped Cream".parse::<Topping>(), Ok(Topping::WhippedCream));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(
            "caramel".parse::<Topping>(),
            Err(UnknownTopping("caramel".to_string()))
        );
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for topping in Topping::ALL {
            assert_eq!(topping.to_string().parse::<Topping>(), Ok(topping));
        }
    }
}
