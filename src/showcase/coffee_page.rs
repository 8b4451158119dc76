//! Decorator interaction: order a coffee with add-ons.

use super::format_money;
use crate::decorator::{brew, CoffeeItem, Topping, BASE_DESCRIPTION};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{info, instrument};

/// The final order and the wrapping steps that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoffeeReport {
    pub toppings: Vec<Topping>,
    pub description: String,
    pub cost: f64,
    pub steps: Vec<String>,
}

impl Display for CoffeeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Total Cost: {}", format_money(self.cost))?;
        write!(f, "How it's built:")?;
        for (n, step) in self.steps.iter().enumerate() {
            write!(f, "\n  {}. {step}", n + 1)?;
        }
        Ok(())
    }
}

/// Wraps a simple coffee with `toppings`, in the given order.
#[instrument]
pub fn order_coffee(toppings: &[Topping]) -> CoffeeReport {
    let coffee = brew(toppings);

    let mut steps = vec![format!("Start with {BASE_DESCRIPTION}")];
    steps.extend(toppings.iter().map(|topping| {
        format!("Wrap with {} (+{})", topping.label(), topping.cost_delta())
    }));

    let report = CoffeeReport {
        toppings: toppings.to_vec(),
        description: coffee.get_description(),
        cost: coffee.get_cost(),
        steps,
    };
    info!(cost = report.cost, description = %report.description, "Coffee ordered");
    report
}
