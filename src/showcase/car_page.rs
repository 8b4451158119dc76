//! Builder interaction: configure a car and inspect the product.

use super::ShowcaseError;
use crate::builder::{
    Car, CarBuilder, Director, SportsCarBuilder, DEFAULT_COLOR, ENGINE_OPTIONS, WHEEL_OPTIONS,
};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use tracing::{info, instrument};

/// Choices made on the builder page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarOptions {
    pub engine: String,
    pub wheels: String,
    pub color: String,
}

impl Default for CarOptions {
    fn default() -> Self {
        Self {
            engine: ENGINE_OPTIONS[0].to_string(),
            wheels: WHEEL_OPTIONS[0].to_string(),
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// What the builder page shows once a car has been built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarReport {
    pub car: Car,
    pub specs: String,
    /// Text colour readable on top of the car's colour: `black` or `white`.
    pub text_color: String,
}

impl Display for CarReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Your custom car has been built!")?;
        writeln!(f, "{}", self.specs)?;
        write!(
            f,
            "Selected Color: {} (label text: {})",
            self.car.color.as_deref().unwrap_or("None"),
            self.text_color
        )
    }
}

/// Picks a label colour with enough contrast against `color` (`#RRGGBB`).
pub fn contrast_text_color(color: &str) -> Result<&'static str, ShowcaseError> {
    let trimmed = color.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(ShowcaseError::InvalidColor(color.to_string()));
    }
    let value =
        u32::from_str_radix(hex, 16).map_err(|_| ShowcaseError::InvalidColor(color.to_string()))?;
    Ok(if value > 0x888888 { "black" } else { "white" })
}

fn report(car: Car) -> Result<CarReport, ShowcaseError> {
    let text_color = contrast_text_color(car.color.as_deref().unwrap_or_default())?;
    Ok(CarReport {
        specs: car.to_string(),
        car,
        text_color: text_color.to_string(),
    })
}

/// Builds a car from the page's choices.
///
/// # Errors
/// [`ShowcaseError::InvalidColor`] when the colour is not `#RRGGBB`.
#[instrument]
pub fn build_car(options: &CarOptions) -> Result<CarReport, ShowcaseError> {
    let car = SportsCarBuilder::new()
        .set_engine(options.engine.as_str())
        .set_wheels(options.wheels.as_str())
        .set_color(options.color.as_str())
        .get_car();

    let report = report(car)?;
    info!(specs = %report.specs, "Car built");
    Ok(report)
}

/// Builds the director's standard car in `color`.
#[instrument]
pub fn build_standard_car(color: &str) -> Result<CarReport, ShowcaseError> {
    let mut director = Director::new(SportsCarBuilder::new());
    let report = report(director.build_standard_car(color))?;
    info!(specs = %report.specs, "Standard car built");
    Ok(report)
}
