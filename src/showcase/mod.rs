//! # Showcase
//!
//! One interaction per pattern, the way a page of a demo front end would drive the
//! pattern types: take the user's choices, rebuild the objects from scratch, and return a
//! report that can be rendered as text ([`Display`](std::fmt::Display)) or serialized
//! (`serde`).
//!
//! Nothing is retained between calls. Any session state belongs to the caller.
//!
//! ## Pages
//!
//! - [`car_page`] - [`build_car`] / [`build_standard_car`] → [`CarReport`]
//! - [`pc_page`] - [`assemble_pc`] → [`PcReport`]
//! - [`coffee_page`] - [`order_coffee`] → [`CoffeeReport`]
//! - [`pattern`] - [`Pattern`], titles and concepts for a menu
//!
//! ```rust
//! use pattern_recipe::showcase::{assemble_pc, PcSelection};
//!
//! let report = assemble_pc(&PcSelection::default())?;
//! assert_eq!(report.total, 2450.0);
//! # Ok::<(), pattern_recipe::showcase::ShowcaseError>(())
//! ```

pub mod car_page;
pub mod coffee_page;
pub mod error;
pub mod pattern;
pub mod pc_page;

pub use car_page::*;
pub use coffee_page::*;
pub use error::*;
pub use pattern::*;
pub use pc_page::*;

/// Formats an amount as dollars with thousands separators, e.g. `$2,450.00`.
///
/// Non-finite amounts are rendered as-is (`inf`, `-inf`, `NaN`).
pub fn format_money(amount: f64) -> String {
    if !amount.is_finite() {
        return amount.to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Sign follows the rounded digits, so -0.001 is $0.00.
    let rounds_to_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
    let sign = if amount < 0.0 && !rounds_to_zero { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(0.0), "$0.00");
        assert_eq!(format_money(11.0), "$11.00");
        assert_eq!(format_money(2450.0), "$2,450.00");
        assert_eq!(format_money(1234567.891), "$1,234,567.89");
        assert_eq!(format_money(-20.0), "-$20.00");
        assert_eq!(format_money(-1234.5), "-$1,234.50");
    }

    #[test]
    fn test_format_money_sign_follows_rounding() {
        assert_eq!(format_money(-0.001), "$0.00");
        assert_eq!(format_money(-0.0), "$0.00");
        assert_eq!(format_money(-0.005001), "-$0.01");
    }

    #[test]
    fn test_format_money_non_finite() {
        assert_eq!(format_money(f64::INFINITY), "inf");
        assert_eq!(format_money(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_money(f64::NAN), "NaN");
    }
}
