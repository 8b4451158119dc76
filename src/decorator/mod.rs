//! # Decorator Pattern
//!
//! Attaches behaviour to a coffee by placing it inside wrapper objects. Each wrapper owns
//! exactly one inner item and delegates to it, adding a fixed cost and a description
//! suffix on the way out.
//!
//! ## Structure
//!
//! - [`coffee`] - [`CoffeeItem`], [`SimpleCoffee`] and the [`WithTopping`] wrapper
//! - [`topping`] - [`Topping`], the available add-ons
//!
//! ## Ordering
//!
//! Cost is a sum, so wrap order does not change it. Descriptions are appended in wrap
//! order, so it does:
//!
//! ```rust
//! use pattern_recipe::decorator::*;
//!
//! let a = wrap_with_sugar(wrap_with_milk(new_base_item()));
//! let b = wrap_with_milk(wrap_with_sugar(new_base_item()));
//! assert_eq!(a.get_cost(), b.get_cost());
//! assert_ne!(a.get_description(), b.get_description());
//! ```

pub mod coffee;
pub mod topping;

pub use coffee::*;
pub use topping::*;

/// A fresh, undecorated coffee.
pub fn new_base_item() -> SimpleCoffee {
    SimpleCoffee
}

/// Adds milk (+2).
pub fn wrap_with_milk<C: CoffeeItem>(item: C) -> WithTopping<C> {
    WithTopping::new(item, Topping::Milk)
}

/// Adds sugar (+1).
pub fn wrap_with_sugar<C: CoffeeItem>(item: C) -> WithTopping<C> {
    WithTopping::new(item, Topping::Sugar)
}

/// Adds whipped cream (+3).
pub fn wrap_with_whipped_cream<C: CoffeeItem>(item: C) -> WithTopping<C> {
    WithTopping::new(item, Topping::WhippedCream)
}

/// Wraps a base coffee with `toppings`, first one innermost.
pub fn brew(toppings: &[Topping]) -> Box<dyn CoffeeItem> {
    let mut coffee: Box<dyn CoffeeItem> = Box::new(new_base_item());
    for topping in toppings {
        coffee = Box::new(coffee.with(*topping));
    }
    coffee
}
