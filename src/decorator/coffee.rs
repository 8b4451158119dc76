//! The base coffee and its wrapper.

use super::Topping;

/// Cost of a coffee with no add-ons.
pub const BASE_COST: f64 = 5.0;

/// Description of a coffee with no add-ons.
pub const BASE_DESCRIPTION: &str = "Simple Coffee";

/// Anything that can be sold as a coffee.
///
/// Implemented by the plain [`SimpleCoffee`], by every [`WithTopping`] wrapper, and by
/// `Box<dyn CoffeeItem>` so stacks can be assembled from runtime choices.
pub trait CoffeeItem {
    fn get_cost(&self) -> f64;

    fn get_description(&self) -> String;

    /// Wraps this item with `topping`.
    fn with(self, topping: Topping) -> WithTopping<Self>
    where
        Self: Sized,
    {
        WithTopping::new(self, topping)
    }
}

/// The undecorated coffee.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SimpleCoffee;

impl CoffeeItem for SimpleCoffee {
    fn get_cost(&self) -> f64 {
        BASE_COST
    }

    fn get_description(&self) -> String {
        BASE_DESCRIPTION.to_string()
    }
}

/// Owns exactly one inner item and adds a topping on top of it.
#[derive(Debug, Clone, PartialEq)]
pub struct WithTopping<C> {
    inner: C,
    topping: Topping,
}

impl<C: CoffeeItem> WithTopping<C> {
    pub fn new(inner: C, topping: Topping) -> Self {
        Self { inner, topping }
    }

    pub fn topping(&self) -> Topping {
        self.topping
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Removes this layer, handing back the wrapped item.
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: CoffeeItem> CoffeeItem for WithTopping<C> {
    fn get_cost(&self) -> f64 {
        self.inner.get_cost() + self.topping.cost_delta()
    }

    fn get_description(&self) -> String {
        let mut description = self.inner.get_description();
        description.push_str(&self.topping.suffix());
        description
    }
}

impl<C: CoffeeItem + ?Sized> CoffeeItem for Box<C> {
    fn get_cost(&self) -> f64 {
        (**self).get_cost()
    }

    fn get_description(&self) -> String {
        (**self).get_description()
    }
}
