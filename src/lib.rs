//! # Pattern Recipe
//!
//! > **Three classic object-oriented design patterns, expressed in Rust.**
//!
//! Each pattern lives in its own module and shares nothing with the others. They are
//! small on purpose: the point is the shape of the types, not the amount of code.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. [`builder`]
//! A [`Car`](builder::Car) assembled field by field through chained setters on a
//! [`SportsCarBuilder`](builder::SportsCarBuilder), optionally driven by a
//! [`Director`](builder::Director).
//!
//! ### 2. [`composite`]
//! A [`Part`](composite::Part) tree. Leaves and composites answer `get_price()` the same
//! way; composites sum their children recursively.
//!
//! ### 3. [`decorator`]
//! A [`SimpleCoffee`](decorator::SimpleCoffee) wrapped in any stack of
//! [`WithTopping`](decorator::WithTopping) layers, each adding cost and description.
//!
//! ### 4. [`showcase`]
//! The interactive side: one function per pattern that takes user choices and returns a
//! report ready for display or JSON.
//!
//! ### 5. [`lifecycle`]
//! Process start-up, i.e. [`setup_tracing`](lifecycle::setup_tracing).
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### Tagged variants over class hierarchies
//! The composite is an `enum` whose `Composite` variant owns a `Vec<Part>`. Ownership
//! makes cycles unrepresentable, so pricing needs no cycle guard.
//!
//! ### Traits at the capability seams
//! [`CarBuilder`](builder::CarBuilder) and [`CoffeeItem`](decorator::CoffeeItem) are the
//! contracts. Wrappers are generic over their inner item, and `Box<dyn CoffeeItem>`
//! covers stacks chosen at runtime.
//!
//! ### Type-Safe Error Handling
//! Only structural edits and colour parsing can fail. Each has its own `thiserror` enum
//! ([`StructureError`](composite::StructureError),
//! [`ShowcaseError`](showcase::ShowcaseError)).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run -- builder --engine "V8 Supercharged" --color "#1E90FF"
//! cargo run -- composite --no-gpu
//! cargo run -- --json decorator --add milk --add sugar --add whipped-cream
//! cargo test
//! ```

pub mod builder;
pub mod composite;
pub mod decorator;
pub mod lifecycle;
pub mod showcase;
