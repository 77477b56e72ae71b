//! Commerce domain types and logic for the Vitrine storefront.
//!
//! This crate holds everything stateful or reusable behind the single-page
//! demo UI:
//!
//! - **Catalog**: immutable products, categories, and category filtering
//! - **Cart**: shopping cart with line items and derived totals
//! - **Money**: cents-based monetary values
//!
//! # Example
//!
//! ```rust
//! use vitrine_commerce::prelude::*;
//!
//! let lipstick = Product::new(
//!     ProductId::new(1),
//!     "Velvet Lipstick",
//!     Money::new(8990, Currency::USD),
//!     Category::Lips,
//! );
//!
//! let mut cart = Cart::new();
//! cart.add(&lipstick);
//! cart.add(&lipstick);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total(Currency::USD).display(), "$179.80");
//! ```

pub mod cart;
pub mod catalog;
pub mod ids;
pub mod money;

pub use cart::{Cart, LineItem};
pub use catalog::{Catalog, Category, CategoryFilter, Product};
pub use ids::ProductId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::cart::{Cart, LineItem};
    pub use crate::catalog::{Catalog, Category, CategoryFilter, Product};
    pub use crate::ids::ProductId;
    pub use crate::money::{Currency, Money};
}
