//! Product catalog module.
//!
//! Contains the immutable product list, categories, and category filtering.

mod category;
mod filter;
mod product;

pub use category::Category;
pub use filter::{Catalog, CategoryFilter};
pub use product::{Product, MAX_STARS};
