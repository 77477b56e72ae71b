//! Product type.

use crate::catalog::Category;
use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Number of star slots rendered next to a product.
pub const MAX_STARS: u32 = 5;

/// A product in the catalog.
///
/// Immutable reference data, defined once at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Current unit price.
    pub price: Money,
    /// Pre-discount price, shown struck through when present.
    pub original_price: Option<Money>,
    /// URL of the product image.
    pub image_url: String,
    /// Average rating, 0.0 to 5.0.
    pub rating: f32,
    /// Number of reviews behind the rating.
    pub review_count: u32,
    /// Category this product belongs to.
    pub category: Category,
    /// Short description for the product card.
    pub description: String,
    /// Whether this product carries the bestseller badge.
    pub bestseller: bool,
}

impl Product {
    /// Create a new product with the required fields.
    ///
    /// The remaining fields default to empty/unset and can be filled in
    /// directly; the demo catalog constructs products as struct literals.
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        price: Money,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            original_price: None,
            image_url: String::new(),
            rating: 0.0,
            review_count: 0,
            category,
            description: String::new(),
            bestseller: false,
        }
    }

    /// Check if this product is on sale (has an original price above the
    /// current price).
    pub fn is_on_sale(&self) -> bool {
        self.original_price
            .map(|orig| orig.amount_cents > self.price.amount_cents)
            .unwrap_or(false)
    }

    /// Calculate the discount percentage if on sale.
    pub fn discount_percentage(&self) -> Option<f64> {
        self.original_price.and_then(|orig| {
            if orig.amount_cents > self.price.amount_cents {
                let savings = orig.amount_cents - self.price.amount_cents;
                Some((savings as f64 / orig.amount_cents as f64) * 100.0)
            } else {
                None
            }
        })
    }

    /// Number of filled stars to render, out of [`MAX_STARS`].
    pub fn filled_stars(&self) -> u32 {
        (self.rating.floor().max(0.0) as u32).min(MAX_STARS)
    }
}
