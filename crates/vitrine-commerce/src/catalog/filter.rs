//! Catalog container and category filtering.

use crate::catalog::{Category, Product};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// A category filter selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Show every product.
    #[default]
    All,
    /// Show only products in one category.
    Only(Category),
}

impl CategoryFilter {
    /// Sentinel value used by the filter UI for [`CategoryFilter::All`].
    pub const ALL_VALUE: &'static str = "all";

    /// Check whether a product passes this filter.
    pub fn matches(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }

    /// The value the filter UI submits for this selection.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_VALUE,
            CategoryFilter::Only(category) => category.as_str(),
        }
    }

    /// Parse a filter UI value. Unknown values fall back to `All`.
    pub fn from_str(s: &str) -> Self {
        match Category::from_str(s) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::All,
        }
    }
}

/// The static, immutable list of purchasable products.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Create a catalog from a product list. Order is preserved.
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by id.
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// The subsequence of products passing the filter, in catalog order.
    ///
    /// [`CategoryFilter::All`] returns the full list unchanged.
    pub fn filtered(&self, filter: CategoryFilter) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| filter.matches(p))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn catalog() -> Catalog {
        let mk = |id: u32, category: Category| {
            Product::new(
                ProductId::new(id),
                format!("Product {}", id),
                Money::new(1000, Currency::USD),
                category,
            )
        };
        Catalog::new(vec![
            mk(1, Category::Lips),
            mk(2, Category::Face),
            mk(3, Category::Eyes),
            mk(4, Category::Eyes),
            mk(5, Category::Face),
        ])
    }

    #[test]
    fn test_filter_all_returns_full_catalog_in_order() {
        let catalog = catalog();
        let all = catalog.filtered(CategoryFilter::All);
        assert_eq!(all.len(), 5);
        let ids: Vec<u32> = all.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = catalog();
        let eyes = catalog.filtered(CategoryFilter::Only(Category::Eyes));
        assert_eq!(eyes.len(), 2);
        assert!(eyes.iter().all(|p| p.category == Category::Eyes));
        let ids: Vec<u32> = eyes.iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn test_filter_round_trip() {
        assert_eq!(CategoryFilter::from_str("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::from_str("lips"),
            CategoryFilter::Only(Category::Lips)
        );
        assert_eq!(
            CategoryFilter::Only(Category::Face).as_str(),
            "face"
        );
        assert_eq!(CategoryFilter::All.as_str(), "all");
    }

    #[test]
    fn test_filter_unknown_value_falls_back_to_all() {
        assert_eq!(CategoryFilter::from_str("nails"), CategoryFilter::All);
    }

    #[test]
    fn test_find() {
        let catalog = catalog();
        assert!(catalog.find(ProductId::new(3)).is_some());
        assert!(catalog.find(ProductId::new(99)).is_none());
    }
}
