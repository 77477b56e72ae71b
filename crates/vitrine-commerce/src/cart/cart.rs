//! Cart and line item types.

use crate::catalog::Product;
use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Holds a full product snapshot: the price shown in the cart is the price
/// captured when the item was added, never re-fetched from the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// The product as it was when added.
    pub product: Product,
    /// Quantity, always positive while the line item exists.
    pub quantity: u32,
}

impl LineItem {
    fn new(product: Product) -> Self {
        Self {
            product,
            quantity: 1,
        }
    }

    /// Line subtotal (unit price times quantity).
    pub fn subtotal(&self) -> Money {
        self.product.price * i64::from(self.quantity)
    }
}

/// A shopping cart.
///
/// An ordered collection of line items with at most one line item per
/// product id. Created empty at session start; state lives only for the
/// session. Every operation is total: the UI can only hand us ids and
/// quantities that are defined, so nothing here returns an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a product.
    ///
    /// If a line item for the product already exists its quantity is
    /// incremented, otherwise a new line item with quantity 1 is appended.
    pub fn add(&mut self, product: &Product) {
        if let Some(existing) = self.items.iter_mut().find(|i| i.product.id == product.id) {
            existing.quantity += 1;
        } else {
            self.items.push(LineItem::new(product.clone()));
        }
    }

    /// Remove the line item with the given product id.
    ///
    /// Returns whether anything was removed; a missing id is a no-op.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| i.product.id != id);
        self.items.len() < len_before
    }

    /// Replace the quantity of an existing line item.
    ///
    /// Quantity 0 removes the line item. A missing id is a no-op. Returns
    /// whether the cart changed.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(id);
        }

        if let Some(item) = self.items.iter_mut().find(|i| i.product.id == id) {
            item.quantity = quantity;
            true
        } else {
            false
        }
    }

    /// Clear all items from the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get a line item by product id.
    pub fn get(&self, id: ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.product.id == id)
    }

    /// Line items in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Total price: sum of unit price times quantity across all line items.
    ///
    /// Zero for an empty cart.
    pub fn total(&self, currency: Currency) -> Money {
        let subtotals: Vec<Money> = self.items.iter().map(LineItem::subtotal).collect();
        Money::sum(subtotals.iter(), currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Category;

    fn product(id: u32, price_cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            format!("Product {}", id),
            Money::new(price_cents, Currency::USD),
            Category::Face,
        )
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert!(cart.total(Currency::USD).is_zero());
    }

    #[test]
    fn test_add_same_product_twice_merges_lines() {
        let mut cart = Cart::new();
        let p = product(1, 1000);

        cart.add(&p);
        cart.add(&p);

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.get(p.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add(&p);

        assert!(cart.set_quantity(p.id, 5));
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_zero_removes_line() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add(&p);

        assert!(cart.set_quantity(p.id, 0));
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_set_quantity_missing_id_is_noop() {
        let mut cart = Cart::new();
        cart.add(&product(1, 1000));

        assert!(!cart.set_quantity(ProductId::new(99), 3));
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_remove() {
        let mut cart = Cart::new();
        let p = product(1, 1000);
        cart.add(&p);

        assert!(cart.remove(p.id));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_remove_missing_id_leaves_cart_unchanged() {
        let mut cart = Cart::new();
        cart.add(&product(1, 1000));
        let before = cart.clone();

        assert!(!cart.remove(ProductId::new(42)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_totals_example() {
        // {A: $10 x 2, B: $5 x 1} -> count 3, total $25
        let mut cart = Cart::new();
        let a = product(1, 1000);
        let b = product(2, 500);

        cart.add(&a);
        cart.add(&a);
        cart.add(&b);

        assert_eq!(cart.item_count(), 3);
        assert_eq!(cart.total(Currency::USD).amount_cents, 2500);
    }

    #[test]
    fn test_price_captured_at_add_time() {
        let mut cart = Cart::new();
        let mut p = product(1, 1000);
        cart.add(&p);

        // A later catalog price change does not affect the cart line.
        p.price = Money::new(9999, Currency::USD);
        assert_eq!(cart.total(Currency::USD).amount_cents, 1000);
    }

    #[test]
    fn test_insertion_order_survives_quantity_updates() {
        let mut cart = Cart::new();
        let a = product(1, 1000);
        let b = product(2, 2000);
        let c = product(3, 3000);
        cart.add(&a);
        cart.add(&b);
        cart.add(&c);

        cart.set_quantity(b.id, 7);
        cart.add(&a);

        let ids: Vec<u32> = cart.items().iter().map(|i| i.product.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&product(1, 1000));
        cart.add(&product(2, 2000));

        cart.clear();
        assert!(cart.is_empty());
        assert!(cart.total(Currency::USD).is_zero());
    }

    #[test]
    fn test_line_subtotal() {
        let mut cart = Cart::new();
        let p = product(1, 1250);
        cart.add(&p);
        cart.set_quantity(p.id, 3);

        assert_eq!(cart.get(p.id).unwrap().subtotal().amount_cents, 3750);
    }
}
