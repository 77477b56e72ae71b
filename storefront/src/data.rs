//! Demo catalog data.
//!
//! The catalog is the only external collaborator of the UI: immutable
//! product records supplied once at startup.

use vitrine_commerce::prelude::*;

/// Currency used by the demo catalog.
pub const DEMO_CURRENCY: Currency = Currency::USD;

fn usd(amount: f64) -> Money {
    Money::from_decimal(amount, DEMO_CURRENCY)
}

/// Build the demo catalog.
pub fn demo_catalog() -> Catalog {
    Catalog::new(vec![
        Product {
            id: ProductId::new(1),
            name: "Little White Lie Lipstick".to_string(),
            price: usd(89.90),
            original_price: Some(usd(120.00)),
            image_url: "https://images.pexels.com/photos/2533266/pexels-photo-2533266.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            rating: 4.8,
            review_count: 1247,
            category: Category::Lips,
            description: "For when you want to look natural after two hours in the mirror".to_string(),
            bestseller: true,
        },
        Product {
            id: ProductId::new(2),
            name: "Liquid Photoshop Foundation".to_string(),
            price: usd(156.90),
            original_price: None,
            image_url: "https://images.pexels.com/photos/3373746/pexels-photo-3373746.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            rating: 4.9,
            review_count: 892,
            category: Category::Face,
            description: "Because real-life Instagram filters are possible after all".to_string(),
            bestseller: true,
        },
        Product {
            id: ProductId::new(3),
            name: "Drama Queen Mascara".to_string(),
            price: usd(67.90),
            original_price: Some(usd(89.90)),
            image_url: "https://images.pexels.com/photos/2533269/pexels-photo-2533269.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            rating: 4.7,
            review_count: 654,
            category: Category::Eyes,
            description: "For anyone who thinks natural lashes are a thing of the past".to_string(),
            bestseller: false,
        },
        Product {
            id: ProductId::new(4),
            name: "Clashing Colors Palette".to_string(),
            price: usd(234.90),
            original_price: None,
            image_url: "https://images.pexels.com/photos/2533327/pexels-photo-2533327.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            rating: 4.6,
            review_count: 423,
            category: Category::Eyes,
            description: "Matching colors is mainstream anyway".to_string(),
            bestseller: false,
        },
        Product {
            id: ProductId::new(5),
            name: "Secondhand Embarrassment Blush".to_string(),
            price: usd(78.90),
            original_price: None,
            image_url: "https://images.pexels.com/photos/3785800/pexels-photo-3785800.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            rating: 4.5,
            review_count: 789,
            category: Category::Face,
            description: "The perfect shade for claiming you woke up like this".to_string(),
            bestseller: false,
        },
        Product {
            id: ProductId::new(6),
            name: "Fake Confidence Gloss".to_string(),
            price: usd(45.90),
            original_price: Some(usd(65.90)),
            image_url: "https://images.pexels.com/photos/3373739/pexels-photo-3373739.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            rating: 4.4,
            review_count: 567,
            category: Category::Lips,
            description: "Shine that lends you a little borrowed self-esteem".to_string(),
            bestseller: false,
        },
        Product {
            id: ProductId::new(7),
            name: "Augmented Reality Primer".to_string(),
            price: usd(123.90),
            original_price: None,
            image_url: "https://images.pexels.com/photos/3785804/pexels-photo-3785804.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            rating: 4.8,
            review_count: 345,
            category: Category::Face,
            description: "Builds a slightly improved version of you".to_string(),
            bestseller: false,
        },
        Product {
            id: ProductId::new(8),
            name: "Lost Art Eyeliner".to_string(),
            price: usd(56.90),
            original_price: None,
            image_url: "https://images.pexels.com/photos/2533270/pexels-photo-2533270.jpeg?auto=compress&cs=tinysrgb&w=400".to_string(),
            rating: 4.3,
            review_count: 234,
            category: Category::Eyes,
            description: "Because drawing a straight line is a lost art".to_string(),
            bestseller: false,
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = demo_catalog();
        let ids: HashSet<ProductId> = catalog.products().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn test_catalog_size() {
        assert_eq!(demo_catalog().len(), 8);
    }

    #[test]
    fn test_ratings_within_range() {
        for product in demo_catalog().products() {
            assert!(
                (0.0..=5.0).contains(&product.rating),
                "rating out of range for {}",
                product.name
            );
        }
    }

    #[test]
    fn test_every_category_is_represented() {
        let catalog = demo_catalog();
        for category in Category::ALL {
            assert!(
                !catalog.filtered(CategoryFilter::Only(category)).is_empty(),
                "no products in {}",
                category
            );
        }
    }

    #[test]
    fn test_single_currency() {
        for product in demo_catalog().products() {
            assert_eq!(product.price.currency, DEMO_CURRENCY);
        }
    }

    #[test]
    fn test_sale_products_report_a_discount() {
        let catalog = demo_catalog();
        let on_sale: Vec<_> = catalog
            .products()
            .iter()
            .filter(|p| p.original_price.is_some())
            .collect();
        assert!(!on_sale.is_empty());
        for product in on_sale {
            assert!(product.is_on_sale(), "{} not on sale", product.name);
            assert!(product.discount_percentage().unwrap() > 0.0);
        }
    }

    #[test]
    fn test_has_bestsellers() {
        assert!(demo_catalog().products().iter().any(|p| p.bestseller));
    }
}
