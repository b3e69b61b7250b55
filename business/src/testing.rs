//! Random catalog data for test suites.

use bigdecimal::BigDecimal;
use fake::Fake;
use fake::faker::lorem::en::Sentence;
use rand::Rng;
use rand::seq::IndexedRandom;
use strum::IntoEnumIterator;

use crate::domain::product::category::Category;
use crate::domain::product::model::Product;

/// Names are drawn from a small pool so that name filters match several rows.
const NAMES: [&str; 11] = [
    "Hat", "Pants", "Shirt", "Apple", "Banana", "Pots", "Towels", "Ford", "Chevy", "Hammer",
    "Wrench",
];

/// Builds transient products with plausible random field values.
pub struct ProductFactory;

impl ProductFactory {
    pub fn build() -> Product {
        let mut rng = rand::rng();
        let categories: Vec<Category> = Category::iter().collect();

        Product {
            id: None,
            name: NAMES.choose(&mut rng).copied().unwrap_or("Hat").to_string(),
            description: Sentence(3..8).fake(),
            price: BigDecimal::new(rng.random_range(50i64..=200_000).into(), 2),
            available: rng.random_bool(0.5),
            category: categories.choose(&mut rng).copied().unwrap_or_default(),
        }
    }

    pub fn build_with_category(category: Category) -> Product {
        Product {
            category,
            ..Self::build()
        }
    }

    pub fn batch(count: usize) -> Vec<Product> {
        (0..count).map(|_| Self::build()).collect()
    }
}
