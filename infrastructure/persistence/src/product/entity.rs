use bigdecimal::BigDecimal;
use sqlx::FromRow;

use business::domain::product::category::Category;
use business::domain::product::model::Product;

/// Scale of the `price` column; the driver may hand back extra zeros.
const PRICE_SCALE: i64 = 2;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub available: bool,
    pub category: String,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price.with_scale(PRICE_SCALE),
            self.available,
            Category::from_name_or_unknown(&self.category),
        )
    }
}
