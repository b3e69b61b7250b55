use async_trait::async_trait;
use bigdecimal::BigDecimal;

use crate::domain::errors::RepositoryError;

use super::category::Category;
use super::model::Product;

/// Persistence port for products.
///
/// Every write runs in its own transaction and either commits fully or not at
/// all. Reads always hit the store.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Inserts `product` as a new row and writes the store-assigned id back.
    async fn create(&self, product: &mut Product) -> Result<(), RepositoryError>;
    /// Replaces the row with `product.id`; never inserts.
    async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_availability(&self, available: bool)
    -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_price(&self, price: &BigDecimal) -> Result<Vec<Product>, RepositoryError>;
}
