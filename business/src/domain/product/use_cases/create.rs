use async_trait::async_trait;
use serde_json::Value;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

pub struct CreateProductParams {
    /// Decoded request body, validated by `Product::deserialize`.
    pub payload: Value,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
