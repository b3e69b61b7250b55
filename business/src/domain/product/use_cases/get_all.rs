use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;

/// Optional query filters, as received from the caller.
///
/// At most one applies, checked in the order `name`, `category`, `available`.
#[derive(Debug, Clone, Default)]
pub struct GetAllProductsParams {
    pub name: Option<String>,
    pub category: Option<String>,
    pub available: Option<String>,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError>;
}
