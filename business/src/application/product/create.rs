use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::create::{CreateProductParams, CreateProductUseCase};

pub struct CreateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateProductUseCase for CreateProductUseCaseImpl {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError> {
        let mut product = Product::try_from(&params.payload).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected product payload: {}", e));
        })?;

        self.logger
            .info(&format!("Creating product: {}", product.name));
        self.repository.create(&mut product).await?;

        self.logger.info(&format!("Product created: {}", product));
        Ok(product)
    }
}
