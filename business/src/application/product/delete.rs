use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        match self.repository.find(params.id).await? {
            Some(product) => {
                self.repository.delete(&product).await?;
                self.logger.info(&format!("Product deleted: {}", params.id));
            }
            None => {
                self.logger.debug(&format!(
                    "Product {} does not exist, nothing to delete",
                    params.id
                ));
            }
        }

        Ok(())
    }
}
