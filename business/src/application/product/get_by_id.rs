use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Fetching product by id: {}", params.id));

        self.repository
            .find(params.id)
            .await?
            .ok_or(ProductError::NotFound(params.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_doubles::{MockProductRepo, mock_logger, stored_product};
    use crate::domain::errors::RepositoryError;

    #[tokio::test]
    async fn should_return_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .withf(|id| *id == 4)
            .returning(|id| Ok(Some(stored_product(id))));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(GetProductByIdParams { id: 4 })
            .await
            .unwrap();

        assert_eq!(product.id, Some(4));
        assert_eq!(product.name, "Fedora");
    }

    #[tokio::test]
    async fn should_return_not_found_when_absent() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find().returning(|_| Ok(None));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 9 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound(9)));
    }

    #[tokio::test]
    async fn should_propagate_database_failure() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find().returning(|_| {
            Err(RepositoryError::database_error(std::io::Error::other(
                "connection refused",
            )))
        });

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(GetProductByIdParams { id: 1 }).await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
