use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let mut product = self
            .repository
            .find(params.id)
            .await?
            .ok_or(ProductError::NotFound(params.id))?;

        product.deserialize(&params.payload)?;

        // The row may have been deleted since it was read.
        self.repository
            .update(&product)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound(params.id),
                other => other.into(),
            })?;

        self.logger.info(&format!("Product updated: {}", product));
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_doubles::{MockProductRepo, mock_logger, stored_product};
    use crate::domain::product::category::Category;
    use serde_json::json;

    fn payload(description: &str) -> serde_json::Value {
        json!({
            "name": "Fedora",
            "description": description,
            "price": "12.50",
            "available": false,
            "category": "CLOTHS"
        })
    }

    #[tokio::test]
    async fn should_update_product_when_exists() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .returning(|id| Ok(Some(stored_product(id))));
        mock_repo
            .expect_update()
            .withf(|product| {
                product.id == Some(3) && product.description == "Updated description"
            })
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let product = use_case
            .execute(UpdateProductParams {
                id: 3,
                payload: payload("Updated description"),
            })
            .await
            .unwrap();

        assert_eq!(product.id, Some(3));
        assert_eq!(product.description, "Updated description");
        assert!(!product.available);
        assert_eq!(product.category, Category::Cloths);
    }

    #[tokio::test]
    async fn should_keep_stored_id_when_payload_carries_another() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .returning(|id| Ok(Some(stored_product(id))));
        mock_repo
            .expect_update()
            .withf(|product| product.id == Some(3))
            .returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut body = payload("desc");
        body["id"] = json!(77);
        let product = use_case
            .execute(UpdateProductParams { id: 3, payload: body })
            .await
            .unwrap();

        assert_eq!(product.id, Some(3));
    }

    #[tokio::test]
    async fn should_return_not_found_when_updating_nonexistent_product() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find().returning(|_| Ok(None));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 42,
                payload: payload("desc"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound(42)));
    }

    #[tokio::test]
    async fn should_reject_invalid_payload_without_writing() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .returning(|id| Ok(Some(stored_product(id))));
        mock_repo.expect_update().never();

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let mut body = payload("desc");
        body["available"] = json!("not_a_bool");
        let result = use_case
            .execute(UpdateProductParams { id: 3, payload: body })
            .await;

        match result {
            Err(ProductError::Validation(e)) => {
                assert!(e.message().contains("Invalid type for boolean"))
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_return_not_found_when_row_vanishes_before_update() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find()
            .returning(|id| Ok(Some(stored_product(id))));
        mock_repo
            .expect_update()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateProductParams {
                id: 5,
                payload: payload("desc"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound(5)));
    }
}
