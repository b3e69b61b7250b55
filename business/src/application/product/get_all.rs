use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::category::Category;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<Vec<Product>, ProductError> {
        let products = if let Some(name) = params.name.as_deref() {
            self.logger
                .info(&format!("Finding products by name: {}", name));
            self.repository.find_by_name(name).await?
        } else if let Some(category) = params.category.as_deref() {
            self.logger
                .info(&format!("Finding products by category: {}", category));
            let category = Category::from_name(&category.to_uppercase())?;
            self.repository.find_by_category(category).await?
        } else if let Some(available) = params.available.as_deref() {
            self.logger
                .info(&format!("Finding products by availability: {}", available));
            self.repository
                .find_by_availability(parse_availability(available))
                .await?
        } else {
            self.logger.info("Fetching all products");
            self.repository.all().await?
        };

        self.logger
            .info(&format!("Found {} products", products.len()));
        Ok(products)
    }
}

fn parse_availability(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "true" | "yes" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::product::test_doubles::{MockProductRepo, mock_logger, stored_product};

    fn use_case(mock_repo: MockProductRepo) -> GetAllProductsUseCaseImpl {
        GetAllProductsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_all_products_without_filters() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_all()
            .returning(|| Ok(vec![stored_product(1), stored_product(2)]));

        let products = use_case(mock_repo)
            .execute(GetAllProductsParams::default())
            .await
            .unwrap();

        assert_eq!(products.len(), 2);
    }

    #[tokio::test]
    async fn should_return_empty_list_for_empty_store() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_all().returning(|| Ok(vec![]));

        let products = use_case(mock_repo)
            .execute(GetAllProductsParams::default())
            .await
            .unwrap();

        assert!(products.is_empty());
    }

    #[tokio::test]
    async fn should_prefer_name_filter_over_others() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_name()
            .withf(|name| name == "Fedora")
            .times(1)
            .returning(|_| Ok(vec![stored_product(1)]));
        mock_repo.expect_find_by_category().never();
        mock_repo.expect_find_by_availability().never();

        let products = use_case(mock_repo)
            .execute(GetAllProductsParams {
                name: Some("Fedora".to_string()),
                category: Some("CLOTHS".to_string()),
                available: Some("true".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
    }

    #[tokio::test]
    async fn should_match_category_case_insensitively() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_category()
            .withf(|category| *category == Category::Housewares)
            .times(1)
            .returning(|_| Ok(vec![]));

        let result = use_case(mock_repo)
            .execute(GetAllProductsParams {
                category: Some("housewares".to_string()),
                ..Default::default()
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_query_unknown_category_literally() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_category()
            .withf(|category| *category == Category::Unknown)
            .times(1)
            .returning(|_| Ok(vec![]));
        mock_repo.expect_all().never();

        let result = use_case(mock_repo)
            .execute(GetAllProductsParams {
                category: Some("UNKNOWN".to_string()),
                ..Default::default()
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_unrecognized_category() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo.expect_find_by_category().never();

        let result = use_case(mock_repo)
            .execute(GetAllProductsParams {
                category: Some("gadgets".to_string()),
                ..Default::default()
            })
            .await;

        match result {
            Err(ProductError::Validation(e)) => assert!(e.message().contains("Invalid attribute")),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn should_filter_by_availability() {
        let mut mock_repo = MockProductRepo::new();
        mock_repo
            .expect_find_by_availability()
            .withf(|available| *available)
            .times(1)
            .returning(|_| Ok(vec![stored_product(1)]));

        let products = use_case(mock_repo)
            .execute(GetAllProductsParams {
                available: Some("Yes".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(products.len(), 1);
    }

    #[test]
    fn should_parse_availability_flags() {
        assert!(parse_availability("true"));
        assert!(parse_availability("TRUE"));
        assert!(parse_availability("1"));
        assert!(!parse_availability("false"));
        assert!(!parse_availability("no"));
        assert!(!parse_availability(""));
    }
}
