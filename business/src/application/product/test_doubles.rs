use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bigdecimal::BigDecimal;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::category::Category;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn create(&self, product: &mut Product) -> Result<(), RepositoryError>;
        async fn update(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn delete(&self, product: &Product) -> Result<(), RepositoryError>;
        async fn all(&self) -> Result<Vec<Product>, RepositoryError>;
        async fn find(&self, id: i32) -> Result<Option<Product>, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_availability(&self, available: bool) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_category(&self, category: Category) -> Result<Vec<Product>, RepositoryError>;
        async fn find_by_price(&self, price: &BigDecimal) -> Result<Vec<Product>, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn stored_product(id: i32) -> Product {
    Product::from_repository(
        id,
        "Fedora".to_string(),
        "A red hat".to_string(),
        BigDecimal::from_str("12.50").unwrap(),
        true,
        Category::Cloths,
    )
}
