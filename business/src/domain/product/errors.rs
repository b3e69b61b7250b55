use crate::domain::errors::{DataValidationError, RepositoryError};

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error(transparent)]
    Validation(#[from] DataValidationError),
    #[error("product.not_found")]
    NotFound(i32),
    #[error("repository.persistence")]
    Repository(#[source] RepositoryError),
}

impl From<RepositoryError> for ProductError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Validation(e) => ProductError::Validation(e),
            other => ProductError::Repository(other),
        }
    }
}
