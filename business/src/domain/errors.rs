use std::error::Error;

pub type BoxError = Box<dyn Error + Send + Sync + 'static>;

/// The single recoverable failure of the catalog core.
///
/// Raised when client input or a stored value does not satisfy the product
/// contract. The message is meant to be shown to the caller as-is; the
/// optional source keeps the underlying cause (e.g. a driver error).
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct DataValidationError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl DataValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            source: Some(source.into()),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Repository errors for domain layer.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Validation(#[from] DataValidationError),
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.database_error")]
    DatabaseError(#[source] BoxError),
}

impl RepositoryError {
    pub fn not_found() -> Self {
        RepositoryError::NotFound
    }
    pub fn database_error(source: impl Into<BoxError>) -> Self {
        RepositoryError::DatabaseError(source.into())
    }
}
