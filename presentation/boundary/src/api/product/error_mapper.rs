use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::DataValidationError;
use business::domain::product::errors::ProductError;

use crate::api::error::{
    ErrorResponse, IntoErrorResponse, bad_request, internal_server_error, not_found,
};

impl IntoErrorResponse for DataValidationError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        bad_request(self.message())
    }
}

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ProductError::Validation(e) => e.into_error_response(),
            ProductError::NotFound(id) => {
                not_found(format!("Product with id '{id}' was not found."))
            }
            ProductError::Repository(e) => internal_server_error(e),
        }
    }
}
