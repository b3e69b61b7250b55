use std::fmt::Display;

use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};
use tracing::{error, warn};

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub status: u16,
    pub error: String,
    pub message: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

fn respond(status: StatusCode, message: impl Display) -> (StatusCode, Json<ErrorResponse>) {
    let error = match status {
        StatusCode::BAD_REQUEST => "Bad Request",
        StatusCode::NOT_FOUND => "Not Found",
        StatusCode::METHOD_NOT_ALLOWED => "Method not Allowed",
        StatusCode::UNSUPPORTED_MEDIA_TYPE => "Unsupported media type",
        _ => "Internal Server Error",
    };
    let message = message.to_string();

    if status.is_server_error() {
        error!(status = status.as_u16(), "{message}");
    } else {
        warn!(status = status.as_u16(), "{message}");
    }

    (
        status,
        Json(ErrorResponse {
            status: status.as_u16(),
            error: error.to_string(),
            message,
        }),
    )
}

pub fn bad_request(message: impl Display) -> (StatusCode, Json<ErrorResponse>) {
    respond(StatusCode::BAD_REQUEST, message)
}

pub fn not_found(message: impl Display) -> (StatusCode, Json<ErrorResponse>) {
    respond(StatusCode::NOT_FOUND, message)
}

pub fn method_not_supported(message: impl Display) -> (StatusCode, Json<ErrorResponse>) {
    respond(StatusCode::METHOD_NOT_ALLOWED, message)
}

pub fn mediatype_not_supported(message: impl Display) -> (StatusCode, Json<ErrorResponse>) {
    respond(StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
}

pub fn internal_server_error(message: impl Display) -> (StatusCode, Json<ErrorResponse>) {
    respond(StatusCode::INTERNAL_SERVER_ERROR, message)
}
