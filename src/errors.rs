use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

/// Failures surfaced by the hotel endpoints. Every variant maps to a bare
/// status response, no body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("requested entity was not found")]
    NotFound,

    #[error("ticket does not grant hotel access")]
    PaymentRequired,

    #[error("missing or invalid credentials")]
    Unauthorized,

    #[error("database query failed: {0}")]
    Database(#[from] sqlx::Error),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::PaymentRequired => StatusCode::PAYMENT_REQUIRED,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Database(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::new(self.status_code())
    }
}
