use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::{response::ApiResponse, store::StoreError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing required field `{0}`")]
    MissingField(&'static str),

    #[error("Field `{0}` must be an integer")]
    InvalidType(&'static str),

    #[error("Product {0} is already a favorite")]
    DuplicateFavorite(i64),

    #[error("Product {0} does not exist")]
    ProductNotFound(i64),

    #[error("Favorites could not be updated")]
    UpdateFailed,

    #[error("Product is not in favorites")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Database error")]
    Store(#[from] StoreError),
}

#[derive(Serialize)]
struct ErrorData {
    error: &'static str,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_) | AppError::InvalidType(_) | AppError::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::DuplicateFavorite(_) => StatusCode::CONFLICT,
            AppError::ProductNotFound(_) | AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::UpdateFailed => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code for the error body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::MissingField(_) => "missing_field",
            AppError::InvalidType(_) => "invalid_type",
            AppError::DuplicateFavorite(_) => "duplicate_favorite",
            AppError::ProductNotFound(_) => "product_not_found",
            AppError::UpdateFailed => "update_failed",
            AppError::NotFound => "not_found",
            AppError::BadRequest(_) => "bad_request",
            AppError::Store(_) => "store_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let AppError::Store(err) = &self {
            tracing::error!(error = %err, "store operation failed");
        }

        let body = ApiResponse::failure(self.to_string(), ErrorData { error: self.code() });

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
