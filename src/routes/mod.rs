use axum::{
    Json, Router,
    extract::OriginalUri,
    http::{StatusCode, Uri},
    routing::get,
};

use crate::{response::ApiResponse, state::AppState};

pub mod doc;
pub mod favorites;
pub mod index;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index::index))
        .nest("/user/favorites", favorites::router())
        .method_not_allowed_fallback(method_not_allowed)
}

pub async fn not_found(uri: Uri) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::failure("Not Found", serde_json::json!({ "path": uri.path() }));
    (StatusCode::NOT_FOUND, Json(body))
}

pub async fn method_not_allowed(
    OriginalUri(uri): OriginalUri,
) -> (StatusCode, Json<ApiResponse<serde_json::Value>>) {
    let body = ApiResponse::failure(
        "Method Not Allowed",
        serde_json::json!({ "path": uri.path() }),
    );
    (StatusCode::METHOD_NOT_ALLOWED, Json(body))
}
