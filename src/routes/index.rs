use axum::Json;

use crate::{response::ApiResponse, services::favorite_service};

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service identity", body = ApiResponse<serde_json::Value>),
    ),
    tag = "Index"
)]
pub async fn index() -> Json<ApiResponse<serde_json::Value>> {
    Json(favorite_service::index())
}
