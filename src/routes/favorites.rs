use axum::{
    Json, Router,
    body::Bytes,
    extract::{FromRequestParts, OriginalUri, Path, State},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};

use crate::{
    dto::favorites::AddFavoriteRequest,
    error::AppResult,
    middleware::current_user::CurrentUser,
    models::Product,
    response::ApiResponse,
    routes::{method_not_allowed, not_found},
    services::favorite_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/add", post(add_favorite))
        .route("/remove/{product_id}", delete(remove_favorite))
        .route("/all", get(list_favorites))
        .method_not_allowed_fallback(method_not_allowed)
}

/// Product id taken from the path. Only decimal segments with an optional
/// leading `-` match, the same ids the add body accepts; anything else is
/// answered like an unknown route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductIdPath(pub i64);

impl<S> FromRequestParts<S> for ProductIdPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(IntoResponse::into_response)?;

        match parse_path_id(&raw) {
            Some(id) => Ok(ProductIdPath(id)),
            None => {
                let uri = parts
                    .extensions
                    .get::<OriginalUri>()
                    .map(|original| original.0.clone())
                    .unwrap_or_else(|| parts.uri.clone());
                Err(not_found(uri).await.into_response())
            }
        }
    }
}

fn parse_path_id(raw: &str) -> Option<i64> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[utoipa::path(
    post,
    path = "/user/favorites/add",
    request_body = AddFavoriteRequest,
    params(
        ("x-user-id" = Option<String>, Header, description = "User to act on, defaults to the configured user")
    ),
    responses(
        (status = 201, description = "Added to favorites", body = ApiResponse<serde_json::Value>),
        (status = 400, description = "Missing or non-integer product-id"),
        (status = 404, description = "Product not in catalog"),
        (status = 409, description = "Product already a favorite"),
        (status = 422, description = "No user record was updated")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    user: CurrentUser,
    body: Bytes,
) -> AppResult<(StatusCode, Json<ApiResponse<serde_json::Value>>)> {
    let payload = AddFavoriteRequest::from_body(&body)?;
    let response = favorite_service::add_favorite(&state, &user, payload).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    delete,
    path = "/user/favorites/remove/{product_id}",
    params(
        ("product_id" = i64, Path, description = "Product ID"),
        ("x-user-id" = Option<String>, Header, description = "User to act on, defaults to the configured user")
    ),
    responses(
        (status = 200, description = "Removed from favorites", body = ApiResponse<serde_json::Value>),
        (status = 404, description = "Product not in favorites")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    ProductIdPath(product_id): ProductIdPath,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<serde_json::Value>>> {
    let response = favorite_service::remove_favorite(&state, &user, product_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/user/favorites/all",
    params(
        ("x-user-id" = Option<String>, Header, description = "User to act on, defaults to the configured user")
    ),
    responses(
        (status = 200, description = "Favorite products, empty when none", body = ApiResponse<Vec<Product>>)
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    user: CurrentUser,
) -> AppResult<Json<ApiResponse<Vec<Product>>>> {
    let response = favorite_service::list_favorites(&state, &user).await?;
    Ok(Json(response))
}
