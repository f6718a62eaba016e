use crate::{
    config::DuplicateScope,
    dto::favorites::AddFavoriteRequest,
    error::{AppError, AppResult},
    middleware::current_user::CurrentUser,
    models::Product,
    response::ApiResponse,
    state::AppState,
};

pub const INDEX_MESSAGE: &str = "Tencowry Favorites";

pub fn index() -> ApiResponse<serde_json::Value> {
    ApiResponse::ok(INDEX_MESSAGE)
}

pub async fn add_favorite(
    state: &AppState,
    user: &CurrentUser,
    payload: AddFavoriteRequest,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let product_id = payload.product_id;
    let store = &state.store;

    let duplicate = match state.favorites.duplicate_scope {
        DuplicateScope::AllUsers => store.is_favorited_by_anyone(product_id).await?,
        DuplicateScope::CurrentUser => store.is_favorited_by(&user.user_id, product_id).await?,
    };
    if duplicate {
        tracing::debug!(user_id = %user.user_id, product_id, "favorite already present");
        return Err(AppError::DuplicateFavorite(product_id));
    }

    if !store.product_exists(product_id).await? {
        tracing::debug!(product_id, "favorite rejected, product not in catalog");
        return Err(AppError::ProductNotFound(product_id));
    }

    let modified = store.push_favorite(&user.user_id, product_id).await?;
    if modified != 1 {
        tracing::warn!(
            user_id = %user.user_id,
            product_id,
            modified,
            "favorite push modified no user record"
        );
        return Err(AppError::UpdateFailed);
    }

    tracing::info!(user_id = %user.user_id, product_id, "favorite added");
    Ok(ApiResponse::ok("Product added to favorites"))
}

pub async fn remove_favorite(
    state: &AppState,
    user: &CurrentUser,
    product_id: i64,
) -> AppResult<ApiResponse<serde_json::Value>> {
    let modified = state.store.pull_favorite(&user.user_id, product_id).await?;
    if modified == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(user_id = %user.user_id, product_id, "favorite removed");
    Ok(ApiResponse::ok("Product removed from favorites"))
}

pub async fn list_favorites(
    state: &AppState,
    user: &CurrentUser,
) -> AppResult<ApiResponse<Vec<Product>>> {
    let favorites = state
        .store
        .user_favorites(&user.user_id)
        .await?
        .unwrap_or_default();

    if favorites.is_empty() {
        return Ok(ApiResponse::success("No favorites yet", Vec::new()));
    }

    let items = state.store.products_by_ids(&favorites).await?;
    Ok(ApiResponse::success("Favorites retrieved", items))
}
