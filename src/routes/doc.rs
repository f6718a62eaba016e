use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::favorites::AddFavoriteRequest,
    models::Product,
    response::ApiResponse,
    routes::{favorites, index},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        index::index,
        favorites::add_favorite,
        favorites::remove_favorite,
        favorites::list_favorites
    ),
    components(
        schemas(
            Product,
            AddFavoriteRequest,
            ApiResponse<Vec<Product>>
        )
    ),
    tags(
        (name = "Index", description = "Service identity"),
        (name = "Favorites", description = "Favorite endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
