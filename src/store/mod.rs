//! Access to the users and products collections.
//!
//! Handlers only see [`FavoritesStore`]; the Postgres implementation lives in
//! [`postgres`]. Every mutation is a single-row update whose modified count is
//! reported back so callers can tell a no-op from a change.
use async_trait::async_trait;
use thiserror::Error;

use crate::models::Product;

pub mod postgres;

pub use postgres::PgStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database query failed: {0}")]
    Sql(#[from] sqlx::Error),

    #[error("catalog query failed: {0}")]
    Orm(#[from] sea_orm::DbErr),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Favorites list of a user, or `None` when the user record does not exist.
    async fn user_favorites(&self, user_id: &str) -> StoreResult<Option<Vec<i64>>>;

    /// Whether any user's favorites list contains `product_id`.
    async fn is_favorited_by_anyone(&self, product_id: i64) -> StoreResult<bool>;

    /// Whether `user_id`'s favorites list contains `product_id`.
    async fn is_favorited_by(&self, user_id: &str, product_id: i64) -> StoreResult<bool>;

    async fn product_exists(&self, product_id: i64) -> StoreResult<bool>;

    /// Catalog records whose `product_id` is in `product_ids`, in no particular order.
    async fn products_by_ids(&self, product_ids: &[i64]) -> StoreResult<Vec<Product>>;

    /// Append `product_id` to the user's list unless already present.
    /// Returns the number of user records modified.
    async fn push_favorite(&self, user_id: &str, product_id: i64) -> StoreResult<u64>;

    /// Remove `product_id` from the user's list.
    /// Returns the number of user records modified.
    async fn pull_favorite(&self, user_id: &str, product_id: i64) -> StoreResult<u64>;
}
