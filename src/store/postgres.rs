use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::{
    db::{DbPool, OrmConn, orm_from_pool},
    entity::products::{Column, Entity as Products, Model as ProductModel},
    models::Product,
};

use super::{FavoritesStore, StoreResult};

/// Postgres-backed store. Users keep favorites in a `BIGINT[]` column; the
/// catalog is read through sea-orm.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
    orm: OrmConn,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        let orm = orm_from_pool(&pool);
        Self { pool, orm }
    }
}

#[async_trait]
impl FavoritesStore for PgStore {
    async fn user_favorites(&self, user_id: &str) -> StoreResult<Option<Vec<i64>>> {
        let favorites: Option<Vec<i64>> =
            sqlx::query_scalar("SELECT favorites FROM users WHERE user_id = $1")
                .bind(user_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(favorites)
    }

    async fn is_favorited_by_anyone(&self, product_id: i64) -> StoreResult<bool> {
        let found: Option<i32> =
            sqlx::query_scalar("SELECT 1 FROM users WHERE favorites @> ARRAY[$1]::BIGINT[] LIMIT 1")
                .bind(product_id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(found.is_some())
    }

    async fn is_favorited_by(&self, user_id: &str, product_id: i64) -> StoreResult<bool> {
        let found: Option<i32> = sqlx::query_scalar(
            "SELECT 1 FROM users WHERE user_id = $1 AND favorites @> ARRAY[$2]::BIGINT[]",
        )
        .bind(user_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(found.is_some())
    }

    async fn product_exists(&self, product_id: i64) -> StoreResult<bool> {
        let count = Products::find()
            .filter(Column::ProductId.eq(product_id))
            .count(&self.orm)
            .await?;
        Ok(count > 0)
    }

    async fn products_by_ids(&self, product_ids: &[i64]) -> StoreResult<Vec<Product>> {
        if product_ids.is_empty() {
            return Ok(Vec::new());
        }
        let products = Products::find()
            .filter(Column::ProductId.is_in(product_ids.iter().copied()))
            .all(&self.orm)
            .await?
            .into_iter()
            .map(product_from_entity)
            .collect();
        Ok(products)
    }

    async fn push_favorite(&self, user_id: &str, product_id: i64) -> StoreResult<u64> {
        // The containment guard keeps the list duplicate-free even when two
        // adds for the same product race past validation.
        let result = sqlx::query(
            r#"
            UPDATE users
            SET favorites = array_append(favorites, $2)
            WHERE user_id = $1 AND NOT (favorites @> ARRAY[$2]::BIGINT[])
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn pull_favorite(&self, user_id: &str, product_id: i64) -> StoreResult<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET favorites = array_remove(favorites, $2)
            WHERE user_id = $1 AND favorites @> ARRAY[$2]::BIGINT[]
            "#,
        )
        .bind(user_id)
        .bind(product_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        product_id: model.product_id,
        name: model.name,
        description: model.description,
        price: model.price,
        details: model.details,
    }
}
