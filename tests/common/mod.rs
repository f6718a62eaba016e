//! Shared helpers: an in-memory `FavoritesStore` and request utilities.
#![allow(dead_code)]

use std::{
    collections::{BTreeMap, HashMap},
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use tower_http::normalize_path::NormalizePath;

use tencowry_favorites::{
    app::build_app,
    config::{DuplicateScope, FavoritesConfig},
    models::Product,
    state::AppState,
    store::{FavoritesStore, StoreError, StoreResult},
};

pub const DEFAULT_USER: &str = "tencowry-user";

/// Users and catalog held in memory with the same push/pull semantics as
/// the Postgres store.
#[derive(Default)]
pub struct MemoryStore {
    users: Mutex<HashMap<String, Vec<i64>>>,
    products: Mutex<BTreeMap<i64, Product>>,
}

impl MemoryStore {
    pub fn with_user(self, user_id: &str, favorites: &[i64]) -> Self {
        self.users
            .lock()
            .unwrap()
            .insert(user_id.to_string(), favorites.to_vec());
        self
    }

    pub fn with_products(self, product_ids: &[i64]) -> Self {
        {
            let mut products = self.products.lock().unwrap();
            for &product_id in product_ids {
                products.insert(product_id, product(product_id));
            }
        }
        self
    }

    pub fn favorites_of(&self, user_id: &str) -> Option<Vec<i64>> {
        self.users.lock().unwrap().get(user_id).cloned()
    }
}

pub fn product(product_id: i64) -> Product {
    Product {
        product_id,
        name: format!("Product {product_id}"),
        description: Some("test product".into()),
        price: 1000 * product_id,
        details: serde_json::json!({ "category": "test" }),
    }
}

#[async_trait]
impl FavoritesStore for MemoryStore {
    async fn user_favorites(&self, user_id: &str) -> StoreResult<Option<Vec<i64>>> {
        Ok(self.favorites_of(user_id))
    }

    async fn is_favorited_by_anyone(&self, product_id: i64) -> StoreResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users.values().any(|favorites| favorites.contains(&product_id)))
    }

    async fn is_favorited_by(&self, user_id: &str, product_id: i64) -> StoreResult<bool> {
        let users = self.users.lock().unwrap();
        Ok(users
            .get(user_id)
            .is_some_and(|favorites| favorites.contains(&product_id)))
    }

    async fn product_exists(&self, product_id: i64) -> StoreResult<bool> {
        Ok(self.products.lock().unwrap().contains_key(&product_id))
    }

    async fn products_by_ids(&self, product_ids: &[i64]) -> StoreResult<Vec<Product>> {
        let products = self.products.lock().unwrap();
        Ok(products
            .values()
            .filter(|p| product_ids.contains(&p.product_id))
            .cloned()
            .collect())
    }

    async fn push_favorite(&self, user_id: &str, product_id: i64) -> StoreResult<u64> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(user_id) {
            Some(favorites) if !favorites.contains(&product_id) => {
                favorites.push(product_id);
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn pull_favorite(&self, user_id: &str, product_id: i64) -> StoreResult<u64> {
        let mut users = self.users.lock().unwrap();
        match users.get_mut(user_id) {
            Some(favorites) if favorites.contains(&product_id) => {
                favorites.retain(|&id| id != product_id);
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

/// Store whose every call fails, for endpoints that must not touch data.
pub struct UnavailableStore;

#[async_trait]
impl FavoritesStore for UnavailableStore {
    async fn user_favorites(&self, _: &str) -> StoreResult<Option<Vec<i64>>> {
        Err(unavailable())
    }
    async fn is_favorited_by_anyone(&self, _: i64) -> StoreResult<bool> {
        Err(unavailable())
    }
    async fn is_favorited_by(&self, _: &str, _: i64) -> StoreResult<bool> {
        Err(unavailable())
    }
    async fn product_exists(&self, _: i64) -> StoreResult<bool> {
        Err(unavailable())
    }
    async fn products_by_ids(&self, _: &[i64]) -> StoreResult<Vec<Product>> {
        Err(unavailable())
    }
    async fn push_favorite(&self, _: &str, _: i64) -> StoreResult<u64> {
        Err(unavailable())
    }
    async fn pull_favorite(&self, _: &str, _: i64) -> StoreResult<u64> {
        Err(unavailable())
    }
}

fn unavailable() -> StoreError {
    StoreError::Sql(sqlx::Error::PoolTimedOut)
}

pub fn build_test_app(store: Arc<dyn FavoritesStore>, duplicate_scope: DuplicateScope) -> NormalizePath<Router> {
    let config = FavoritesConfig {
        duplicate_scope,
        default_user_id: DEFAULT_USER.to_string(),
    };
    build_app(AppState::new(store, config))
}

pub async fn send(app: &NormalizePath<Router>, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &NormalizePath<Router>, uri: &str) -> Response<Body> {
    send(app, Request::get(uri).body(Body::empty()).unwrap()).await
}

pub async fn delete(app: &NormalizePath<Router>, uri: &str) -> Response<Body> {
    send(app, Request::delete(uri).body(Body::empty()).unwrap()).await
}

pub async fn post_json(app: &NormalizePath<Router>, uri: &str, body: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn expect(response: Response<Body>, status: StatusCode) -> Value {
    assert_eq!(response.status(), status);
    body_json(response).await
}
