use std::sync::Arc;

use crate::{config::FavoritesConfig, store::FavoritesStore};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn FavoritesStore>,
    pub favorites: Arc<FavoritesConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn FavoritesStore>, favorites: FavoritesConfig) -> Self {
        Self {
            store,
            favorites: Arc::new(favorites),
        }
    }
}
