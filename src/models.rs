use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Catalog record as returned to clients. The internal row id is never exposed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price: i64,
    /// Free-form catalog attributes.
    #[schema(value_type = Object)]
    pub details: serde_json::Value,
}
