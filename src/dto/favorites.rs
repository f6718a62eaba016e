use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

pub const PRODUCT_ID_FIELD: &str = "product-id";

/// Body of `POST /user/favorites/add`.
///
/// `product-id` may be sent as a JSON integer, an integral float such as
/// `3.0`, or a string holding a base-10 integer. Anything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    #[serde(rename = "product-id")]
    pub product_id: i64,
}

impl AddFavoriteRequest {
    /// Parse a raw request body.
    pub fn from_body(body: &[u8]) -> AppResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::MissingField(PRODUCT_ID_FIELD));
        }
        let value: Value = serde_json::from_slice(body)
            .map_err(|err| AppError::BadRequest(format!("malformed JSON body: {err}")))?;
        Self::from_json(&value)
    }

    pub fn from_json(body: &Value) -> AppResult<Self> {
        let raw = match body.get(PRODUCT_ID_FIELD) {
            None | Some(Value::Null) => return Err(AppError::MissingField(PRODUCT_ID_FIELD)),
            Some(raw) => raw,
        };
        let product_id = coerce_product_id(raw).ok_or(AppError::InvalidType(PRODUCT_ID_FIELD))?;
        Ok(Self { product_id })
    }
}

fn coerce_product_id(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => {
            if let Some(id) = n.as_i64() {
                return Some(id);
            }
            // u64 beyond i64::MAX lands here too and fails the range check.
            let f = n.as_f64()?;
            let in_range = f >= i64::MIN as f64 && f < i64::MAX as f64;
            (f.is_finite() && f.fract() == 0.0 && in_range).then_some(f as i64)
        }
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}
