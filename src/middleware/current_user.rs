use axum::extract::FromRequestParts;

use crate::{error::AppError, state::AppState};

pub const USER_ID_HEADER: &str = "x-user-id";

/// The user every favorites operation acts on.
///
/// Taken from the `x-user-id` header, falling back to the configured default
/// user when the header is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    pub user_id: String,
}

impl CurrentUser {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(header) = parts.headers.get(USER_ID_HEADER) else {
            return Ok(CurrentUser::new(state.favorites.default_user_id.clone()));
        };

        let user_id = header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid x-user-id header".into()))?
            .trim();

        if user_id.is_empty() {
            return Err(AppError::BadRequest("Empty x-user-id header".into()));
        }

        Ok(CurrentUser::new(user_id))
    }
}
