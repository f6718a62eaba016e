use serde::Serialize;
use utoipa::ToSchema;

/// Envelope shared by every endpoint.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    pub message: String,
    pub status: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            status: true,
            data: Some(data),
        }
    }

    /// Successful response carrying only a message.
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status: true,
            data: None,
        }
    }

    pub fn failure(message: impl Into<String>, data: T) -> Self {
        Self {
            message: message.into(),
            status: false,
            data: Some(data),
        }
    }
}
