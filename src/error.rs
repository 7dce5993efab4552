use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Errors surfaced by the entry endpoints.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad or missing input; raised before the store is touched.
    #[error("{0}")]
    Validation(String),

    /// A store call failed. Only `message` reaches the client.
    #[error("{message}: {source}")]
    Storage {
        message: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn storage(message: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| {
            error!(error = %source, "{}", message);
            Self::Storage { message, source }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = match &self {
            Self::Validation(msg) => msg.clone(),
            Self::Storage { message, .. } => (*message).to_string(),
        };
        (self.status(), Json(json!({ "error": message }))).into_response()
    }
}
