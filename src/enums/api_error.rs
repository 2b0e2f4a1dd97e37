use crate::common::*;

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode as HttpStatusCode,
    response::{IntoResponse, Response as HttpResponse},
    Json,
};

/// Failures surfaced to HTTP clients as `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// A required path or query parameter is missing.
    #[error("{0}")]
    BadRequest(String),
    /// The backend round-trip or the aggregation failed.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    #[doc = "Backend failure reported with the underlying error text."]
    pub fn backend(caller: &str, err: anyhow::Error) -> Self {
        error!("[MainController->{}] {:?}", caller, err);
        ApiError::Internal(err.to_string())
    }

    #[doc = "Backend failure reported with a fixed message, the cause only goes to the log."]
    pub fn backend_masked(caller: &str, err: anyhow::Error) -> Self {
        error!("[MainController->{}] {:?}", caller, err);
        ApiError::Internal(String::from("Failed to retrieve data"))
    }

    pub fn status_code(&self) -> HttpStatusCode {
        match self {
            ApiError::BadRequest(_) => HttpStatusCode::BAD_REQUEST,
            ApiError::Internal(_) => HttpStatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> HttpResponse {
        let body: Json<Value> = Json(json!({ "error": self.to_string() }));
        (self.status_code(), body).into_response()
    }
}
