// src/error.rs
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Client-facing failures of the query service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    #[error("Article not found")]
    NotFound,
    #[error("query must be at least {min} characters")]
    QueryTooShort { min: usize },
    #[error("invalid {field} '{value}', expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },
    #[error("invalid article id '{value}'")]
    InvalidId { value: String },
}

impl QueryError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            QueryError::NotFound => StatusCode::NOT_FOUND,
            QueryError::QueryTooShort { .. }
            | QueryError::InvalidDate { .. }
            | QueryError::InvalidId { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for QueryError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
