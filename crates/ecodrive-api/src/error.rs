//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use ecodrive_core::{AuthError, BookingError, StoreError};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("not found: {0}")]
  NotFound(String),

  #[error("bad request: {0}")]
  BadRequest(String),

  #[error("conflict: {0}")]
  Conflict(String),

  #[error("unprocessable: {0}")]
  Unprocessable(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      ApiError::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      ApiError::BadRequest(m) => (StatusCode::BAD_REQUEST, m.clone()),
      ApiError::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      ApiError::Unprocessable(m) => (StatusCode::UNPROCESSABLE_ENTITY, m.clone()),
      ApiError::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };
    (status, Json(json!({ "error": message }))).into_response()
  }
}

impl From<StoreError> for ApiError {
  fn from(err: StoreError) -> Self {
    ApiError::Store(Box::new(err))
  }
}

impl From<AuthError> for ApiError {
  fn from(err: AuthError) -> Self {
    match err {
      AuthError::InvalidContact(_) => ApiError::Unprocessable(err.to_string()),
      AuthError::AlreadyExists => ApiError::Conflict(err.to_string()),
      AuthError::NotFound => ApiError::NotFound(err.to_string()),
      AuthError::Store(e) => e.into(),
    }
  }
}

impl From<BookingError> for ApiError {
  fn from(err: BookingError) -> Self {
    match err {
      BookingError::NotFound(_) => ApiError::NotFound(err.to_string()),
      BookingError::IllegalTransition { .. } => ApiError::Conflict(err.to_string()),
      BookingError::Store(e) => e.into(),
    }
  }
}
