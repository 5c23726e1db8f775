//! Error types and axum `IntoResponse` implementation for the server-side
//! (admin and chat) routes.

use axum::{
  Json,
  http::{HeaderValue, StatusCode, header},
  response::{IntoResponse, Response},
};
use ecodrive_core::{BookingError, StoreError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("unauthorized")]
  Unauthorized,
  #[error("not found: {0}")]
  NotFound(String),
  #[error("conflict: {0}")]
  Conflict(String),
  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl From<StoreError> for Error {
  fn from(err: StoreError) -> Self {
    Error::Store(Box::new(err))
  }
}

impl From<BookingError> for Error {
  fn from(err: BookingError) -> Self {
    match err {
      BookingError::NotFound(_) => Error::NotFound(err.to_string()),
      BookingError::IllegalTransition { .. } => Error::Conflict(err.to_string()),
      BookingError::Store(e) => e.into(),
    }
  }
}

impl IntoResponse for Error {
  fn into_response(self) -> Response {
    let (status, message) = match &self {
      Error::Unauthorized => (StatusCode::UNAUTHORIZED, self.to_string()),
      Error::NotFound(m) => (StatusCode::NOT_FOUND, m.clone()),
      Error::Conflict(m) => (StatusCode::CONFLICT, m.clone()),
      Error::Store(e) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
    };

    let mut res = (status, Json(json!({ "error": message }))).into_response();
    if status == StatusCode::UNAUTHORIZED {
      res.headers_mut().insert(
        header::WWW_AUTHENTICATE,
        HeaderValue::from_static("Basic realm=\"ecodrive\""),
      );
    }
    res
  }
}
