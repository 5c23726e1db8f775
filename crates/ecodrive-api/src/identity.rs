//! Handlers for `/auth` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/auth/register` | Body: `{"name":"Ana","contact":"47 99999-9999"}` |
//! | `POST` | `/auth/login` | Body: `{"contact":"47999999999"}`; 404 if unknown |

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use ecodrive_core::{store::BlobStore, user::User};
use serde::Deserialize;

use crate::{ApiState, error::ApiError};

// ─── Register ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RegisterBody {
  pub name:    String,
  pub contact: String,
}

/// `POST /auth/register`
pub async fn register<S: BlobStore>(
  State(state): State<ApiState<S>>,
  Json(body): Json<RegisterBody>,
) -> Result<impl IntoResponse, ApiError> {
  let user = state.registry.register(&body.name, &body.contact).await?;
  Ok((StatusCode::CREATED, Json(user)))
}

// ─── Login ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub contact: String,
}

/// `POST /auth/login` — identification by contact number, nothing more.
pub async fn login<S: BlobStore>(
  State(state): State<ApiState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<User>, ApiError> {
  let user = state.registry.login(&body.contact).await?;
  Ok(Json(user))
}
