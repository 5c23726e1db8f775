//! Handlers for the public `/bookings` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/bookings` | Body: `{"user_id":…?, "trip":{…}}` |
//! | `GET`  | `/bookings?user=<uuid\|guest>` | Newest first |

use axum::{
  Json,
  extract::{Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use ecodrive_core::{
  booking::{Booking, TripDetails, UserRef},
  store::BlobStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{ApiState, error::ApiError};

// ─── Create ──────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  /// Registered user placing the booking, if any. An id that no longer
  /// resolves falls back to a guest booking — the reference is weak.
  pub user_id: Option<Uuid>,
  pub trip:    TripDetails,
}

/// `POST /bookings`
pub async fn create<S: BlobStore>(
  State(state): State<ApiState<S>>,
  Json(body): Json<CreateBody>,
) -> Result<impl IntoResponse, ApiError> {
  let user = match body.user_id {
    Some(id) => state.registry.find_by_id(id).await?,
    None => None,
  };

  let booking = state.ledger.create(user.as_ref(), body.trip).await?;
  Ok((StatusCode::CREATED, Json(booking)))
}

// ─── List for user ───────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub user: UserRef,
}

/// `GET /bookings?user=<uuid|guest>` — a user's trip history, newest first.
pub async fn list_for_user<S: BlobStore>(
  State(state): State<ApiState<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Booking>>, ApiError> {
  let bookings = state.ledger.list_for_user(params.user).await?;
  Ok(Json(bookings))
}
