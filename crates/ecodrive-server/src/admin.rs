//! Handlers for the `/admin` routes — the maintenance surface.
//!
//! Every handler takes the [`Authenticated`] extractor, so requests without
//! valid Basic-auth credentials are rejected before any work happens.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/admin/bookings` | Full ledger, insertion order |
//! | `POST` | `/admin/bookings/:id/status` | Body: `{"status":"completed"}` |
//! | `PUT`  | `/admin/config` | Full overwrite of the site configuration |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use ecodrive_core::{
  booking::{Booking, BookingStatus},
  site::SiteConfig,
  store::BlobStore,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{AppState, auth::Authenticated, error::Error};

/// `GET /admin/bookings`
pub async fn list_bookings<S: BlobStore>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
) -> Result<Json<Vec<Booking>>, Error> {
  let bookings = state.ledger.list_all().await?;
  Ok(Json(bookings))
}

#[derive(Debug, Deserialize)]
pub struct StatusBody {
  pub status: BookingStatus,
}

/// `POST /admin/bookings/:id/status` — 404 unknown id, 409 illegal
/// transition.
pub async fn update_status<S: BlobStore>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<StatusBody>,
) -> Result<Json<Booking>, Error> {
  let booking = state.ledger.update_status(id, body.status).await?;
  Ok(Json(booking))
}

/// `PUT /admin/config`
pub async fn save_config<S: BlobStore>(
  _auth: Authenticated,
  State(state): State<AppState<S>>,
  Json(config): Json<SiteConfig>,
) -> Result<StatusCode, Error> {
  state.site.save(&config).await?;
  Ok(StatusCode::NO_CONTENT)
}
