//! Handler for the public `/config` endpoint.

use axum::{Json, extract::State};
use ecodrive_core::{site::SiteConfig, store::BlobStore};

use crate::{ApiState, error::ApiError};

/// `GET /config` — current presentation overrides, defaults when unsaved.
pub async fn get_config<S: BlobStore>(
  State(state): State<ApiState<S>>,
) -> Result<Json<SiteConfig>, ApiError> {
  let config = state.site.get().await?;
  Ok(Json(config))
}
