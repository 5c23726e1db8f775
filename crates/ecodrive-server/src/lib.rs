//! HTTP server for the EcoDrive booking backend.
//!
//! Composes the public JSON API from `ecodrive-api` with the admin surface
//! (HTTP Basic auth against an argon2 hash) and the chat proxy, backed by any
//! [`BlobStore`].

pub mod admin;
pub mod auth;
pub mod chat;
pub mod error;

pub use error::Error;

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  routing::{get, post, put},
};
use ecodrive_core::{ledger::BookingLedger, settings::SiteSettings, store::BlobStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

use auth::AuthConfig;
use chat::ChatClient;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` with
/// `ECODRIVE_*` environment overrides.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:                String,
  pub port:                u16,
  pub store_path:          PathBuf,
  pub admin_username:      String,
  /// argon2 PHC string; generate with `server --hash-password`.
  pub admin_password_hash: String,
  /// API key for the chat proxy. Absent means chat serves its fallback.
  pub chat_api_key:        Option<String>,
  pub chat_model:          Option<String>,
  pub chat_endpoint:       Option<String>,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through the admin and chat handlers.
pub struct AppState<S> {
  pub store:  Arc<S>,
  pub ledger: BookingLedger<S>,
  pub site:   SiteSettings<S>,
  pub auth:   Arc<AuthConfig>,
  pub chat:   Arc<ChatClient>,
}

impl<S> Clone for AppState<S> {
  fn clone(&self) -> Self {
    AppState {
      store:  Arc::clone(&self.store),
      ledger: self.ledger.clone(),
      site:   self.site.clone(),
      auth:   Arc::clone(&self.auth),
      chat:   Arc::clone(&self.chat),
    }
  }
}

impl<S: BlobStore> AppState<S> {
  pub fn new(store: Arc<S>, auth: AuthConfig, chat: ChatClient) -> Self {
    AppState {
      ledger: BookingLedger::new(Arc::clone(&store)),
      site:   SiteSettings::new(Arc::clone(&store)),
      store,
      auth:   Arc::new(auth),
      chat:   Arc::new(chat),
    }
  }
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the full application router: public API under `/api`, chat proxy,
/// and the Basic-auth-gated admin routes.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: BlobStore + 'static,
{
  let store = Arc::clone(&state.store);

  Router::new()
    .route("/api/chat", post(chat::handler::<S>))
    .route("/admin/bookings", get(admin::list_bookings::<S>))
    .route("/admin/bookings/{id}/status", post(admin::update_status::<S>))
    .route("/admin/config", put(admin::save_config::<S>))
    .with_state(state)
    .nest("/api", ecodrive_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
