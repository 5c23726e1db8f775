//! Public JSON REST API for the EcoDrive site.
//!
//! Exposes an axum [`Router`] backed by any [`ecodrive_core::store::BlobStore`].
//! The admin surface, chat proxy, and transport concerns live in
//! `ecodrive-server`.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", ecodrive_api::api_router(store.clone()))
//! ```

pub mod bookings;
pub mod error;
pub mod identity;
pub mod site;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use ecodrive_core::{
  ledger::BookingLedger, registry::IdentityRegistry, settings::SiteSettings,
  store::BlobStore,
};

pub use error::ApiError;

/// The three data-lifecycle services, shared by all public handlers.
pub struct ApiState<S> {
  pub registry: IdentityRegistry<S>,
  pub ledger:   BookingLedger<S>,
  pub site:     SiteSettings<S>,
}

impl<S> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    ApiState {
      registry: self.registry.clone(),
      ledger:   self.ledger.clone(),
      site:     self.site.clone(),
    }
  }
}

impl<S: BlobStore> ApiState<S> {
  pub fn new(store: Arc<S>) -> Self {
    ApiState {
      registry: IdentityRegistry::new(Arc::clone(&store)),
      ledger:   BookingLedger::new(Arc::clone(&store)),
      site:     SiteSettings::new(store),
    }
  }
}

/// Build a fully-materialised public API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: BlobStore + 'static,
{
  Router::new()
    // Identity
    .route("/auth/register", post(identity::register::<S>))
    .route("/auth/login", post(identity::login::<S>))
    // Bookings
    .route(
      "/bookings",
      get(bookings::list_for_user::<S>).post(bookings::create::<S>),
    )
    // Site configuration (read-only here; writes go through the admin gate)
    .route("/config", get(site::get_config::<S>))
    .with_state(ApiState::new(store))
}
