//! The `BlobStore` trait and the key layout of the persisted state.
//!
//! The trait is implemented by storage backends (e.g.
//! `ecodrive-store-sqlite`). The services in this crate depend on this
//! abstraction, not on any concrete backend.
//!
//! State lives in three independent JSON blobs under namespaced keys: the
//! user list, the booking list, and the singleton site configuration. There
//! are no transactions across keys and no locking — concurrent writers are
//! last-write-wins, an accepted limitation of this design.

use std::future::Future;

/// Key of the persisted user array.
pub const USERS_KEY: &str = "ecodrive.users";
/// Key of the persisted booking array.
pub const BOOKINGS_KEY: &str = "ecodrive.bookings";
/// Key of the singleton site configuration object.
pub const SITE_CONFIG_KEY: &str = "ecodrive.site_config";

/// Abstraction over a whole-blob key-value store.
///
/// Reads and writes cover an entire blob at once; callers perform
/// load-modify-save round trips and never mutate persisted state in place.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait BlobStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Read the blob stored under `key`. Returns `None` if never written.
  fn read<'a>(
    &'a self,
    key: &'a str,
  ) -> impl Future<Output = Result<Option<String>, Self::Error>> + Send + 'a;

  /// Overwrite the blob stored under `key`. Last write wins.
  fn write<'a>(
    &'a self,
    key: &'a str,
    value: String,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
