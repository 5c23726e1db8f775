//! Error taxonomy for `ecodrive-core`.
//!
//! One enum per concern. Store failures always propagate — the original
//! deployment logged and dropped failed writes, and silently reset any
//! collection whose persisted JSON no longer parsed. Both behaviors are
//! replaced here: `StoreError::Unavailable` and `StoreError::Corrupt` surface
//! to the caller instead.

use thiserror::Error;
use uuid::Uuid;

use crate::booking::BookingStatus;

/// Failure of the persistent store or of the blobs it holds.
#[derive(Debug, Error)]
pub enum StoreError {
  /// The underlying medium rejected the read or write.
  #[error("storage unavailable: {0}")]
  Unavailable(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// A persisted blob exists but no longer deserializes.
  #[error("corrupt record under {key:?}: {source}")]
  Corrupt {
    key:    &'static str,
    source: serde_json::Error,
  },

  /// A collection failed to serialize before writing.
  #[error("serialization error: {0}")]
  Serialization(#[source] serde_json::Error),
}

impl StoreError {
  /// Wrap a backend error as [`StoreError::Unavailable`].
  pub fn unavailable<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    StoreError::Unavailable(Box::new(err))
  }
}

/// Registration and login failures.
#[derive(Debug, Error)]
pub enum AuthError {
  /// The contact number has too few digits after normalization.
  #[error("contact number must contain at least {0} digits")]
  InvalidContact(usize),

  /// Another user is already registered under this normalized contact.
  #[error("this contact number is already registered")]
  AlreadyExists,

  /// No user is registered under this normalized contact.
  #[error("no user registered with this contact number")]
  NotFound,

  #[error(transparent)]
  Store(#[from] StoreError),
}

/// Booking ledger failures.
#[derive(Debug, Error)]
pub enum BookingError {
  #[error("booking not found: {0}")]
  NotFound(Uuid),

  /// Status changes are one-way: `Pending` is the only state with exits.
  #[error("illegal status transition: {from} -> {to}")]
  IllegalTransition {
    from: BookingStatus,
    to:   BookingStatus,
  },

  #[error(transparent)]
  Store(#[from] StoreError),
}

pub type Result<T, E = StoreError> = std::result::Result<T, E>;
