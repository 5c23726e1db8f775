//! The identity registry: registration and lookup of users by contact
//! number.
//!
//! "Login" here is identification, not authentication — there is no
//! password, token, or session concept. The only credentialed surface in the
//! system is the server-side admin gate.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
  error::{AuthError, StoreError},
  store::{BlobStore, USERS_KEY},
  user::{MIN_CONTACT_DIGITS, User, normalize_contact},
};

/// User registration and lookup over a [`BlobStore`].
///
/// Cloning is cheap — the store handle is reference-counted.
pub struct IdentityRegistry<S> {
  store: Arc<S>,
}

impl<S> Clone for IdentityRegistry<S> {
  fn clone(&self) -> Self {
    IdentityRegistry { store: Arc::clone(&self.store) }
  }
}

impl<S: BlobStore> IdentityRegistry<S> {
  pub fn new(store: Arc<S>) -> Self {
    IdentityRegistry { store }
  }

  /// Register a new user under a normalized contact number.
  ///
  /// Fails with [`AuthError::InvalidContact`] when fewer than
  /// [`MIN_CONTACT_DIGITS`] digits remain after normalization, and with
  /// [`AuthError::AlreadyExists`] when the contact is already taken.
  /// Uniqueness is a scan over the persisted array — the store itself
  /// enforces nothing.
  pub async fn register(&self, name: &str, contact: &str) -> Result<User, AuthError> {
    let contact = normalize_contact(contact);
    if contact.len() < MIN_CONTACT_DIGITS {
      return Err(AuthError::InvalidContact(MIN_CONTACT_DIGITS));
    }

    let mut users = self.load().await?;
    if users.iter().any(|u| u.contact == contact) {
      return Err(AuthError::AlreadyExists);
    }

    let user = User {
      id: Uuid::new_v4(),
      name: name.trim().to_string(),
      contact,
      created_at: Utc::now(),
    };

    users.push(user.clone());
    self.save(&users).await?;

    Ok(user)
  }

  /// Look up a user by contact number.
  pub async fn login(&self, contact: &str) -> Result<User, AuthError> {
    let contact = normalize_contact(contact);
    let users = self.load().await?;

    users
      .into_iter()
      .find(|u| u.contact == contact)
      .ok_or(AuthError::NotFound)
  }

  /// Look up a user by id. Returns `None` when absent — used to resolve the
  /// weak reference on bookings, which must tolerate dangling ids.
  pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
    let users = self.load().await?;
    Ok(users.into_iter().find(|u| u.id == id))
  }

  async fn load(&self) -> Result<Vec<User>, StoreError> {
    match self
      .store
      .read(USERS_KEY)
      .await
      .map_err(StoreError::unavailable)?
    {
      Some(json) => serde_json::from_str(&json)
        .map_err(|source| StoreError::Corrupt { key: USERS_KEY, source }),
      None => Ok(Vec::new()),
    }
  }

  async fn save(&self, users: &[User]) -> Result<(), StoreError> {
    let json = serde_json::to_string(users).map_err(StoreError::Serialization)?;
    self
      .store
      .write(USERS_KEY, json)
      .await
      .map_err(StoreError::unavailable)
  }
}
