//! The booking ledger: creation, listing, and the one-way status lifecycle.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::{
  booking::{Booking, BookingStatus, TripDetails, UserRef},
  error::{BookingError, StoreError},
  store::{BOOKINGS_KEY, BlobStore},
  user::User,
};

/// Booking management over a [`BlobStore`].
///
/// The persisted list is append-only for records: `create` never overwrites
/// or merges, and `update_status` rewrites a single status field of an
/// existing record. Insertion order is preserved.
pub struct BookingLedger<S> {
  store: Arc<S>,
}

impl<S> Clone for BookingLedger<S> {
  fn clone(&self) -> Self {
    BookingLedger { store: Arc::clone(&self.store) }
  }
}

impl<S: BlobStore> BookingLedger<S> {
  pub fn new(store: Arc<S>) -> Self {
    BookingLedger { store }
  }

  /// Record a new trip request with a fresh id and `Pending` status.
  ///
  /// The passenger name always comes from the submitted form; the contact is
  /// taken from the registered user when one is attached and stays empty for
  /// guests. The user reference is stored as given and never validated.
  pub async fn create(
    &self,
    user: Option<&User>,
    trip: TripDetails,
  ) -> Result<Booking, BookingError> {
    let booking = Booking {
      id: Uuid::new_v4(),
      user: user.map_or(UserRef::Guest, |u| UserRef::Registered(u.id)),
      user_name: trip.passenger_name.clone(),
      user_contact: user.map(|u| u.contact.clone()),
      created_at: Utc::now(),
      trip,
      status: BookingStatus::Pending,
    };

    let mut bookings = self.load().await?;
    bookings.push(booking.clone());
    self.save(&bookings).await?;

    Ok(booking)
  }

  /// All bookings, a snapshot in insertion order.
  pub async fn list_all(&self) -> Result<Vec<Booking>, BookingError> {
    Ok(self.load().await?)
  }

  /// Bookings attached to `user`, newest first.
  ///
  /// Works unchanged on dangling references: a registered id with no
  /// surviving user record still selects its bookings.
  pub async fn list_for_user(&self, user: UserRef) -> Result<Vec<Booking>, BookingError> {
    let mut bookings = self.load().await?;
    bookings.retain(|b| b.user == user);
    bookings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(bookings)
  }

  /// Move a booking to a new status.
  ///
  /// Fails with [`BookingError::NotFound`] for an unknown id and with
  /// [`BookingError::IllegalTransition`] for anything but
  /// `Pending -> Completed` and `Pending -> Cancelled`. The ledger is left
  /// untouched on error.
  pub async fn update_status(
    &self,
    id: Uuid,
    status: BookingStatus,
  ) -> Result<Booking, BookingError> {
    let mut bookings = self.load().await?;

    let booking = bookings
      .iter_mut()
      .find(|b| b.id == id)
      .ok_or(BookingError::NotFound(id))?;

    if !booking.status.can_transition_to(status) {
      return Err(BookingError::IllegalTransition { from: booking.status, to: status });
    }

    booking.status = status;
    let updated = booking.clone();
    self.save(&bookings).await?;

    Ok(updated)
  }

  async fn load(&self) -> Result<Vec<Booking>, StoreError> {
    match self
      .store
      .read(BOOKINGS_KEY)
      .await
      .map_err(StoreError::unavailable)?
    {
      Some(json) => serde_json::from_str(&json)
        .map_err(|source| StoreError::Corrupt { key: BOOKINGS_KEY, source }),
      None => Ok(Vec::new()),
    }
  }

  async fn save(&self, bookings: &[Booking]) -> Result<(), StoreError> {
    let json = serde_json::to_string(bookings).map_err(StoreError::Serialization)?;
    self
      .store
      .write(BOOKINGS_KEY, json)
      .await
      .map_err(StoreError::unavailable)
  }
}
