//! Booking records: the trip snapshot and its lifecycle status.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use uuid::Uuid;

/// Wire form of [`UserRef::Guest`].
const GUEST: &str = "guest";

// ─── User reference ──────────────────────────────────────────────────────────

/// A weak back reference from a booking to the user who placed it.
///
/// This is an optional lookup key, never an ownership edge: the referenced
/// user record may have been lost, and bookings survive that unchanged. The
/// ledger never validates it against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserRef {
  /// No identity attached — the booking was placed anonymously.
  Guest,
  Registered(Uuid),
}

impl fmt::Display for UserRef {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      UserRef::Guest => f.write_str(GUEST),
      UserRef::Registered(id) => write!(f, "{id}"),
    }
  }
}

impl std::str::FromStr for UserRef {
  type Err = uuid::Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    if s == GUEST {
      Ok(UserRef::Guest)
    } else {
      Uuid::parse_str(s).map(UserRef::Registered)
    }
  }
}

// Serialized as the user's UUID string, or the literal "guest".
impl Serialize for UserRef {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(self)
  }
}

impl<'de> Deserialize<'de> for UserRef {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let s = String::deserialize(deserializer)?;
    s.parse().map_err(de::Error::custom)
  }
}

// ─── Status ──────────────────────────────────────────────────────────────────

/// Lifecycle of a booking. `Pending` is the sole initial state; `Completed`
/// and `Cancelled` are terminal — no transition leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
  Pending,
  Completed,
  Cancelled,
}

impl BookingStatus {
  /// Whether moving from `self` to `to` is a legal one-way transition.
  pub fn can_transition_to(self, to: BookingStatus) -> bool {
    matches!(
      (self, to),
      (BookingStatus::Pending, BookingStatus::Completed)
        | (BookingStatus::Pending, BookingStatus::Cancelled)
    )
  }
}

impl fmt::Display for BookingStatus {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      BookingStatus::Pending => "pending",
      BookingStatus::Completed => "completed",
      BookingStatus::Cancelled => "cancelled",
    })
  }
}

// ─── Trip details ────────────────────────────────────────────────────────────

/// One leg of the trip (free-form Brazilian street addressing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
  pub street:   String,
  pub number:   String,
  pub district: String,
}

/// Immutable snapshot of the booking form as the passenger submitted it.
/// Captured at creation and never revised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripDetails {
  pub passenger_name: String,
  /// Whether the passenger needs trunk space for luggage.
  pub needs_trunk:    bool,
  /// Requested pickup time, as entered (`"14:30"`).
  pub pickup_time:    String,
  pub pickup:         Address,
  pub destination:    Address,
}

// ─── Booking ─────────────────────────────────────────────────────────────────

/// A single trip request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
  pub id:           Uuid,
  pub user:         UserRef,
  /// Passenger name as given on the form.
  pub user_name:    String,
  /// Contact of the registered user, `None` for guest bookings.
  pub user_contact: Option<String>,
  pub created_at:   DateTime<Utc>,
  pub trip:         TripDetails,
  pub status:       BookingStatus,
}
