//! User records and contact-number normalization.
//!
//! The contact number is the de-facto unique business key. Uniqueness is an
//! application-level scan over the persisted array, not a store constraint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimum number of digits a contact number must contain after
/// normalization.
pub const MIN_CONTACT_DIGITS: usize = 8;

/// A registered passenger. Created once at registration; never mutated or
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
  pub id:         Uuid,
  pub name:       String,
  /// Digits-only contact number, e.g. `"47999999999"`.
  pub contact:    String,
  pub created_at: DateTime<Utc>,
}

/// Strip everything but ASCII digits from a contact number.
///
/// `"47 99999-9999"` and `"47999999999"` normalize to the same key.
pub fn normalize_contact(raw: &str) -> String {
  raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalize_strips_formatting() {
    assert_eq!(normalize_contact("47 99999-9999"), "47999999999");
    assert_eq!(normalize_contact("+55 (47) 9 7400-8115"), "5547974008115");
    assert_eq!(normalize_contact("47999999999"), "47999999999");
  }

  #[test]
  fn normalize_of_non_digits_is_empty() {
    assert_eq!(normalize_contact("abc -"), "");
  }
}
