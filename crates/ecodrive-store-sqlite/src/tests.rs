//! Integration tests for `SqliteStore` against an in-memory database, plus
//! the core services running on top of it.

use std::sync::Arc;

use ecodrive_core::{
  AuthError, BookingError, StoreError,
  booking::{Address, Booking, BookingStatus, TripDetails, UserRef},
  ledger::BookingLedger,
  registry::IdentityRegistry,
  settings::SiteSettings,
  site::{FleetImages, SiteConfig},
  store::{BOOKINGS_KEY, BlobStore, USERS_KEY},
};
use uuid::Uuid;

use crate::SqliteStore;

async fn store() -> Arc<SqliteStore> {
  Arc::new(
    SqliteStore::open_in_memory()
      .await
      .expect("in-memory store"),
  )
}

fn trip(passenger: &str) -> TripDetails {
  TripDetails {
    passenger_name: passenger.to_string(),
    needs_trunk: false,
    pickup_time: "14:30".to_string(),
    pickup: Address {
      street:   "Rua Reinoldo Rau".to_string(),
      number:   "120".to_string(),
      district: "Centro".to_string(),
    },
    destination: Address {
      street:   "Av. Santos Dumont".to_string(),
      number:   "9000".to_string(),
      district: "Aeroporto".to_string(),
    },
  }
}

// ─── Blob semantics ──────────────────────────────────────────────────────────

#[tokio::test]
async fn read_missing_key_returns_none() {
  let s = store().await;
  assert!(s.read("ecodrive.nothing").await.unwrap().is_none());
}

#[tokio::test]
async fn write_then_read_round_trips() {
  let s = store().await;
  s.write("k", "[1,2,3]".to_string()).await.unwrap();
  assert_eq!(s.read("k").await.unwrap().as_deref(), Some("[1,2,3]"));
}

#[tokio::test]
async fn write_overwrites_whole_blob() {
  let s = store().await;
  s.write("k", "old".to_string()).await.unwrap();
  s.write("k", "new".to_string()).await.unwrap();
  assert_eq!(s.read("k").await.unwrap().as_deref(), Some("new"));
}

#[tokio::test]
async fn keys_are_independent() {
  let s = store().await;
  s.write("a", "1".to_string()).await.unwrap();
  s.write("b", "2".to_string()).await.unwrap();
  assert_eq!(s.read("a").await.unwrap().as_deref(), Some("1"));
  assert_eq!(s.read("b").await.unwrap().as_deref(), Some("2"));
}

// ─── Identity registry ───────────────────────────────────────────────────────

#[tokio::test]
async fn register_and_login_return_same_user() {
  let registry = IdentityRegistry::new(store().await);

  let ana = registry.register("Ana", "47999999999").await.unwrap();
  let back = registry.login("47999999999").await.unwrap();

  assert_eq!(back.id, ana.id);
  assert_eq!(back.name, "Ana");
  assert_eq!(back.contact, "47999999999");
}

#[tokio::test]
async fn register_rejects_equivalent_formatted_contact() {
  let registry = IdentityRegistry::new(store().await);

  registry.register("Ana", "47 99999-9999").await.unwrap();
  let err = registry.register("Outra Ana", "47999999999").await.unwrap_err();
  assert!(matches!(err, AuthError::AlreadyExists));
}

#[tokio::test]
async fn register_rejects_short_contact() {
  let registry = IdentityRegistry::new(store().await);
  let err = registry.register("Ana", "4799-99").await.unwrap_err();
  assert!(matches!(err, AuthError::InvalidContact(_)));
}

#[tokio::test]
async fn login_normalizes_before_lookup() {
  let registry = IdentityRegistry::new(store().await);

  let ana = registry.register("Ana", "47999999999").await.unwrap();
  let back = registry.login("47 99999-9999").await.unwrap();
  assert_eq!(back.id, ana.id);
}

#[tokio::test]
async fn login_unknown_contact_is_not_found() {
  let registry = IdentityRegistry::new(store().await);
  let err = registry.login("47988887777").await.unwrap_err();
  assert!(matches!(err, AuthError::NotFound));
}

// ─── Booking ledger ──────────────────────────────────────────────────────────

#[tokio::test]
async fn guest_booking_starts_pending() {
  let ledger = BookingLedger::new(store().await);

  ledger.create(None, trip("Carlos")).await.unwrap();

  let all = ledger.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].status, BookingStatus::Pending);
  assert_eq!(all[0].user, UserRef::Guest);
  assert_eq!(all[0].user_name, "Carlos");
  assert!(all[0].user_contact.is_none());
}

#[tokio::test]
async fn registered_booking_carries_user_contact() {
  let s = store().await;
  let registry = IdentityRegistry::new(Arc::clone(&s));
  let ledger = BookingLedger::new(s);

  let ana = registry.register("Ana", "47999999999").await.unwrap();
  let booking = ledger.create(Some(&ana), trip("Ana")).await.unwrap();

  assert_eq!(booking.user, UserRef::Registered(ana.id));
  assert_eq!(booking.user_contact.as_deref(), Some("47999999999"));
}

#[tokio::test]
async fn list_all_preserves_insertion_order() {
  let ledger = BookingLedger::new(store().await);

  let first = ledger.create(None, trip("A")).await.unwrap();
  let second = ledger.create(None, trip("B")).await.unwrap();
  let third = ledger.create(None, trip("C")).await.unwrap();

  let ids: Vec<_> = ledger.list_all().await.unwrap().iter().map(|b| b.id).collect();
  assert_eq!(ids, vec![first.id, second.id, third.id]);
}

#[tokio::test]
async fn list_for_user_filters_and_sorts_newest_first() {
  let s = store().await;
  let registry = IdentityRegistry::new(Arc::clone(&s));
  let ledger = BookingLedger::new(s);

  let ana = registry.register("Ana", "47999999999").await.unwrap();
  let older = ledger.create(Some(&ana), trip("Ana")).await.unwrap();
  ledger.create(None, trip("Guest")).await.unwrap();
  let newer = ledger.create(Some(&ana), trip("Ana")).await.unwrap();

  let hers = ledger.list_for_user(UserRef::Registered(ana.id)).await.unwrap();
  assert_eq!(hers.len(), 2);
  assert_eq!(hers[0].id, newer.id);
  assert_eq!(hers[1].id, older.id);
}

#[tokio::test]
async fn update_status_changes_only_the_status() {
  let ledger = BookingLedger::new(store().await);

  let booking = ledger.create(None, trip("Carlos")).await.unwrap();
  ledger
    .update_status(booking.id, BookingStatus::Completed)
    .await
    .unwrap();

  let all = ledger.list_all().await.unwrap();
  assert_eq!(all.len(), 1);
  assert_eq!(all[0].status, BookingStatus::Completed);

  let mut expected = booking;
  expected.status = BookingStatus::Completed;
  assert_eq!(all[0], expected);
}

#[tokio::test]
async fn update_status_unknown_id_leaves_ledger_unchanged() {
  let ledger = BookingLedger::new(store().await);

  let booking = ledger.create(None, trip("Carlos")).await.unwrap();
  let err = ledger
    .update_status(Uuid::new_v4(), BookingStatus::Completed)
    .await
    .unwrap_err();
  assert!(matches!(err, BookingError::NotFound(_)));

  let all = ledger.list_all().await.unwrap();
  assert_eq!(all, vec![booking]);
}

#[tokio::test]
async fn terminal_statuses_reject_further_transitions() {
  let ledger = BookingLedger::new(store().await);

  let booking = ledger.create(None, trip("Carlos")).await.unwrap();
  ledger
    .update_status(booking.id, BookingStatus::Completed)
    .await
    .unwrap();

  let err = ledger
    .update_status(booking.id, BookingStatus::Cancelled)
    .await
    .unwrap_err();
  assert!(matches!(
    err,
    BookingError::IllegalTransition {
      from: BookingStatus::Completed,
      to:   BookingStatus::Cancelled,
    }
  ));

  let all = ledger.list_all().await.unwrap();
  assert_eq!(all[0].status, BookingStatus::Completed);
}

#[tokio::test]
async fn no_transition_back_to_pending() {
  let ledger = BookingLedger::new(store().await);

  let booking = ledger.create(None, trip("Carlos")).await.unwrap();
  ledger
    .update_status(booking.id, BookingStatus::Cancelled)
    .await
    .unwrap();

  let err = ledger
    .update_status(booking.id, BookingStatus::Pending)
    .await
    .unwrap_err();
  assert!(matches!(err, BookingError::IllegalTransition { .. }));
}

#[tokio::test]
async fn bookings_survive_user_data_loss() {
  let s = store().await;
  let registry = IdentityRegistry::new(Arc::clone(&s));
  let ledger = BookingLedger::new(Arc::clone(&s));

  let ana = registry.register("Ana", "47999999999").await.unwrap();
  let booking = ledger.create(Some(&ana), trip("Ana")).await.unwrap();

  // Wipe the user collection out from under the ledger.
  s.write(USERS_KEY, "[]".to_string()).await.unwrap();

  let hers = ledger.list_for_user(UserRef::Registered(ana.id)).await.unwrap();
  assert_eq!(hers, vec![booking]);
}

#[tokio::test]
async fn booking_list_serde_round_trips() {
  let s = store().await;
  let registry = IdentityRegistry::new(Arc::clone(&s));
  let ledger = BookingLedger::new(Arc::clone(&s));

  let ana = registry.register("Ana", "47999999999").await.unwrap();
  ledger.create(Some(&ana), trip("Ana")).await.unwrap();
  let mut with_trunk = trip("Carlos");
  with_trunk.needs_trunk = true;
  ledger.create(None, with_trunk).await.unwrap();

  let list = ledger.list_all().await.unwrap();
  let json = serde_json::to_string(&list).unwrap();
  let back: Vec<Booking> = serde_json::from_str(&json).unwrap();
  assert_eq!(back, list);
}

#[tokio::test]
async fn corrupt_booking_blob_surfaces_instead_of_resetting() {
  let s = store().await;
  let ledger = BookingLedger::new(Arc::clone(&s));

  s.write(BOOKINGS_KEY, "{not json".to_string()).await.unwrap();

  let err = ledger.list_all().await.unwrap_err();
  assert!(matches!(
    err,
    BookingError::Store(StoreError::Corrupt { key: BOOKINGS_KEY, .. })
  ));

  // The broken blob is still there, untouched.
  assert_eq!(s.read(BOOKINGS_KEY).await.unwrap().as_deref(), Some("{not json"));
}

// ─── Site configuration ──────────────────────────────────────────────────────

#[tokio::test]
async fn config_defaults_before_any_save() {
  let settings = SiteSettings::new(store().await);
  let config = settings.get().await.unwrap();
  assert_eq!(config, SiteConfig::default());
  assert!(config.hero_image_url.starts_with("https://images.unsplash.com/"));
}

#[tokio::test]
async fn config_save_then_get_round_trips() {
  let settings = SiteSettings::new(store().await);

  let config = SiteConfig {
    hero_image_url: "https://cdn.example.com/hero.jpg".to_string(),
    fleet_image_urls: FleetImages {
      electric: "https://cdn.example.com/electric.jpg".to_string(),
      sedan:    "https://cdn.example.com/sedan.jpg".to_string(),
      hatch:    "https://cdn.example.com/hatch.jpg".to_string(),
    },
  };

  settings.save(&config).await.unwrap();
  assert_eq!(settings.get().await.unwrap(), config);
}

#[tokio::test]
async fn config_save_is_a_full_overwrite() {
  let settings = SiteSettings::new(store().await);

  let mut config = SiteConfig::default();
  config.hero_image_url = "https://cdn.example.com/v1.jpg".to_string();
  settings.save(&config).await.unwrap();

  config.hero_image_url = "https://cdn.example.com/v2.jpg".to_string();
  settings.save(&config).await.unwrap();

  assert_eq!(
    settings.get().await.unwrap().hero_image_url,
    "https://cdn.example.com/v2.jpg"
  );
}
