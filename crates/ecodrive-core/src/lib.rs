//! Core types and trait definitions for the EcoDrive booking backend.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod booking;
pub mod chat;
pub mod error;
pub mod ledger;
pub mod registry;
pub mod settings;
pub mod site;
pub mod store;
pub mod user;

pub use error::{AuthError, BookingError, StoreError};
