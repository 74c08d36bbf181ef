//! Core domain model for eventecho.
//!
//! This crate defines the vendor and booking records, the catalog loader,
//! the budget estimator, and the append-only booking log. Everything here
//! is synchronous and free of network I/O.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod bookings;
pub mod budget;
pub mod catalog;
pub mod error;
pub mod model;
pub mod validation;

pub use bookings::BookingLog;
pub use budget::{coerce_guest_count, estimate, BudgetBreakdown, BudgetCategory};
pub use catalog::Catalog;
pub use error::{CatalogError, PersistenceError, ValidationError};
pub use model::{BookingRecord, BookingState, BudgetLevel, EventType, Money, VendorId, VendorRecord};
pub use validation::validate_email;
