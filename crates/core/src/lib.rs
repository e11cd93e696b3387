//! # MedConsult Core
//!
//! Domain types and booking rules for scheduling medical consultations.
//!
//! Persistence and the current time are reached through the ports in
//! [`repository`] and [`mockable::Clock`], so the rules in [`service`] can be
//! exercised without a database or a wall clock.

pub mod errors;
pub mod models;
pub mod repository;
pub mod service;
pub mod slot;

pub use errors::{ConsultError, ConsultResult};
pub use service::BookingService;
pub use slot::Slot;
