//! Domain layer: business rules for booking, availability and the admin
//! gate. No HTTP or file-format concerns here; the io layer translates in
//! and out, the storage layer persists.

pub mod appointment_service;
pub mod auth_service;
pub mod availability_service;
pub mod commands;
pub mod error;
pub mod models;
pub mod slots;

pub use appointment_service::{AppointmentService, AppointmentStats};
pub use auth_service::{AdminCredentials, AuthService};
pub use availability_service::{AvailabilityService, DaySlots, WeeklySummary};
pub use error::BookingError;
