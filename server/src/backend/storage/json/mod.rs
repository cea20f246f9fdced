//! # JSON flat-file storage backend
//!
//! The persisted state is three flat files under one data directory,
//! mirroring the key-value layout the booking app has always used:
//!
//! ```text
//! data/
//! ├── appointments.json   ← appointment ledger (ordered array)
//! ├── availability.yaml   ← weekly availability rules
//! └── session.yaml        ← admin session flag
//! ```

pub mod appointment_repository;
pub mod connection;
pub mod schedule_repository;
pub mod session_repository;
#[cfg(test)]
pub mod test_utils;

pub use appointment_repository::AppointmentRepository;
pub use connection::JsonConnection;
pub use schedule_repository::ScheduleRepository;
pub use session_repository::SessionRepository;
