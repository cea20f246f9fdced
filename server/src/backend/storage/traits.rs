//! # Storage Traits
//!
//! Storage abstraction traits so the domain layer can work against
//! different backends without modification. All operations are synchronous:
//! every ledger and rule-store operation runs to completion within one
//! request.

use anyhow::Result;

use crate::backend::domain::models::appointment::Appointment as DomainAppointment;
use crate::backend::domain::models::schedule::WeekSchedule;
use crate::backend::domain::models::session::AdminSession;

/// Interface for appointment ledger storage.
///
/// The ledger is append-plus-update only: entries are never deleted, a
/// cancel is a status change on an existing entry.
pub trait AppointmentStorage: Send + Sync {
    /// Append a new appointment to the ledger.
    fn store_appointment(&self, appointment: &DomainAppointment) -> Result<()>;

    /// Retrieve a specific appointment by ID.
    fn get_appointment(&self, appointment_id: &str) -> Result<Option<DomainAppointment>>;

    /// List every stored appointment in insertion order.
    fn list_appointments(&self) -> Result<Vec<DomainAppointment>>;

    /// Replace the stored appointment carrying the same id.
    /// Returns true if an entry was found and replaced.
    fn update_appointment(&self, appointment: &DomainAppointment) -> Result<bool>;
}

/// Interface for the weekly availability rule store.
pub trait ScheduleStorage: Send + Sync {
    /// The saved schedule, or None if none has ever been saved.
    fn get_schedule(&self) -> Result<Option<WeekSchedule>>;

    /// Overwrite the full weekly rule set. All-or-nothing: a failed write
    /// leaves the previously stored schedule in place.
    fn save_schedule(&self, schedule: &WeekSchedule) -> Result<()>;
}

/// Interface for the persisted admin session flag.
pub trait SessionStorage: Send + Sync {
    /// The stored session, or None if no admin is logged in.
    fn get_session(&self) -> Result<Option<AdminSession>>;

    /// Persist the session after a successful login.
    fn save_session(&self, session: &AdminSession) -> Result<()>;

    /// Remove the persisted session on logout. A no-op if none exists.
    fn clear_session(&self) -> Result<()>;
}
