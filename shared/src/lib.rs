//! Shared data types for the Palm Black booking app.
//!
//! Everything that crosses the HTTP boundary lives here: appointment and
//! schedule DTOs plus the request/response pairs for each endpoint. Dates
//! and times travel as strings (`YYYY-MM-DD` / `HH:MM`) and are parsed at
//! the edges; the backend's domain layer works with chrono types.

use serde::{Deserialize, Serialize};

/// A booked appointment as exposed to the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Calendar date of the appointment (`YYYY-MM-DD`)
    pub date: String,
    /// Slot label (`HH:MM`), always on a `:00` or `:30` boundary
    pub time: String,
    pub client: ClientDetails,
    pub status: AppointmentStatus,
    /// When the booking was submitted (RFC 3339)
    pub created_at: String,
}

/// Contact details the client submits with a booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Appointment lifecycle state. Cancelled is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
}

/// Which slice of the ledger an appointment listing should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentFilter {
    All,
    Today,
    #[default]
    Upcoming,
}

/// Request body for creating an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub date: String,
    pub time: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentListResponse {
    pub appointments: Vec<Appointment>,
}

/// Response after cancelling an appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancelAppointmentResponse {
    pub appointment: Appointment,
    pub message: String,
}

/// Dashboard counters over confirmed appointments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppointmentStatsResponse {
    pub today: usize,
    pub upcoming: usize,
    pub total: usize,
}

/// Every rule a rejected submission broke, as human-readable messages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub errors: Vec<String>,
}

/// Break window within a working day. Slots inside it are not offered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakWindow {
    pub active: bool,
    pub start_time: String,
    pub end_time: String,
}

/// One weekday's working-hour rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub open: bool,
    pub start_time: String,
    pub end_time: String,
    #[serde(rename = "break")]
    pub break_window: BreakWindow,
}

/// The full weekly rule set, one entry per weekday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub monday: DaySchedule,
    pub tuesday: DaySchedule,
    pub wednesday: DaySchedule,
    pub thursday: DaySchedule,
    pub friday: DaySchedule,
    pub saturday: DaySchedule,
    pub sunday: DaySchedule,
}

/// Free and taken slot labels for one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySlotsResponse {
    pub date: String,
    pub available: Vec<String>,
    pub booked: Vec<String>,
}

/// Counters for the admin page's weekly summary card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklySummaryResponse {
    pub open_days: usize,
    pub weekly_slots: usize,
    pub days_with_break: usize,
}

/// Request for the admin login gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response from the admin login gate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub display_name: Option<String>,
}

/// The persisted admin session flag and display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub logged_in: bool,
    pub display_name: Option<String>,
}
