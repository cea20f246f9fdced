//! Domain model for an appointment.
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Lifecycle state of an appointment. Cancelled is terminal; entries are
/// never physically deleted, only filtered out of active views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
}

/// Contact details submitted with a booking. All four fields are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClientDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    /// Calendar date of the appointment, no time-of-day
    pub date: NaiveDate,
    /// Slot time, always on a :00 or :30 boundary
    pub time: NaiveTime,
    pub client: ClientDetails,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    /// Generate a unique appointment ID from a creation timestamp.
    /// Format: apt-<timestamp_ms>-<random_suffix>
    /// Example: apt-1749546000123-af3c
    pub fn generate_id(timestamp_ms: u64) -> String {
        format!("apt-{}-{}", timestamp_ms, Self::generate_random_suffix(4))
    }

    /// Parse an appointment ID to extract its creation timestamp.
    pub fn parse_id(id: &str) -> Result<u64, String> {
        let parts: Vec<&str> = id.split('-').collect();
        if parts.len() != 3 || parts[0] != "apt" {
            return Err(format!("Invalid appointment ID format: {}", id));
        }
        parts[1]
            .parse::<u64>()
            .map_err(|_| format!("Invalid timestamp in ID: {}", parts[1]))
    }

    pub fn is_active(&self) -> bool {
        self.status == AppointmentStatus::Confirmed
    }

    /// Generate a random hex suffix for appointment IDs.
    fn generate_random_suffix(len: usize) -> String {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("Time went backwards")
            .as_nanos();
        format!("{:x}", now % (16_u128.pow(len as u32)))
            .chars()
            .take(len)
            .collect()
    }
}
