//! # Appointment Repository
//!
//! JSON-file appointment ledger. The whole ledger is one ordered array in
//! `appointments.json`, read and rewritten wholesale on every operation.
//! Dates and times are stored as strings (`YYYY-MM-DD` / `HH:MM`); parsing
//! them into chrono types is this layer's responsibility, and a record that
//! fails to parse fails the whole operation rather than being dropped.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;

use super::connection::JsonConnection;
use crate::backend::domain::models::appointment::{
    Appointment as DomainAppointment, AppointmentStatus as DomainAppointmentStatus, ClientDetails,
};
use crate::backend::storage::traits::AppointmentStorage;

/// On-disk shape of one appointment record.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppointmentRecord {
    id: String,
    date: String,
    time: String,
    client: ClientRecord,
    status: String,
    created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ClientRecord {
    first_name: String,
    last_name: String,
    email: String,
    phone: String,
}

#[derive(Clone)]
pub struct AppointmentRepository {
    connection: JsonConnection,
}

impl AppointmentRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    /// Read all records from the ledger file. A missing file is an empty
    /// ledger; an unreadable or malformed file is an error.
    fn read_records(&self) -> Result<Vec<AppointmentRecord>> {
        let path = self.connection.appointments_file_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("corrupted appointment ledger at {}", path.display()))
    }

    fn write_records(&self, records: &[AppointmentRecord]) -> Result<()> {
        let path = self.connection.appointments_file_path();
        let contents = serde_json::to_string_pretty(records)
            .context("failed to serialize appointment ledger")?;
        self.connection.write_atomic(&path, &contents)
    }

    fn to_domain(record: &AppointmentRecord) -> Result<DomainAppointment> {
        let date = NaiveDate::parse_from_str(&record.date, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}' in appointment {}", record.date, record.id))?;
        let time = NaiveTime::parse_from_str(&record.time, "%H:%M")
            .with_context(|| format!("invalid time '{}' in appointment {}", record.time, record.id))?;
        let created_at = DateTime::parse_from_rfc3339(&record.created_at)
            .with_context(|| {
                format!(
                    "invalid created_at '{}' in appointment {}",
                    record.created_at, record.id
                )
            })?
            .with_timezone(&Utc);
        let status = match record.status.as_str() {
            "confirmed" => DomainAppointmentStatus::Confirmed,
            "cancelled" => DomainAppointmentStatus::Cancelled,
            other => bail!("unknown status '{}' in appointment {}", other, record.id),
        };

        Ok(DomainAppointment {
            id: record.id.clone(),
            date,
            time,
            client: ClientDetails {
                first_name: record.client.first_name.clone(),
                last_name: record.client.last_name.clone(),
                email: record.client.email.clone(),
                phone: record.client.phone.clone(),
            },
            status,
            created_at,
        })
    }

    fn to_record(appointment: &DomainAppointment) -> AppointmentRecord {
        AppointmentRecord {
            id: appointment.id.clone(),
            date: appointment.date.format("%Y-%m-%d").to_string(),
            time: appointment.time.format("%H:%M").to_string(),
            client: ClientRecord {
                first_name: appointment.client.first_name.clone(),
                last_name: appointment.client.last_name.clone(),
                email: appointment.client.email.clone(),
                phone: appointment.client.phone.clone(),
            },
            status: match appointment.status {
                DomainAppointmentStatus::Confirmed => "confirmed".to_string(),
                DomainAppointmentStatus::Cancelled => "cancelled".to_string(),
            },
            created_at: appointment.created_at.to_rfc3339(),
        }
    }
}

impl AppointmentStorage for AppointmentRepository {
    fn store_appointment(&self, appointment: &DomainAppointment) -> Result<()> {
        let mut records = self.read_records()?;
        records.push(Self::to_record(appointment));
        self.write_records(&records)
    }

    fn get_appointment(&self, appointment_id: &str) -> Result<Option<DomainAppointment>> {
        let records = self.read_records()?;
        records
            .iter()
            .find(|record| record.id == appointment_id)
            .map(Self::to_domain)
            .transpose()
    }

    fn list_appointments(&self) -> Result<Vec<DomainAppointment>> {
        self.read_records()?.iter().map(Self::to_domain).collect()
    }

    fn update_appointment(&self, appointment: &DomainAppointment) -> Result<bool> {
        let mut records = self.read_records()?;
        let Some(slot) = records.iter_mut().find(|record| record.id == appointment.id) else {
            return Ok(false);
        };
        *slot = Self::to_record(appointment);
        self.write_records(&records)?;
        Ok(true)
    }
}
