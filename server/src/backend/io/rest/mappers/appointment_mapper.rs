//! DTO conversion for appointments.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveTime};

use crate::backend::domain::appointment_service::AppointmentStats;
use crate::backend::domain::commands::appointments::{
    AppointmentFilter as DomainFilter, CreateAppointmentCommand,
};
use crate::backend::domain::models::appointment::{
    Appointment as DomainAppointment, AppointmentStatus as DomainStatus,
};

pub struct AppointmentMapper;

impl AppointmentMapper {
    pub fn to_dto(appointment: DomainAppointment) -> shared::Appointment {
        shared::Appointment {
            id: appointment.id,
            date: appointment.date.format("%Y-%m-%d").to_string(),
            time: appointment.time.format("%H:%M").to_string(),
            client: shared::ClientDetails {
                first_name: appointment.client.first_name,
                last_name: appointment.client.last_name,
                email: appointment.client.email,
                phone: appointment.client.phone,
            },
            status: match appointment.status {
                DomainStatus::Confirmed => shared::AppointmentStatus::Confirmed,
                DomainStatus::Cancelled => shared::AppointmentStatus::Cancelled,
            },
            created_at: appointment.created_at.to_rfc3339(),
        }
    }

    /// Parse the request into a domain command. Only the date/time shape is
    /// checked here; contact-field validation is the service's job.
    pub fn to_create_command(
        request: shared::CreateAppointmentRequest,
    ) -> Result<CreateAppointmentCommand> {
        let date = NaiveDate::parse_from_str(&request.date, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{}'", request.date))?;
        let time = NaiveTime::parse_from_str(&request.time, "%H:%M")
            .with_context(|| format!("invalid time '{}'", request.time))?;

        Ok(CreateAppointmentCommand {
            date,
            time,
            first_name: request.first_name,
            last_name: request.last_name,
            email: request.email,
            phone: request.phone,
        })
    }

    pub fn filter_to_domain(filter: shared::AppointmentFilter) -> DomainFilter {
        match filter {
            shared::AppointmentFilter::All => DomainFilter::All,
            shared::AppointmentFilter::Today => DomainFilter::Today,
            shared::AppointmentFilter::Upcoming => DomainFilter::Upcoming,
        }
    }

    pub fn stats_to_dto(stats: AppointmentStats) -> shared::AppointmentStatsResponse {
        shared::AppointmentStatsResponse {
            today: stats.today,
            upcoming: stats.upcoming,
            total: stats.total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_command_rejects_malformed_dates() {
        let request = shared::CreateAppointmentRequest {
            date: "10/06/2025".to_string(),
            time: "09:00".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Rojas".to_string(),
            email: "ana@example.com".to_string(),
            phone: "300".to_string(),
        };
        let error = AppointmentMapper::to_create_command(request).unwrap_err();
        assert!(error.to_string().contains("invalid date"));
    }

    #[test]
    fn create_command_parses_slot_labels() {
        let request = shared::CreateAppointmentRequest {
            date: "2025-06-10".to_string(),
            time: "13:30".to_string(),
            first_name: "Ana".to_string(),
            last_name: "Rojas".to_string(),
            email: "ana@example.com".to_string(),
            phone: "300".to_string(),
        };
        let command = AppointmentMapper::to_create_command(request).unwrap();
        assert_eq!(command.time, NaiveTime::from_hms_opt(13, 30, 0).unwrap());
    }
}
