//! Appointment ledger domain logic.
//!
//! Owns the appointment collection: validated create, cancel (a status
//! transition, never a delete), filtered listing and the booked-times query
//! the slot computation cross-references.

use std::collections::BTreeSet;

use anyhow::Result;
use chrono::{Local, NaiveDate, NaiveTime, Utc};
use log::{info, warn};

use crate::backend::domain::commands::appointments::{
    AppointmentFilter, AppointmentListQuery, CancelAppointmentCommand, CreateAppointmentCommand,
};
use crate::backend::domain::error::{BookingError, RuleViolation};
use crate::backend::domain::models::appointment::{
    Appointment as DomainAppointment, AppointmentStatus, ClientDetails,
};
use crate::backend::storage::json::{AppointmentRepository, JsonConnection};
use crate::backend::storage::traits::AppointmentStorage;

/// Booking counters for the admin dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppointmentStats {
    pub today: usize,
    pub upcoming: usize,
    pub total: usize,
}

#[derive(Clone)]
pub struct AppointmentService {
    appointment_repository: AppointmentRepository,
}

impl AppointmentService {
    pub fn new(connection: JsonConnection) -> Self {
        Self {
            appointment_repository: AppointmentRepository::new(connection),
        }
    }

    /// Validate and append a new Confirmed appointment.
    ///
    /// Every violated rule is collected and returned together, so the form
    /// can show the full list instead of the first failure.
    pub fn create_appointment(
        &self,
        command: CreateAppointmentCommand,
    ) -> Result<DomainAppointment, BookingError> {
        let violations = validate_client_details(&command);
        if !violations.is_empty() {
            info!(
                "Rejected booking for {}: {} validation errors",
                command.date,
                violations.len()
            );
            return Err(BookingError::Validation(violations));
        }

        // The ledger does not enforce one Confirmed entry per (date, time);
        // two submissions racing for the same slot both land. Known gap,
        // covered by double_booking_is_not_prevented below.
        let now = Utc::now();
        let appointment = DomainAppointment {
            id: DomainAppointment::generate_id(now.timestamp_millis() as u64),
            date: command.date,
            time: command.time,
            client: ClientDetails {
                first_name: command.first_name.trim().to_string(),
                last_name: command.last_name.trim().to_string(),
                email: command.email.trim().to_string(),
                phone: command.phone.trim().to_string(),
            },
            status: AppointmentStatus::Confirmed,
            created_at: now,
        };

        self.appointment_repository.store_appointment(&appointment)?;
        info!(
            "Booked appointment {} for {} at {}",
            appointment.id,
            appointment.date,
            appointment.time.format("%H:%M")
        );
        Ok(appointment)
    }

    /// Transition an appointment to Cancelled. An unknown id is reported as
    /// NotFound, not silently ignored.
    pub fn cancel_appointment(
        &self,
        command: CancelAppointmentCommand,
    ) -> Result<DomainAppointment, BookingError> {
        let Some(mut appointment) = self.appointment_repository.get_appointment(&command.id)?
        else {
            warn!("Cancel requested for unknown appointment {}", command.id);
            return Err(BookingError::NotFound(command.id));
        };

        appointment.status = AppointmentStatus::Cancelled;
        self.appointment_repository.update_appointment(&appointment)?;
        info!("Cancelled appointment {}", appointment.id);
        Ok(appointment)
    }

    /// All Confirmed appointments, in ledger order.
    pub fn list_active(&self) -> Result<Vec<DomainAppointment>> {
        Ok(self
            .appointment_repository
            .list_appointments()?
            .into_iter()
            .filter(DomainAppointment::is_active)
            .collect())
    }

    /// Confirmed appointments matching the filter, ascending by (date, time).
    /// Today is calendar-date equality; Upcoming is date >= today, inclusive.
    pub fn list_appointments(
        &self,
        query: AppointmentListQuery,
    ) -> Result<Vec<DomainAppointment>> {
        let today = Local::now().date_naive();
        let mut appointments: Vec<DomainAppointment> = self
            .list_active()?
            .into_iter()
            .filter(|appointment| match query.filter {
                AppointmentFilter::All => true,
                AppointmentFilter::Today => appointment.date == today,
                AppointmentFilter::Upcoming => appointment.date >= today,
            })
            .collect();
        appointments.sort_by_key(|appointment| (appointment.date, appointment.time));
        Ok(appointments)
    }

    /// Times already taken by Confirmed appointments on `date`.
    pub fn booked_times(&self, date: NaiveDate) -> Result<BTreeSet<NaiveTime>> {
        Ok(self
            .list_active()?
            .into_iter()
            .filter(|appointment| appointment.date == date)
            .map(|appointment| appointment.time)
            .collect())
    }

    /// Dashboard counters over Confirmed appointments.
    pub fn stats(&self) -> Result<AppointmentStats> {
        let today = Local::now().date_naive();
        let active = self.list_active()?;
        Ok(AppointmentStats {
            today: active.iter().filter(|a| a.date == today).count(),
            upcoming: active.iter().filter(|a| a.date >= today).count(),
            total: active.len(),
        })
    }
}

fn validate_client_details(command: &CreateAppointmentCommand) -> Vec<RuleViolation> {
    let mut violations = Vec::new();

    if command.first_name.trim().is_empty() {
        violations.push(RuleViolation::FirstNameRequired);
    }
    if command.last_name.trim().is_empty() {
        violations.push(RuleViolation::LastNameRequired);
    }

    let email = command.email.trim();
    if email.is_empty() {
        violations.push(RuleViolation::EmailRequired);
    } else if !email_is_well_formed(email) {
        violations.push(RuleViolation::EmailInvalid);
    }

    let phone = command.phone.trim();
    if phone.is_empty() {
        violations.push(RuleViolation::PhoneRequired);
    } else if !phone_is_well_formed(phone) {
        violations.push(RuleViolation::PhoneInvalid);
    }

    violations
}

/// Simple local@domain.tld shape: one '@', no whitespace, and a dot with
/// characters on both sides in the domain part.
fn email_is_well_formed(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) if !local.is_empty() => match domain.rsplit_once('.') {
            Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
            None => false,
        },
        _ => false,
    }
}

/// Digits plus '+', '-', whitespace and parentheses.
fn phone_is_well_formed(phone: &str) -> bool {
    phone
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '-' | '(' | ')'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::storage::json::test_utils::TestHelper;
    use chrono::Duration;

    fn test_service() -> (TestHelper, AppointmentService) {
        let helper = TestHelper::new().unwrap();
        let service = AppointmentService::new(helper.env.connection.clone());
        (helper, service)
    }

    fn booking_for(date: &str, time: &str) -> CreateAppointmentCommand {
        CreateAppointmentCommand {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            time: NaiveTime::parse_from_str(time, "%H:%M").unwrap(),
            first_name: "Ana".to_string(),
            last_name: "Rojas".to_string(),
            email: "ana@example.com".to_string(),
            phone: "+57 300 123 4567".to_string(),
        }
    }

    #[test]
    fn create_appends_a_confirmed_entry() {
        let (_helper, service) = test_service();

        let appointment = service.create_appointment(booking_for("2025-06-10", "09:00")).unwrap();

        assert_eq!(appointment.status, AppointmentStatus::Confirmed);
        assert!(appointment.id.starts_with("apt-"));
        let active = service.list_active().unwrap();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].id, appointment.id);
    }

    #[test]
    fn create_with_all_fields_empty_reports_all_four_rules() {
        let (_helper, service) = test_service();
        let mut command = booking_for("2025-06-10", "09:00");
        command.first_name = String::new();
        command.last_name = "  ".to_string();
        command.email = String::new();
        command.phone = String::new();

        let error = service.create_appointment(command).unwrap_err();
        let BookingError::Validation(violations) = error else {
            panic!("expected a validation error");
        };
        assert_eq!(
            violations,
            vec![
                RuleViolation::FirstNameRequired,
                RuleViolation::LastNameRequired,
                RuleViolation::EmailRequired,
                RuleViolation::PhoneRequired,
            ]
        );
    }

    #[test]
    fn create_with_malformed_email_reports_email_format_only() {
        let (_helper, service) = test_service();
        let mut command = booking_for("2025-06-10", "09:00");
        command.email = "bad-email".to_string();

        let error = service.create_appointment(command).unwrap_err();
        let BookingError::Validation(violations) = error else {
            panic!("expected a validation error");
        };
        assert_eq!(violations, vec![RuleViolation::EmailInvalid]);
    }

    #[test]
    fn create_with_letters_in_phone_is_rejected() {
        let (_helper, service) = test_service();
        let mut command = booking_for("2025-06-10", "09:00");
        command.phone = "call me".to_string();

        let error = service.create_appointment(command).unwrap_err();
        let BookingError::Validation(violations) = error else {
            panic!("expected a validation error");
        };
        assert_eq!(violations, vec![RuleViolation::PhoneInvalid]);
    }

    #[test]
    fn email_shape_accepts_subdomains_and_rejects_missing_tld() {
        assert!(email_is_well_formed("ana@mail.example.com"));
        assert!(!email_is_well_formed("ana@example"));
        assert!(!email_is_well_formed("ana@.com"));
        assert!(!email_is_well_formed("ana example@x.co"));
        assert!(!email_is_well_formed("@example.com"));
    }

    #[test]
    fn cancelled_appointment_leaves_active_and_upcoming_views() {
        let (_helper, service) = test_service();
        let tomorrow = Local::now().date_naive() + Duration::days(1);
        let mut command = booking_for("2025-06-10", "10:30");
        command.date = tomorrow;

        let appointment = service.create_appointment(command).unwrap();
        service
            .cancel_appointment(CancelAppointmentCommand {
                id: appointment.id.clone(),
            })
            .unwrap();

        assert!(service.list_active().unwrap().is_empty());
        let upcoming = service
            .list_appointments(AppointmentListQuery {
                filter: AppointmentFilter::Upcoming,
            })
            .unwrap();
        assert!(upcoming.iter().all(|a| a.id != appointment.id));
    }

    #[test]
    fn cancel_of_unknown_id_is_not_found() {
        let (_helper, service) = test_service();
        let error = service
            .cancel_appointment(CancelAppointmentCommand {
                id: "apt-0-none".to_string(),
            })
            .unwrap_err();
        assert!(matches!(error, BookingError::NotFound(id) if id == "apt-0-none"));
    }

    #[test]
    fn listing_sorts_ascending_by_date_then_time() {
        let (_helper, service) = test_service();
        service.create_appointment(booking_for("2025-06-11", "09:00")).unwrap();
        service.create_appointment(booking_for("2025-06-10", "15:30")).unwrap();
        service.create_appointment(booking_for("2025-06-10", "09:30")).unwrap();

        let listed = service
            .list_appointments(AppointmentListQuery {
                filter: AppointmentFilter::All,
            })
            .unwrap();
        let order: Vec<(String, String)> = listed
            .iter()
            .map(|a| (a.date.to_string(), a.time.format("%H:%M").to_string()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("2025-06-10".to_string(), "09:30".to_string()),
                ("2025-06-10".to_string(), "15:30".to_string()),
                ("2025-06-11".to_string(), "09:00".to_string()),
            ]
        );
    }

    #[test]
    fn booked_times_cover_confirmed_entries_for_the_date_only() {
        let (_helper, service) = test_service();
        service.create_appointment(booking_for("2025-06-10", "09:00")).unwrap();
        service.create_appointment(booking_for("2025-06-11", "11:00")).unwrap();
        let cancelled = service.create_appointment(booking_for("2025-06-10", "14:00")).unwrap();
        service
            .cancel_appointment(CancelAppointmentCommand { id: cancelled.id })
            .unwrap();

        let booked = service
            .booked_times(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap())
            .unwrap();
        assert!(booked.contains(&NaiveTime::from_hms_opt(9, 0, 0).unwrap()));
        assert!(!booked.contains(&NaiveTime::from_hms_opt(14, 0, 0).unwrap()));
        assert_eq!(booked.len(), 1);
    }

    // The ledger performs no (date, time) uniqueness check, so two
    // submissions racing for the same slot both succeed. The UI hides taken
    // slots, which is the only guard there is.
    #[test]
    fn double_booking_is_not_prevented() {
        let (_helper, service) = test_service();
        service.create_appointment(booking_for("2025-06-10", "09:00")).unwrap();
        service.create_appointment(booking_for("2025-06-10", "09:00")).unwrap();

        let booked = service
            .booked_times(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap())
            .unwrap();
        assert_eq!(booked.len(), 1);
        assert_eq!(service.list_active().unwrap().len(), 2);
    }

    #[test]
    fn stats_count_only_confirmed_entries() {
        let (_helper, service) = test_service();
        let today = Local::now().date_naive();

        let mut command = booking_for("2025-06-10", "09:00");
        command.date = today;
        service.create_appointment(command).unwrap();

        let mut command = booking_for("2025-06-10", "10:00");
        command.date = today + Duration::days(3);
        service.create_appointment(command).unwrap();

        let mut command = booking_for("2025-06-10", "11:00");
        command.date = today + Duration::days(5);
        let cancelled = service.create_appointment(command).unwrap();
        service
            .cancel_appointment(CancelAppointmentCommand { id: cancelled.id })
            .unwrap();

        let stats = service.stats().unwrap();
        assert_eq!(stats.today, 1);
        assert_eq!(stats.upcoming, 2);
        assert_eq!(stats.total, 2);
    }
}
