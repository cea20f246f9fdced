//! Weekly availability domain logic.
//!
//! Owns the rule store (read with defaults, validated save) and the
//! orchestration that turns a calendar date into offered slots: the
//! weekday's rule drives the slot generator, and the result is
//! cross-referenced against the ledger's booked times.

use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveTime};
use log::info;

use crate::backend::domain::appointment_service::AppointmentService;
use crate::backend::domain::commands::availability::UpdateScheduleCommand;
use crate::backend::domain::error::BookingError;
use crate::backend::domain::models::schedule::{WeekSchedule, DEFAULT_WEEK_SCHEDULE};
use crate::backend::domain::slots::generate_slots;
use crate::backend::storage::json::{JsonConnection, ScheduleRepository};
use crate::backend::storage::traits::ScheduleStorage;

/// Free and taken slots for one calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub available: Vec<NaiveTime>,
    pub booked: Vec<NaiveTime>,
}

/// Counters for the admin page's weekly summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklySummary {
    pub open_days: usize,
    pub weekly_slots: usize,
    pub days_with_break: usize,
}

#[derive(Clone)]
pub struct AvailabilityService {
    schedule_repository: ScheduleRepository,
}

impl AvailabilityService {
    pub fn new(connection: JsonConnection) -> Self {
        Self {
            schedule_repository: ScheduleRepository::new(connection),
        }
    }

    /// The saved weekly schedule, or the built-in defaults if none has ever
    /// been saved.
    pub fn schedule(&self) -> Result<WeekSchedule> {
        Ok(self
            .schedule_repository
            .get_schedule()?
            .unwrap_or_else(|| DEFAULT_WEEK_SCHEDULE.clone()))
    }

    /// Validate and overwrite the full weekly rule set. A rejected update
    /// leaves the stored schedule untouched.
    pub fn update_schedule(
        &self,
        command: UpdateScheduleCommand,
    ) -> Result<WeekSchedule, BookingError> {
        if let Err(violations) = command.schedule.validate() {
            info!(
                "Rejected schedule update: {} rule violations",
                violations.len()
            );
            return Err(BookingError::InvalidSchedule(violations));
        }

        self.schedule_repository.save_schedule(&command.schedule)?;
        info!("Updated weekly availability");
        Ok(command.schedule)
    }

    /// Free and booked slots for `date`. Both lists hold generated slot
    /// times only, so a stale booking outside the current hours does not
    /// resurface in the grid.
    pub fn day_slots(
        &self,
        date: NaiveDate,
        appointments: &AppointmentService,
    ) -> Result<DaySlots> {
        let schedule = self.schedule()?;
        let slots = generate_slots(schedule.rule_for(date.weekday()));
        let booked_times = appointments.booked_times(date)?;

        let (booked, available): (Vec<NaiveTime>, Vec<NaiveTime>) = slots
            .into_iter()
            .partition(|slot| booked_times.contains(slot));

        Ok(DaySlots {
            date,
            available,
            booked,
        })
    }

    /// Counters for the admin summary card, computed from the current rules.
    pub fn weekly_summary(&self) -> Result<WeeklySummary> {
        let schedule = self.schedule()?;
        let mut summary = WeeklySummary {
            open_days: 0,
            weekly_slots: 0,
            days_with_break: 0,
        };
        for (_, rule) in schedule.days() {
            if !rule.open {
                continue;
            }
            summary.open_days += 1;
            summary.weekly_slots += generate_slots(rule).len();
            if rule.break_window.active {
                summary.days_with_break += 1;
            }
        }
        Ok(summary)
    }
}
