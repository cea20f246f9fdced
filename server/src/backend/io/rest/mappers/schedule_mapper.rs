//! DTO conversion for the weekly schedule and slot listings.

use anyhow::{Context, Result};
use chrono::NaiveTime;

use crate::backend::domain::availability_service::{DaySlots, WeeklySummary};
use crate::backend::domain::models::schedule::{BreakWindow, DayRule, WeekSchedule};

pub struct ScheduleMapper;

impl ScheduleMapper {
    pub fn to_dto(schedule: WeekSchedule) -> shared::WeekSchedule {
        shared::WeekSchedule {
            monday: Self::day_to_dto(schedule.monday),
            tuesday: Self::day_to_dto(schedule.tuesday),
            wednesday: Self::day_to_dto(schedule.wednesday),
            thursday: Self::day_to_dto(schedule.thursday),
            friday: Self::day_to_dto(schedule.friday),
            saturday: Self::day_to_dto(schedule.saturday),
            sunday: Self::day_to_dto(schedule.sunday),
        }
    }

    pub fn to_domain(dto: shared::WeekSchedule) -> Result<WeekSchedule> {
        Ok(WeekSchedule {
            monday: Self::day_to_domain(dto.monday)?,
            tuesday: Self::day_to_domain(dto.tuesday)?,
            wednesday: Self::day_to_domain(dto.wednesday)?,
            thursday: Self::day_to_domain(dto.thursday)?,
            friday: Self::day_to_domain(dto.friday)?,
            saturday: Self::day_to_domain(dto.saturday)?,
            sunday: Self::day_to_domain(dto.sunday)?,
        })
    }

    pub fn day_slots_to_dto(day_slots: DaySlots) -> shared::DaySlotsResponse {
        shared::DaySlotsResponse {
            date: day_slots.date.format("%Y-%m-%d").to_string(),
            available: day_slots.available.iter().map(format_time).collect(),
            booked: day_slots.booked.iter().map(format_time).collect(),
        }
    }

    pub fn summary_to_dto(summary: WeeklySummary) -> shared::WeeklySummaryResponse {
        shared::WeeklySummaryResponse {
            open_days: summary.open_days,
            weekly_slots: summary.weekly_slots,
            days_with_break: summary.days_with_break,
        }
    }

    fn day_to_dto(rule: DayRule) -> shared::DaySchedule {
        shared::DaySchedule {
            open: rule.open,
            start_time: format_time(&rule.start),
            end_time: format_time(&rule.end),
            break_window: shared::BreakWindow {
                active: rule.break_window.active,
                start_time: format_time(&rule.break_window.start),
                end_time: format_time(&rule.break_window.end),
            },
        }
    }

    fn day_to_domain(day: shared::DaySchedule) -> Result<DayRule> {
        Ok(DayRule {
            open: day.open,
            start: parse_time(&day.start_time)?,
            end: parse_time(&day.end_time)?,
            break_window: BreakWindow {
                active: day.break_window.active,
                start: parse_time(&day.break_window.start_time)?,
                end: parse_time(&day.break_window.end_time)?,
            },
        })
    }
}

fn format_time(time: &NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

fn parse_time(value: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(value, "%H:%M").with_context(|| format!("invalid time '{}'", value))
}
