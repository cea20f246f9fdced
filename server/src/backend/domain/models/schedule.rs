//! Weekly availability rules.
//!
//! One `DayRule` per weekday, each with opening hours and an optional break
//! window. The rule set is replaced wholesale on save; validation happens at
//! that write boundary, so a stored schedule is always internally
//! consistent.

use chrono::{NaiveTime, Weekday};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Break window within a working day. Times in `[start, end)` are not
/// offered as slots while `active` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    pub active: bool,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// One weekday's working-hour rule. Times are wall-clock, local to the shop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRule {
    pub open: bool,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub break_window: BreakWindow,
}

/// The full weekly rule set, one entry per weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSchedule {
    pub monday: DayRule,
    pub tuesday: DayRule,
    pub wednesday: DayRule,
    pub thursday: DayRule,
    pub friday: DayRule,
    pub saturday: DayRule,
    pub sunday: DayRule,
}

/// A single broken rule found while validating a schedule update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScheduleViolation {
    #[error("{0}: opening time must be earlier than closing time")]
    InvertedHours(Weekday),
    #[error("{0}: break start must be earlier than break end")]
    InvertedBreak(Weekday),
    #[error("{0}: break must fall within working hours")]
    BreakOutsideHours(Weekday),
}

impl WeekSchedule {
    /// The rule governing a given weekday.
    pub fn rule_for(&self, weekday: Weekday) -> &DayRule {
        match weekday {
            Weekday::Mon => &self.monday,
            Weekday::Tue => &self.tuesday,
            Weekday::Wed => &self.wednesday,
            Weekday::Thu => &self.thursday,
            Weekday::Fri => &self.friday,
            Weekday::Sat => &self.saturday,
            Weekday::Sun => &self.sunday,
        }
    }

    /// All seven rules in weekday order, Monday first.
    pub fn days(&self) -> [(Weekday, &DayRule); 7] {
        [
            (Weekday::Mon, &self.monday),
            (Weekday::Tue, &self.tuesday),
            (Weekday::Wed, &self.wednesday),
            (Weekday::Thu, &self.thursday),
            (Weekday::Fri, &self.friday),
            (Weekday::Sat, &self.saturday),
            (Weekday::Sun, &self.sunday),
        ]
    }

    /// Check every day rule, collecting all violations rather than stopping
    /// at the first. Closed days are not checked; their times are inert.
    pub fn validate(&self) -> Result<(), Vec<ScheduleViolation>> {
        let mut violations = Vec::new();
        for (weekday, rule) in self.days() {
            if !rule.open {
                continue;
            }
            if rule.start >= rule.end {
                violations.push(ScheduleViolation::InvertedHours(weekday));
            }
            let brk = rule.break_window;
            if brk.active {
                if brk.start >= brk.end {
                    violations.push(ScheduleViolation::InvertedBreak(weekday));
                } else if brk.start < rule.start || brk.end > rule.end {
                    violations.push(ScheduleViolation::BreakOutsideHours(weekday));
                }
            }
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("valid wall-clock time")
}

/// The built-in default week: Monday to Friday 09:00-18:00 and Saturday
/// 08:00-17:00, all with a 12:00-13:00 break; Sunday closed with inert
/// 10:00-16:00 times.
pub static DEFAULT_WEEK_SCHEDULE: Lazy<WeekSchedule> = Lazy::new(|| {
    let weekday = DayRule {
        open: true,
        start: at(9, 0),
        end: at(18, 0),
        break_window: BreakWindow {
            active: true,
            start: at(12, 0),
            end: at(13, 0),
        },
    };
    WeekSchedule {
        monday: weekday,
        tuesday: weekday,
        wednesday: weekday,
        thursday: weekday,
        friday: weekday,
        saturday: DayRule {
            open: true,
            start: at(8, 0),
            end: at(17, 0),
            break_window: BreakWindow {
                active: true,
                start: at(12, 0),
                end: at(13, 0),
            },
        },
        sunday: DayRule {
            open: false,
            start: at(10, 0),
            end: at(16, 0),
            break_window: BreakWindow {
                active: false,
                start: at(12, 0),
                end: at(13, 0),
            },
        },
    }
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_week_matches_shop_hours() {
        let schedule = DEFAULT_WEEK_SCHEDULE.clone();
        assert!(schedule.monday.open);
        assert_eq!(schedule.monday.start, at(9, 0));
        assert_eq!(schedule.monday.end, at(18, 0));
        assert!(schedule.monday.break_window.active);
        assert_eq!(schedule.saturday.start, at(8, 0));
        assert_eq!(schedule.saturday.end, at(17, 0));
        assert!(!schedule.sunday.open);
        assert!(!schedule.sunday.break_window.active);
    }

    #[test]
    fn default_week_passes_validation() {
        assert!(DEFAULT_WEEK_SCHEDULE.validate().is_ok());
    }

    #[test]
    fn inverted_hours_are_reported_per_day() {
        let mut schedule = DEFAULT_WEEK_SCHEDULE.clone();
        schedule.monday.start = at(19, 0);
        schedule.friday.start = at(20, 0);
        let violations = schedule.validate().unwrap_err();
        assert_eq!(
            violations,
            vec![
                ScheduleViolation::InvertedHours(Weekday::Mon),
                ScheduleViolation::InvertedHours(Weekday::Fri),
            ]
        );
    }

    #[test]
    fn break_outside_working_hours_is_rejected() {
        let mut schedule = DEFAULT_WEEK_SCHEDULE.clone();
        schedule.tuesday.break_window.end = at(19, 0);
        let violations = schedule.validate().unwrap_err();
        assert_eq!(
            violations,
            vec![ScheduleViolation::BreakOutsideHours(Weekday::Tue)]
        );
    }

    #[test]
    fn closed_day_times_are_not_validated() {
        let mut schedule = DEFAULT_WEEK_SCHEDULE.clone();
        schedule.sunday.start = at(16, 0);
        schedule.sunday.end = at(10, 0);
        assert!(schedule.validate().is_ok());
    }
}
