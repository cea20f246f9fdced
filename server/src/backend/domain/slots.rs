//! Slot generation from a day's availability rule.
//!
//! The single source of bookable times: the admin preview, the weekly
//! summary and the client-facing slot listing all go through
//! [`generate_slots`], so the offered slots always match the configured
//! availability.

use chrono::{Duration, NaiveTime};

use crate::backend::domain::models::schedule::DayRule;

/// Fixed slot granularity. Slot boundaries land on :00 and :30.
pub const SLOT_INTERVAL_MINUTES: i64 = 30;

/// Generate the ordered bookable times for one day's rule.
///
/// Steps from `rule.start` in 30-minute increments, emitting every time
/// strictly before `rule.end` and skipping the break window. A closed day
/// yields no slots. Pure: the output depends on the rule alone, so repeated
/// calls with the same rule produce the same sequence.
pub fn generate_slots(rule: &DayRule) -> Vec<NaiveTime> {
    if !rule.open {
        return Vec::new();
    }

    let step = Duration::minutes(SLOT_INTERVAL_MINUTES);
    let mut slots = Vec::new();
    let mut current = rule.start;
    while current < rule.end {
        if !in_break(rule, current) {
            slots.push(current);
        }
        let (next, overflow) = current.overflowing_add_signed(step);
        if overflow != 0 {
            // Stepping wrapped past midnight; `end` can never be reached.
            break;
        }
        current = next;
    }
    slots
}

fn in_break(rule: &DayRule, time: NaiveTime) -> bool {
    let brk = rule.break_window;
    brk.active && brk.start <= time && time < brk.end
}
