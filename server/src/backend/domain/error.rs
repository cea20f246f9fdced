//! Error types for booking operations.
//!
//! Three conditions callers must tell apart: validation failures (reported
//! with every violated rule, not just the first), a cancel against an
//! unknown id, and storage failures, which are fatal to the attempted
//! operation and never retried.

use thiserror::Error;

use crate::backend::domain::models::schedule::ScheduleViolation;

/// A single broken rule from appointment-form validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RuleViolation {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email address is not valid")]
    EmailInvalid,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Phone number contains invalid characters")]
    PhoneInvalid,
}

#[derive(Debug, Error)]
pub enum BookingError {
    /// Every rule the submitted appointment details broke.
    #[error("appointment details failed validation")]
    Validation(Vec<RuleViolation>),
    /// Every day rule the submitted schedule broke.
    #[error("schedule failed validation")]
    InvalidSchedule(Vec<ScheduleViolation>),
    /// The id does not match any stored appointment.
    #[error("no appointment with id {0}")]
    NotFound(String),
    /// The underlying store could not be read or written.
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

impl BookingError {
    /// Human-readable messages for the error, one per violated rule.
    pub fn messages(&self) -> Vec<String> {
        match self {
            BookingError::Validation(violations) => {
                violations.iter().map(ToString::to_string).collect()
            }
            BookingError::InvalidSchedule(violations) => {
                violations.iter().map(ToString::to_string).collect()
            }
            other => vec![other.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_cover_every_violation() {
        let error = BookingError::Validation(vec![
            RuleViolation::FirstNameRequired,
            RuleViolation::EmailInvalid,
        ]);
        assert_eq!(
            error.messages(),
            vec!["First name is required", "Email address is not valid"]
        );
    }
}
