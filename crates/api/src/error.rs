// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use rollcall_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A snapshot violated a structural rule.
    InvalidSnapshot {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::InvalidSnapshot { rule, message } => {
                write!(f, "Invalid snapshot ({rule}): {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidTimeSlot { name, reason } => ApiError::InvalidInput {
            field: String::from("timeSlots"),
            message: format!("Time slot '{name}': {reason}"),
        },
        DomainError::InvalidTimezone(tz) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message: format!("'{tz}' is not a valid IANA timezone name"),
        },
        DomainError::InvalidActivityKind(kind) => ApiError::InvalidInput {
            field: String::from("kind"),
            message: format!("Unrecognized activity kind '{kind}'"),
        },
        DomainError::InvalidApprovalStatus(status) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unrecognized approval status '{status}'"),
        },
        DomainError::InvalidParticipantStatus(status) => ApiError::InvalidInput {
            field: String::from("status"),
            message: format!("Unrecognized participant status '{status}'"),
        },
        DomainError::InvalidCheckInType(kind) => ApiError::InvalidInput {
            field: String::from("checkInType"),
            message: format!("Unrecognized check-in type '{kind}'"),
        },
        DomainError::InvalidSlotKey(key) => ApiError::InvalidInput {
            field: String::from("slot"),
            message: format!("Unrecognized slot key '{key}'"),
        },
        DomainError::MissingActivityDate => ApiError::InvalidSnapshot {
            rule: String::from("single_day_has_date"),
            message: String::from("Single-day activity is missing its calendar date"),
        },
        DomainError::DuplicateScheduleDay { day } => ApiError::InvalidSnapshot {
            rule: String::from("unique_schedule_days"),
            message: format!("Schedule contains day {day} more than once"),
        },
        DomainError::ScheduleOutOfOrder { day } => ApiError::InvalidSnapshot {
            rule: String::from("schedule_ordered"),
            message: format!("Schedule day numbers stop increasing with dates at day {day}"),
        },
        DomainError::InvalidSchedule { reason } => ApiError::InvalidSnapshot {
            rule: String::from("schedule_structure"),
            message: reason,
        },
        DomainError::DateParseError { date_string, error } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Failed to parse date '{date_string}': {error}"),
        },
        DomainError::TimeParseError { time_string, error } => ApiError::InvalidInput {
            field: String::from("time"),
            message: format!("Failed to parse time '{time_string}': {error}"),
        },
    }
}
