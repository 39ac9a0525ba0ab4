// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation.
///
/// These are raised only at the snapshot ingestion boundary. The
/// reconciliation functions themselves are total: semantically dirty
/// data degrades to sentinel values instead of an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A time slot's end time is not after its start time, or its name is empty.
    InvalidTimeSlot {
        /// The slot name as given in the snapshot.
        name: String,
        /// A human-readable description of the violation.
        reason: String,
    },
    /// The declared timezone is not a valid IANA timezone name.
    InvalidTimezone(String),
    /// The activity kind string is not recognized.
    InvalidActivityKind(String),
    /// The approval status string is not recognized.
    InvalidApprovalStatus(String),
    /// The participant status string is not recognized.
    InvalidParticipantStatus(String),
    /// The check-in type string is not recognized.
    InvalidCheckInType(String),
    /// The slot key string is not recognized.
    InvalidSlotKey(String),
    /// A single-day activity is missing its calendar date.
    MissingActivityDate,
    /// A multi-day schedule contains the same day number twice.
    DuplicateScheduleDay {
        /// The duplicated day number.
        day: u32,
    },
    /// Schedule day numbers do not increase with date order.
    ScheduleOutOfOrder {
        /// The first day number at which the ordering breaks.
        day: u32,
    },
    /// The schedule or date fields are structurally invalid.
    InvalidSchedule {
        /// A human-readable description of the violation.
        reason: String,
    },
    /// Failed to parse a date string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// Failed to parse a time-of-day string.
    TimeParseError {
        /// The invalid time string.
        time_string: String,
        /// The parsing error message.
        error: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTimeSlot { name, reason } => {
                write!(f, "Invalid time slot '{name}': {reason}")
            }
            Self::InvalidTimezone(tz) => write!(f, "Invalid timezone: {tz}"),
            Self::InvalidActivityKind(kind) => write!(f, "Invalid activity kind: {kind}"),
            Self::InvalidApprovalStatus(status) => {
                write!(f, "Invalid approval status: {status}")
            }
            Self::InvalidParticipantStatus(status) => {
                write!(f, "Invalid participant status: {status}")
            }
            Self::InvalidCheckInType(kind) => write!(f, "Invalid check-in type: {kind}"),
            Self::InvalidSlotKey(key) => write!(f, "Invalid slot key: {key}"),
            Self::MissingActivityDate => {
                write!(f, "Single-day activity is missing its calendar date")
            }
            Self::DuplicateScheduleDay { day } => {
                write!(f, "Schedule day {day} appears more than once")
            }
            Self::ScheduleOutOfOrder { day } => {
                write!(
                    f,
                    "Schedule day {day} breaks the day-number/date ordering invariant"
                )
            }
            Self::InvalidSchedule { reason } => write!(f, "Invalid schedule: {reason}"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::TimeParseError { time_string, error } => {
                write!(f, "Failed to parse time '{time_string}': {error}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
