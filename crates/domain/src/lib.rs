// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod label;
mod registration;
mod schedule;
mod types;
mod validation;
mod window;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use label::{ParsedLabel, extract_day_number, label_matches, parse_label};
pub use registration::{DaySlot, Registration};
pub use schedule::slot_time_override;
pub use validation::validate_activity;
pub use window::{ON_TIME_TOLERANCE_MINUTES, local_instant, slot_window, timeliness};

// Re-export public types
pub use types::{
    Activity, ActivityKind, ApprovalStatus, AttendanceRecord, CheckInType, DEFAULT_TIMEZONE,
    GeoPoint, Participant, ParticipantStatus, ScheduleDay, SlotKey, SlotStatus, TimeSlot,
    TimeStatus,
};
