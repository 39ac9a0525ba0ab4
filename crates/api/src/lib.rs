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
mod export;
mod report;
mod snapshot;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::{ApiError, translate_domain_error};
pub use export::{ExportError, write_report_csv};
pub use report::{Report, ReportCell, ReportRow, build_report, report_headers};
pub use snapshot::{
    ActivitySnapshot, AttendanceSnapshot, GeoPointSnapshot, ParticipantSnapshot,
    RegisteredDaySlotSnapshot, ScheduleDaySnapshot, TimeSlotSnapshot, approved_roster,
    normalize_user_id,
};
