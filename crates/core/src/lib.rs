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

mod resolve;
mod rollups;
mod scope;
mod stats;

#[cfg(test)]
mod tests;

use rollcall_domain::{Activity, Participant};

// Re-export public types and functions
pub use resolve::{effective_slot_times, find_matching_record, resolve_slot_status};
pub use rollups::{ActivityRollups, compute_activity_rollups};
pub use scope::{
    ParticipantAttendance, Scope, ScopePolicy, SessionInstance, SessionRule, session_instances,
};
pub use stats::{CheckInRate, SessionRate, compute_check_in_rate, compute_session_rate};

/// Decides whether a (day, slot) query counts toward a participant's
/// denominator.
///
/// Thin convenience over [`rollcall_domain::Registration::covers`] so
/// table-cell call sites do not reach into the registration variant.
///
/// # Arguments
///
/// * `activity` - The activity definition
/// * `participant` - The participant
/// * `day` - The schedule day number, for multi-day activities
/// * `slot_name` - The configured slot name being queried
#[must_use]
pub fn is_slot_registered(
    activity: &Activity,
    participant: &Participant,
    day: Option<u32>,
    slot_name: &str,
) -> bool {
    participant
        .registration
        .covers(activity.kind, day, slot_name)
}
