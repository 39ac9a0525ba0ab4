// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Activity, ActivityKind};
use chrono_tz::Tz;
use std::collections::HashSet;

/// Validates the structural invariants of an activity snapshot.
///
/// This runs once at the ingestion boundary. The reconciliation functions
/// assume a validated activity and degrade gracefully rather than
/// re-checking.
///
/// # Arguments
///
/// * `activity` - The activity to validate
///
/// # Returns
///
/// * `Ok(())` if the activity is structurally valid
/// * `Err(DomainError)` describing the first violation found
///
/// # Errors
///
/// Returns an error if:
/// - The declared timezone is not a valid IANA name
/// - A single-day activity has no calendar date
/// - A multi-day activity has no schedule
/// - Schedule day numbers repeat, or do not increase with date order
pub fn validate_activity(activity: &Activity) -> Result<(), DomainError> {
    // Rule: the declared timezone must parse
    if activity.timezone.parse::<Tz>().is_err() {
        return Err(DomainError::InvalidTimezone(activity.timezone.clone()));
    }

    match activity.kind {
        ActivityKind::SingleDay => {
            // Rule: a single-day activity carries its date
            if activity.date.is_none() {
                return Err(DomainError::MissingActivityDate);
            }
        }
        ActivityKind::MultipleDays => {
            if activity.schedule.is_empty() {
                return Err(DomainError::InvalidSchedule {
                    reason: String::from("Multi-day activity has an empty schedule"),
                });
            }

            // Rule: day numbers are unique
            let mut seen: HashSet<u32> = HashSet::new();
            for entry in &activity.schedule {
                if !seen.insert(entry.day) {
                    return Err(DomainError::DuplicateScheduleDay { day: entry.day });
                }
            }

            // Rule: day numbers increase with date order
            for pair in activity.schedule.windows(2) {
                let (earlier, later) = (&pair[0], &pair[1]);
                if later.day <= earlier.day || later.date < earlier.date {
                    return Err(DomainError::ScheduleOutOfOrder { day: later.day });
                }
            }
        }
    }

    Ok(())
}
