// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Activity-wide rollup statistics.
//!
//! Rollups are computed, not stored: a pure function of the activity
//! snapshot, the roster, and the wall clock.
//!
//! The average is the mean of per-participant percentages — NOT the ratio
//! of summed numerators to summed denominators. The two disagree whenever
//! participants have different denominators, and the view displays the
//! former.

use crate::resolve::{effective_slot_times, find_matching_record, resolve_slot_status};
use crate::scope::{ParticipantAttendance, Scope, SessionRule, session_instances};
use crate::stats::compute_session_rate;
use chrono::{DateTime, Utc};
use rollcall_domain::{Activity, ApprovalStatus, CheckInType, TimeStatus, slot_window};
use serde::Serialize;

/// Metric (c): the activity-wide rollup numbers shown in the summary
/// banner and the exported report footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActivityRollups {
    /// Mean of per-participant either-approved session percentages,
    /// rounded half-up.
    pub average_percentage: u8,
    /// Participants whose both-approved session rate is exactly 100%.
    pub full_completion_count: usize,
    /// Approved check-ins classified late, over registered slot-instances.
    pub late_count: usize,
    /// Registered slot-instances whose window has started and whose
    /// check-ins are all missing or rejected. Pending is not absent.
    pub absent_count: usize,
}

/// Mean of integer percentages with half-up rounding; empty input yields 0.
fn mean_percentage(percentages: &[u8]) -> u8 {
    if percentages.is_empty() {
        return 0;
    }
    let sum: usize = percentages.iter().map(|value| usize::from(*value)).sum();
    let count = percentages.len();
    let rounded = (2 * sum + count) / (2 * count);
    u8::try_from(rounded).unwrap_or(100)
}

/// Computes the activity-wide rollups over a roster.
///
/// # Arguments
///
/// * `activity` - The activity definition
/// * `roster` - Participants paired with their raw records
/// * `now` - The current instant, used for window classification
///
/// # Returns
///
/// The four rollup numbers. An empty roster or an activity with no
/// sessions yields all zeros; nothing here divides by zero or panics.
#[must_use]
pub fn compute_activity_rollups(
    activity: &Activity,
    roster: &[ParticipantAttendance<'_>],
    now: DateTime<Utc>,
) -> ActivityRollups {
    let tz = activity.declared_tz();
    let instances = session_instances(activity);

    let mut percentages: Vec<u8> = Vec::with_capacity(roster.len());
    let mut full_completion_count: usize = 0;
    let mut late_count: usize = 0;
    let mut absent_count: usize = 0;

    for attendance in roster {
        let scope = Scope::Participant(&attendance.participant.user_id);
        let either = compute_session_rate(activity, roster, scope, SessionRule::EitherApproved);
        percentages.push(either.percentage);

        let both = compute_session_rate(activity, roster, scope, SessionRule::BothApproved);
        if both.total > 0 && both.percentage == 100 {
            full_completion_count += 1;
        }

        for instance in &instances {
            if !attendance.participant.registration.covers(
                activity.kind,
                instance.day,
                instance.slot.name(),
            ) {
                continue;
            }

            for check_in_type in [CheckInType::Start, CheckInType::End] {
                let status = resolve_slot_status(
                    activity,
                    attendance.records,
                    instance.slot,
                    check_in_type,
                    instance.day,
                    now,
                );
                if status.approval == Some(ApprovalStatus::Approved)
                    && status.time_status == TimeStatus::Late
                {
                    late_count += 1;
                }
            }

            let (start_time, end_time) = effective_slot_times(activity, instance.slot, instance.day);
            let window = slot_window(start_time, end_time, instance.date, now, tz);
            if matches!(window, TimeStatus::InProgress | TimeStatus::Passed)
                && is_absent(attendance, instance.slot.name(), instance.day)
            {
                absent_count += 1;
            }
        }
    }

    ActivityRollups {
        average_percentage: mean_percentage(&percentages),
        full_completion_count,
        late_count,
        absent_count,
    }
}

/// A slot-instance is absent when neither check-in type has a record in a
/// pending or approved state. A pending check-in keeps the instance out of
/// the absent count; a rejected one does not.
fn is_absent(attendance: &ParticipantAttendance<'_>, slot_name: &str, day: Option<u32>) -> bool {
    [CheckInType::Start, CheckInType::End]
        .into_iter()
        .all(|check_in_type| {
            find_matching_record(attendance.records, slot_name, check_in_type, day)
                .is_none_or(|record| record.status == ApprovalStatus::Rejected)
        })
}

#[cfg(test)]
mod tests {
    use super::mean_percentage;

    #[test]
    fn test_mean_percentage_empty() {
        assert_eq!(mean_percentage(&[]), 0);
    }

    #[test]
    fn test_mean_percentage_half_up() {
        assert_eq!(mean_percentage(&[50, 51]), 51); // 50.5 rounds up
        assert_eq!(mean_percentage(&[33, 33, 34]), 33);
        assert_eq!(mean_percentage(&[100, 0]), 50);
    }

    #[test]
    fn test_mean_differs_from_pooled_ratio() {
        // One participant at 100% (1/1) and one at 25% (1/4): the pooled
        // ratio would be 2/5 = 40%, the displayed mean is 63%.
        assert_eq!(mean_percentage(&[100, 25]), 63);
    }
}
