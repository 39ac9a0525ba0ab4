// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rate aggregation over the attendance cross-product.
//!
//! Two independent reductions run over the same (participants × sessions ×
//! check-in types) data, each with its own denominator:
//!
//! - the **check-in rate** counts individual approved check-ins out of the
//!   two possible per slot-instance;
//! - the **session rate** counts completed slot-instances out of the
//!   registered ones.
//!
//! They must not be derived from one another; the denominators differ and
//! the displayed numbers diverge. Percentages are computed here and only
//! here so rounding stays consistent.

use crate::resolve::find_matching_record;
use crate::scope::{
    ParticipantAttendance, Scope, ScopePolicy, SessionInstance, SessionRule, session_instances,
};
use rollcall_domain::{Activity, ApprovalStatus, CheckInType};
use serde::Serialize;

/// Metric (a): approved check-ins out of all possible check-ins in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CheckInRate {
    /// Rounded percentage, 0-100.
    pub percentage: u8,
    /// Approved start/end check-ins in scope.
    pub approved: usize,
    /// Total check-in opportunities in scope (2 per slot-instance).
    pub total: usize,
}

/// Metric (b): completed sessions out of registered sessions in scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionRate {
    /// Rounded percentage, 0-100.
    pub percentage: u8,
    /// Completed slot-instances in scope.
    pub completed: usize,
    /// Registered slot-instances in scope.
    pub total: usize,
}

/// Integer percentage with half-up rounding; a zero denominator yields 0.
#[must_use]
pub(crate) fn percentage(numerator: usize, denominator: usize) -> u8 {
    if denominator == 0 {
        return 0;
    }
    let rounded = (200 * numerator + denominator) / (2 * denominator);
    u8::try_from(rounded).unwrap_or(100)
}

/// Whether the session instance has an approved check-in of this type.
fn has_approved(
    attendance: &ParticipantAttendance<'_>,
    instance: &SessionInstance<'_>,
    check_in_type: CheckInType,
) -> bool {
    find_matching_record(
        attendance.records,
        instance.slot.name(),
        check_in_type,
        instance.day,
    )
    .is_some_and(|record| record.status == ApprovalStatus::Approved)
}

/// Computes the check-in approval rate for a scope.
///
/// The denominator is two check-ins per applicable slot-instance in scope;
/// "applicable" is gated by the registration resolver under
/// `ScopePolicy::RegisteredOnly` and unconditional under
/// `ScopePolicy::All`. The numerator counts start/end check-ins whose
/// record is approved.
///
/// # Arguments
///
/// * `activity` - The activity definition
/// * `roster` - Participants paired with their raw records
/// * `scope` - The portion of the cross-product to aggregate
/// * `policy` - Whether unregistered slot-instances enter the denominator
#[must_use]
pub fn compute_check_in_rate(
    activity: &Activity,
    roster: &[ParticipantAttendance<'_>],
    scope: Scope<'_>,
    policy: ScopePolicy,
) -> CheckInRate {
    let instances = session_instances(activity);
    let mut approved: usize = 0;
    let mut total: usize = 0;

    for attendance in roster {
        if !scope.includes_participant(&attendance.participant.user_id) {
            continue;
        }
        for instance in &instances {
            if !scope.includes_day(instance.day) {
                continue;
            }
            if policy == ScopePolicy::RegisteredOnly
                && !attendance.participant.registration.covers(
                    activity.kind,
                    instance.day,
                    instance.slot.name(),
                )
            {
                continue;
            }

            total += 2;
            for check_in_type in [CheckInType::Start, CheckInType::End] {
                if has_approved(attendance, instance, check_in_type) {
                    approved += 1;
                }
            }
        }
    }

    CheckInRate {
        percentage: percentage(approved, total),
        approved,
        total,
    }
}

/// Whether a slot-instance counts as completed under a session rule.
#[must_use]
pub(crate) fn session_completed(
    attendance: &ParticipantAttendance<'_>,
    instance: &SessionInstance<'_>,
    rule: SessionRule,
) -> bool {
    let start_ok = has_approved(attendance, instance, CheckInType::Start);
    let end_ok = has_approved(attendance, instance, CheckInType::End);
    match rule {
        SessionRule::EitherApproved => start_ok || end_ok,
        SessionRule::BothApproved => start_ok && end_ok,
    }
}

/// Computes the session completion rate for a scope.
///
/// The denominator is the registered slot-instances in scope; unregistered
/// instances are excluded entirely. The numerator counts instances
/// completed under the given rule.
///
/// # Arguments
///
/// * `activity` - The activity definition
/// * `roster` - Participants paired with their raw records
/// * `scope` - The portion of the cross-product to aggregate
/// * `rule` - Either-approved or both-approved completion
#[must_use]
pub fn compute_session_rate(
    activity: &Activity,
    roster: &[ParticipantAttendance<'_>],
    scope: Scope<'_>,
    rule: SessionRule,
) -> SessionRate {
    let instances = session_instances(activity);
    let mut completed: usize = 0;
    let mut total: usize = 0;

    for attendance in roster {
        if !scope.includes_participant(&attendance.participant.user_id) {
            continue;
        }
        for instance in &instances {
            if !scope.includes_day(instance.day) {
                continue;
            }
            if !attendance.participant.registration.covers(
                activity.kind,
                instance.day,
                instance.slot.name(),
            ) {
                continue;
            }

            total += 1;
            if session_completed(attendance, instance, rule) {
                completed += 1;
            }
        }
    }

    SessionRate {
        percentage: percentage(completed, total),
        completed,
        total,
    }
}

#[cfg(test)]
mod tests {
    use super::percentage;

    #[test]
    fn test_percentage_zero_denominator() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 0), 0);
    }

    #[test]
    fn test_percentage_half_up_rounding() {
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5 rounds up
        assert_eq!(percentage(1, 200), 1); // 0.5 rounds up
    }

    #[test]
    fn test_percentage_extremes() {
        assert_eq!(percentage(0, 7), 0);
        assert_eq!(percentage(7, 7), 100);
    }
}
