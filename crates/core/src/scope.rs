// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use rollcall_domain::{Activity, ActivityKind, AttendanceRecord, Participant, TimeSlot};

/// A participant paired with their raw attendance records.
///
/// The caller fetches both snapshots from the persistence collaborator and
/// hands them over read-only; the engine never re-fetches.
#[derive(Debug, Clone, Copy)]
pub struct ParticipantAttendance<'a> {
    /// The participant.
    pub participant: &'a Participant,
    /// All of this participant's raw check-in records for the activity.
    pub records: &'a [AttendanceRecord],
}

impl<'a> ParticipantAttendance<'a> {
    /// Creates a new `ParticipantAttendance`.
    #[must_use]
    pub const fn new(participant: &'a Participant, records: &'a [AttendanceRecord]) -> Self {
        Self {
            participant,
            records,
        }
    }
}

/// The portion of the (participants × sessions) cross-product a metric
/// aggregates over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope<'a> {
    /// One participant across every session.
    Participant(&'a str),
    /// Every participant on one schedule day.
    Day(u32),
    /// The whole activity.
    Activity,
}

impl Scope<'_> {
    /// Whether a participant belongs to this scope.
    #[must_use]
    pub fn includes_participant(&self, user_id: &str) -> bool {
        match self {
            Self::Participant(scoped) => *scoped == user_id,
            Self::Day(_) | Self::Activity => true,
        }
    }

    /// Whether a session instance belongs to this scope.
    #[must_use]
    pub const fn includes_day(&self, day: Option<u32>) -> bool {
        match self {
            Self::Day(scoped) => matches!(day, Some(number) if number == *scoped),
            Self::Participant(_) | Self::Activity => true,
        }
    }
}

/// Whether the check-in rate denominator is gated by registration.
///
/// The two call sites in the attendance view differ on this: the per-cell
/// display counts only registered slot-instances, while the unconditional
/// variant counts every active slot-instance. Both are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopePolicy {
    /// Only slot-instances the participant registered for.
    RegisteredOnly,
    /// Every active slot-instance, regardless of registration.
    All,
}

/// What counts as a completed session.
///
/// Both definitions are displayed in the same view and must stay distinct:
/// the completion table treats partial presence as attended, while the
/// "fully completed" rollup requires both check-ins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionRule {
    /// Complete when the start or the end check-in is approved.
    EitherApproved,
    /// Complete only when both check-ins are approved.
    BothApproved,
}

/// One slot occurrence on one concrete day — the unit of completion.
#[derive(Debug, Clone, Copy)]
pub struct SessionInstance<'a> {
    /// The schedule day number; `None` for single-day activities.
    pub day: Option<u32>,
    /// The calendar date the session occurs on.
    pub date: NaiveDate,
    /// The slot definition.
    pub slot: &'a TimeSlot,
}

/// Enumerates every session instance of an activity, in schedule order.
///
/// Single-day activities yield one instance per active slot (no day
/// number); multi-day activities yield (scheduled days × active slots).
/// A single-day activity with no date yields nothing — there is no
/// calendar day to anchor a session to.
#[must_use]
pub fn session_instances(activity: &Activity) -> Vec<SessionInstance<'_>> {
    match activity.kind {
        ActivityKind::SingleDay => activity.date.map_or_else(Vec::new, |date| {
            activity
                .active_slots()
                .map(|slot| SessionInstance {
                    day: None,
                    date,
                    slot,
                })
                .collect()
        }),
        ActivityKind::MultipleDays => activity
            .schedule
            .iter()
            .flat_map(|entry| {
                activity.active_slots().map(|slot| SessionInstance {
                    day: Some(entry.day),
                    date: entry.date,
                    slot,
                })
            })
            .collect(),
    }
}
