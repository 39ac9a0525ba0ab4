// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Attendance status resolution for one table cell.
//!
//! A cell is one (participant, slot, check-in type, day) combination. The
//! resolver locates the matching raw record via the label matcher, then
//! classifies it with the time window evaluator. Timeliness and approval
//! are orthogonal axes: a late check-in can still be approved, and the
//! record's approval status is carried through verbatim.
//!
//! The wall clock enters exactly once: when no record exists, the cell
//! reports where "now" falls in the slot's window so the caller knows
//! whether check-in is even eligible yet.

use chrono::{DateTime, NaiveTime, Utc};
use rollcall_domain::{
    Activity, AttendanceRecord, CheckInType, SlotKey, SlotStatus, TimeSlot, TimeStatus,
    label_matches, slot_time_override, slot_window, timeliness,
};

/// Finds the record a (slot, type, day) query refers to.
///
/// Records of the wrong check-in type are skipped; among the rest, the
/// label matcher decides. When the "at most one record per slot and type"
/// invariant is violated upstream, the first record in list order wins —
/// a known ambiguity preserved from the original contract, not silently
/// tie-broken by recency.
#[must_use]
pub fn find_matching_record<'a>(
    records: &'a [AttendanceRecord],
    target_slot_name: &str,
    check_in_type: CheckInType,
    day: Option<u32>,
) -> Option<&'a AttendanceRecord> {
    records.iter().find(|record| {
        record.check_in_type == check_in_type
            && label_matches(&record.time_slot, target_slot_name, day)
    })
}

/// Returns the slot's effective times for a given day.
///
/// Multi-day schedule text may embed a per-slot range ("Buổi Sáng
/// (07:00-11:30)") that overrides the slot template for that day only.
#[must_use]
pub fn effective_slot_times(
    activity: &Activity,
    slot: &TimeSlot,
    day: Option<u32>,
) -> (NaiveTime, NaiveTime) {
    if let Some(number) = day
        && let Some(entry) = activity.schedule_day(number)
        && let Some(key) = SlotKey::detect(slot.name())
        && let Some(times) = slot_time_override(&entry.activities_text, key)
    {
        return times;
    }
    (slot.start_time(), slot.end_time())
}

/// Resolves the status of one attendance cell.
///
/// # Arguments
///
/// * `activity` - The activity definition
/// * `records` - The participant's raw attendance records
/// * `slot` - The slot being queried
/// * `check_in_type` - Start or end
/// * `day` - The schedule day number, for multi-day activities
/// * `now` - The current instant (used only when no record exists)
///
/// # Returns
///
/// The computed `SlotStatus`:
///
/// - No matching record: `has_checked_in = false`, and `time_status`
///   classifies `now` against the slot window on the reference date
///   (`Unknown` if that date cannot be resolved).
/// - Matching record with an unparseable check-in time, or an
///   unresolvable reference date: `has_checked_in = true`,
///   `time_status = Unknown`.
/// - Otherwise: on-time/late against the effective start or end time,
///   anchored to the check-in's own local calendar day.
///
/// Pure given its inputs; never panics for any combination of
/// well-typed-but-dirty data.
#[must_use]
pub fn resolve_slot_status(
    activity: &Activity,
    records: &[AttendanceRecord],
    slot: &TimeSlot,
    check_in_type: CheckInType,
    day: Option<u32>,
    now: DateTime<Utc>,
) -> SlotStatus {
    let tz = activity.declared_tz();
    let (start_time, end_time) = effective_slot_times(activity, slot, day);
    let reference_date = activity.reference_date(day);

    let Some(record) = find_matching_record(records, slot.name(), check_in_type, day) else {
        let time_status = reference_date.map_or(TimeStatus::Unknown, |date| {
            slot_window(start_time, end_time, date, now, tz)
        });
        return SlotStatus {
            attendance: None,
            approval: None,
            time_status,
            has_checked_in: false,
        };
    };

    let time_status = match (record.check_in_time, reference_date) {
        (Some(instant), Some(_)) => {
            let target = match check_in_type {
                CheckInType::Start => start_time,
                CheckInType::End => end_time,
            };
            timeliness(instant, target, tz)
        }
        _ => TimeStatus::Unknown,
    };

    SlotStatus {
        attendance: Some(record.clone()),
        approval: Some(record.status),
        time_status,
        has_checked_in: true,
    }
}
