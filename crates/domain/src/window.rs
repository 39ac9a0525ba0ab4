// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Time window evaluation for attendance check-ins.
//!
//! Two distinct questions are answered here:
//!
//! - Where does "now" fall relative to a slot's window on a given calendar
//!   day (not started / in progress / passed)?
//! - Was a recorded check-in on time or late against a target time-of-day?
//!
//! ## Invariants
//!
//! - All wall-clock times are interpreted in the activity's declared
//!   timezone and compared as instants, never component-wise.
//! - Timeliness anchors the target to the check-in's **own** local calendar
//!   day, not the nominal activity date. A check-in logged at 23:58 for a
//!   slot that nominally ended at 21:00 is still measured against a target
//!   built on the day it actually happened; anchoring to the activity date
//!   would corrupt the window whenever the check-in slips past midnight.
//! - Unresolvable local times degrade to `TimeStatus::Unknown`.

use crate::types::TimeStatus;
use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Tolerance around the target time within which a check-in is on time.
pub const ON_TIME_TOLERANCE_MINUTES: i64 = 15;

/// Builds the UTC instant for a wall-clock time on a date in a timezone.
///
/// Ambiguous local times (DST fold) resolve to the earlier instant;
/// non-existent local times (DST gap) yield `None`.
#[must_use]
pub fn local_instant(tz: Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Utc>> {
    tz.from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Classifies `now` against a slot's window on a reference date.
///
/// # Arguments
///
/// * `slot_start` - Nominal slot start time-of-day
/// * `slot_end` - Nominal slot end time-of-day
/// * `reference_date` - The calendar day the slot occurs on
/// * `now` - The current instant
/// * `tz` - The activity's declared timezone
///
/// # Returns
///
/// `NotStarted`, `InProgress` (boundaries inclusive), or `Passed`.
/// `Unknown` if either boundary cannot be resolved to an instant.
#[must_use]
pub fn slot_window(
    slot_start: NaiveTime,
    slot_end: NaiveTime,
    reference_date: NaiveDate,
    now: DateTime<Utc>,
    tz: Tz,
) -> TimeStatus {
    let (Some(start), Some(end)) = (
        local_instant(tz, reference_date, slot_start),
        local_instant(tz, reference_date, slot_end),
    ) else {
        return TimeStatus::Unknown;
    };

    if now < start {
        TimeStatus::NotStarted
    } else if now <= end {
        TimeStatus::InProgress
    } else {
        TimeStatus::Passed
    }
}

/// Classifies a check-in as on time or late against a target time-of-day.
///
/// The target instant is rebuilt on the check-in's own local calendar day
/// in the declared timezone, then compared as an instant. The on-time
/// window is the target ± [`ON_TIME_TOLERANCE_MINUTES`], both ends
/// inclusive.
///
/// # Arguments
///
/// * `check_in` - The recorded check-in instant
/// * `target` - The target time-of-day (slot start or end)
/// * `tz` - The activity's declared timezone
///
/// # Returns
///
/// `OnTime` or `Late`; `Unknown` when the target cannot be resolved on
/// the check-in's day.
#[must_use]
pub fn timeliness(check_in: DateTime<Utc>, target: NaiveTime, tz: Tz) -> TimeStatus {
    let check_in_day: NaiveDate = check_in.with_timezone(&tz).date_naive();
    let Some(target_instant) = local_instant(tz, check_in_day, target) else {
        return TimeStatus::Unknown;
    };

    let offset_seconds: i64 = (check_in - target_instant).num_seconds().abs();
    if offset_seconds <= ON_TIME_TOLERANCE_MINUTES * 60 {
        TimeStatus::OnTime
    } else {
        TimeStatus::Late
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const VN: Tz = chrono_tz::Asia::Ho_Chi_Minh;

    fn vn_instant(date: (i32, u32, u32), time: (u32, u32, u32)) -> DateTime<Utc> {
        let naive = NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_hms_opt(time.0, time.1, time.2)
            .unwrap();
        VN.from_local_datetime(&naive)
            .single()
            .unwrap()
            .with_timezone(&Utc)
    }

    fn eight_am() -> NaiveTime {
        NaiveTime::from_hms_opt(8, 0, 0).unwrap()
    }

    #[test]
    fn test_timeliness_lower_boundary_inclusive() {
        let check_in = vn_instant((2026, 3, 2), (7, 45, 0));
        assert_eq!(timeliness(check_in, eight_am(), VN), TimeStatus::OnTime);
    }

    #[test]
    fn test_timeliness_just_before_lower_boundary() {
        let check_in = vn_instant((2026, 3, 2), (7, 44, 59));
        assert_eq!(timeliness(check_in, eight_am(), VN), TimeStatus::Late);
    }

    #[test]
    fn test_timeliness_upper_boundary_inclusive() {
        let check_in = vn_instant((2026, 3, 2), (8, 15, 0));
        assert_eq!(timeliness(check_in, eight_am(), VN), TimeStatus::OnTime);
    }

    #[test]
    fn test_timeliness_just_after_upper_boundary() {
        let check_in = vn_instant((2026, 3, 2), (8, 15, 1));
        assert_eq!(timeliness(check_in, eight_am(), VN), TimeStatus::Late);
    }

    #[test]
    fn test_timeliness_anchors_to_check_in_day() {
        // A 23:58 check-in for a slot nominally ending 21:00 is measured
        // against 21:00 on the check-in's own day: 2h58m late, not compared
        // against some other calendar day.
        let check_in = vn_instant((2026, 3, 2), (23, 58, 0));
        let target = NaiveTime::from_hms_opt(21, 0, 0).unwrap();
        assert_eq!(timeliness(check_in, target, VN), TimeStatus::Late);
    }

    #[test]
    fn test_timeliness_utc_instant_crossing_local_midnight() {
        // 17:10 UTC on March 1 is 00:10 on March 2 in Ho Chi Minh City.
        // The target must be built on March 2 local time.
        let check_in = Utc
            .with_ymd_and_hms(2026, 3, 1, 17, 10, 0)
            .single()
            .unwrap();
        let target = NaiveTime::from_hms_opt(0, 15, 0).unwrap();
        assert_eq!(timeliness(check_in, target, VN), TimeStatus::OnTime);
    }

    #[test]
    fn test_window_not_started() {
        let now = vn_instant((2026, 3, 2), (6, 0, 0));
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let end = NaiveTime::from_hms_opt(11, 30, 0).unwrap();
        assert_eq!(
            slot_window(eight_am(), end, date, now, VN),
            TimeStatus::NotStarted
        );
    }

    #[test]
    fn test_window_in_progress_at_boundaries() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let end = NaiveTime::from_hms_opt(11, 30, 0).unwrap();

        let at_start = vn_instant((2026, 3, 2), (8, 0, 0));
        assert_eq!(
            slot_window(eight_am(), end, date, at_start, VN),
            TimeStatus::InProgress
        );

        let at_end = vn_instant((2026, 3, 2), (11, 30, 0));
        assert_eq!(
            slot_window(eight_am(), end, date, at_end, VN),
            TimeStatus::InProgress
        );
    }

    #[test]
    fn test_window_passed() {
        let now = vn_instant((2026, 3, 2), (11, 30, 1));
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let end = NaiveTime::from_hms_opt(11, 30, 0).unwrap();
        assert_eq!(
            slot_window(eight_am(), end, date, now, VN),
            TimeStatus::Passed
        );
    }

    #[test]
    fn test_window_on_other_calendar_day() {
        // "Now" is the evening before the reference date.
        let now = vn_instant((2026, 3, 1), (20, 0, 0));
        let date = NaiveDate::from_ymd_opt(2026, 3, 2).unwrap();
        let end = NaiveTime::from_hms_opt(11, 30, 0).unwrap();
        assert_eq!(
            slot_window(eight_am(), end, date, now, VN),
            TimeStatus::NotStarted
        );
    }
}
