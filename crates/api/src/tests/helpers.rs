// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use rollcall_domain::{
    Activity, ActivityKind, ApprovalStatus, AttendanceRecord, CheckInType, Participant,
    ParticipantStatus, Registration, TimeSlot,
};

pub fn utc(date: (i32, u32, u32), time: (u32, u32, u32)) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(date.0, date.1, date.2, time.0, time.1, time.2)
        .single()
        .unwrap()
}

pub fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

/// Single-day activity on 2026-03-02 with one active Morning slot
/// (08:00-11:30) in the UTC timezone.
pub fn single_day_activity() -> Activity {
    Activity {
        kind: ActivityKind::SingleDay,
        date: NaiveDate::from_ymd_opt(2026, 3, 2),
        start_date: None,
        end_date: None,
        time_slots: vec![TimeSlot::new("Buổi Sáng", hm(8, 0), hm(11, 30), true).unwrap()],
        schedule: vec![],
        timezone: String::from("UTC"),
        max_participants: None,
        registration_threshold: None,
    }
}

pub fn participant(user_id: &str, registration: Registration) -> Participant {
    Participant {
        user_id: String::from(user_id),
        name: String::from("Test Participant"),
        email: format!("{user_id}@campus.test"),
        role: String::from("member"),
        status: ParticipantStatus::Approved,
        joined_at: None,
        registration,
    }
}

pub fn record(
    label: &str,
    check_in_type: CheckInType,
    check_in_time: Option<DateTime<Utc>>,
    status: ApprovalStatus,
) -> AttendanceRecord {
    AttendanceRecord {
        id: None,
        time_slot: String::from(label),
        check_in_type,
        check_in_time,
        status,
        photo_url: None,
        location: None,
        verification_note: None,
        verified_by: None,
        late_reason: None,
        cancellation_reason: None,
    }
}
