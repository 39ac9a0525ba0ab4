// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Activity, ActivityKind, DomainError, ScheduleDay, validate_activity};
use chrono::NaiveDate;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

fn multi_day(schedule: Vec<ScheduleDay>) -> Activity {
    Activity {
        kind: ActivityKind::MultipleDays,
        date: None,
        start_date: schedule.first().map(|entry| entry.date),
        end_date: schedule.last().map(|entry| entry.date),
        time_slots: vec![],
        schedule,
        timezone: String::from("Asia/Ho_Chi_Minh"),
        max_participants: None,
        registration_threshold: None,
    }
}

#[test]
fn test_valid_multi_day_schedule() {
    let activity = multi_day(vec![
        ScheduleDay::new(1, date(2), String::new()),
        ScheduleDay::new(2, date(3), String::new()),
        ScheduleDay::new(3, date(4), String::new()),
    ]);
    assert!(validate_activity(&activity).is_ok());
}

#[test]
fn test_duplicate_day_number_rejected() {
    let activity = multi_day(vec![
        ScheduleDay::new(1, date(2), String::new()),
        ScheduleDay::new(1, date(3), String::new()),
    ]);
    assert_eq!(
        validate_activity(&activity),
        Err(DomainError::DuplicateScheduleDay { day: 1 })
    );
}

#[test]
fn test_day_numbers_must_increase_with_dates() {
    let activity = multi_day(vec![
        ScheduleDay::new(2, date(2), String::new()),
        ScheduleDay::new(1, date(3), String::new()),
    ]);
    assert_eq!(
        validate_activity(&activity),
        Err(DomainError::ScheduleOutOfOrder { day: 1 })
    );
}

#[test]
fn test_dates_must_not_regress() {
    let activity = multi_day(vec![
        ScheduleDay::new(1, date(3), String::new()),
        ScheduleDay::new(2, date(2), String::new()),
    ]);
    assert_eq!(
        validate_activity(&activity),
        Err(DomainError::ScheduleOutOfOrder { day: 2 })
    );
}

#[test]
fn test_empty_multi_day_schedule_rejected() {
    let activity = multi_day(vec![]);
    assert!(matches!(
        validate_activity(&activity),
        Err(DomainError::InvalidSchedule { .. })
    ));
}

#[test]
fn test_single_day_requires_date() {
    let activity = Activity {
        kind: ActivityKind::SingleDay,
        date: None,
        start_date: None,
        end_date: None,
        time_slots: vec![],
        schedule: vec![],
        timezone: String::from("Asia/Ho_Chi_Minh"),
        max_participants: None,
        registration_threshold: None,
    };
    assert_eq!(
        validate_activity(&activity),
        Err(DomainError::MissingActivityDate)
    );
}

#[test]
fn test_invalid_timezone_rejected() {
    let mut activity = multi_day(vec![ScheduleDay::new(1, date(2), String::new())]);
    activity.timezone = String::from("Saigon Standard Time");
    assert_eq!(
        validate_activity(&activity),
        Err(DomainError::InvalidTimezone(String::from(
            "Saigon Standard Time"
        )))
    );
}
