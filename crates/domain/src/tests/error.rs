// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::DomainError;

#[test]
fn test_display_invalid_time_slot() {
    let error = DomainError::InvalidTimeSlot {
        name: String::from("Buổi Sáng"),
        reason: String::from("End time 07:00:00 must be after start time 08:00:00"),
    };
    let message = error.to_string();
    assert!(message.contains("Buổi Sáng"));
    assert!(message.contains("must be after"));
}

#[test]
fn test_display_invalid_timezone() {
    let error = DomainError::InvalidTimezone(String::from("Moon/Crater"));
    assert_eq!(error.to_string(), "Invalid timezone: Moon/Crater");
}

#[test]
fn test_display_schedule_errors() {
    assert_eq!(
        DomainError::DuplicateScheduleDay { day: 3 }.to_string(),
        "Schedule day 3 appears more than once"
    );
    assert!(
        DomainError::ScheduleOutOfOrder { day: 2 }
            .to_string()
            .contains("day 2")
    );
}

#[test]
fn test_display_parse_errors() {
    let error = DomainError::DateParseError {
        date_string: String::from("02/03/2026"),
        error: String::from("input contains invalid characters"),
    };
    assert!(error.to_string().contains("02/03/2026"));

    let error = DomainError::TimeParseError {
        time_string: String::from("7h30"),
        error: String::from("input contains invalid characters"),
    };
    assert!(error.to_string().contains("7h30"));
}

#[test]
fn test_error_trait_object() {
    let error: Box<dyn std::error::Error> = Box::new(DomainError::MissingActivityDate);
    assert!(!error.to_string().is_empty());
}
