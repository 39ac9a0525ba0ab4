// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Snapshot DTOs for the document-store JSON shapes.
//!
//! Field names mirror the stored documents (`camelCase`). Conversion into
//! domain types happens here and only here: structural violations are
//! rejected with an [`ApiError`], while semantically dirty values that the
//! reconciliation engine can tolerate (unparseable timestamps, unknown
//! registration slot keys) degrade with a `tracing::warn!` instead of
//! failing the whole snapshot.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use rollcall_domain::{
    Activity, ActivityKind, ApprovalStatus, AttendanceRecord, CheckInType, DEFAULT_TIMEZONE,
    DaySlot, DomainError, GeoPoint, Participant, ParticipantStatus, Registration, ScheduleDay,
    SlotKey, TimeSlot, validate_activity,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, translate_domain_error};

/// One configured time slot, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlotSnapshot {
    /// The free-text slot name (e.g. "Buổi Sáng").
    pub name: String,
    /// Start time of day, "HH:MM" or "HH:MM:SS".
    pub start_time: String,
    /// End time of day, "HH:MM" or "HH:MM:SS".
    pub end_time: String,
    /// Whether the slot participates in attendance. Missing means active.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

const fn default_active() -> bool {
    true
}

/// One numbered day of a multi-day schedule, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDaySnapshot {
    /// The 1-based day number.
    pub day: u32,
    /// The calendar date, "YYYY-MM-DD".
    pub date: String,
    /// Freeform description; may embed per-slot time overrides.
    #[serde(default)]
    pub activities_text: String,
}

/// The activity document, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnapshot {
    /// "single_day" or "multiple_days".
    pub kind: String,
    /// Single-day activities: the calendar date, "YYYY-MM-DD".
    #[serde(default)]
    pub date: Option<String>,
    /// Multi-day activities: first day, "YYYY-MM-DD".
    #[serde(default)]
    pub start_date: Option<String>,
    /// Multi-day activities: last day, "YYYY-MM-DD".
    #[serde(default)]
    pub end_date: Option<String>,
    /// The configured slot templates.
    #[serde(default)]
    pub time_slots: Vec<TimeSlotSnapshot>,
    /// Multi-day activities: the per-day schedule.
    #[serde(default)]
    pub schedule: Vec<ScheduleDaySnapshot>,
    /// Declared IANA timezone; missing falls back to the campus default.
    #[serde(default)]
    pub timezone: Option<String>,
    /// Optional participant cap.
    #[serde(default)]
    pub max_participants: Option<u32>,
    /// Optional minimum registration count.
    #[serde(default)]
    pub registration_threshold: Option<u32>,
}

/// One registered (day, slot) opt-in entry, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredDaySlotSnapshot {
    /// The 1-based day number.
    pub day: u32,
    /// The slot key, "morning", "afternoon", or "evening".
    pub slot: String,
}

/// One participant document, as stored.
///
/// The `user` field is duck-typed in historical data: a raw id string, a
/// numeric id, or an embedded object carrying `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantSnapshot {
    /// The user reference in any of its historical shapes.
    pub user: Value,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email.
    #[serde(default)]
    pub email: String,
    /// Role within the activity.
    #[serde(default)]
    pub role: String,
    /// Membership approval status.
    pub status: String,
    /// Join timestamp, RFC 3339.
    #[serde(default)]
    pub joined_at: Option<String>,
    /// Day/slot opt-ins; missing or empty means registered for everything.
    #[serde(default)]
    pub registered_day_slots: Option<Vec<RegisteredDaySlotSnapshot>>,
}

/// A recorded check-in location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPointSnapshot {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// One attendance record document, as stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceSnapshot {
    /// Document id in any of its historical shapes.
    #[serde(default, rename = "_id")]
    pub id: Value,
    /// The free-text slot label this check-in was filed under.
    pub time_slot: String,
    /// "start" or "end".
    pub check_in_type: String,
    /// Check-in timestamp, RFC 3339.
    #[serde(default)]
    pub check_in_time: Option<String>,
    /// Verification status, "pending", "approved", or "rejected".
    pub status: String,
    /// Evidence photo URL.
    #[serde(default)]
    pub photo_url: Option<String>,
    /// Recorded location.
    #[serde(default)]
    pub location: Option<GeoPointSnapshot>,
    /// Officer note attached at verification.
    #[serde(default)]
    pub verification_note: Option<String>,
    /// Officer id that verified the record.
    #[serde(default)]
    pub verified_by: Option<String>,
    /// Participant-supplied reason for a late arrival.
    #[serde(default)]
    pub late_reason: Option<String>,
    /// Reason attached when a check-in was cancelled.
    #[serde(default)]
    pub cancellation_reason: Option<String>,
}

/// Normalizes a duck-typed user reference to a canonical id string.
///
/// Historical documents store the reference as a raw string, a number, or
/// an embedded object carrying `_id` (itself possibly an `{"$oid": ...}`
/// wrapper). Returns `None` when no id can be recovered.
#[must_use]
pub fn normalize_user_id(raw: &Value) -> Option<String> {
    match raw {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map
            .get("_id")
            .or_else(|| map.get("$oid"))
            .and_then(normalize_user_id),
        _ => None,
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, DomainError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw.trim(), "%H:%M:%S"))
        .map_err(|e| DomainError::TimeParseError {
            time_string: raw.to_string(),
            error: e.to_string(),
        })
}

fn parse_date(raw: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|e| DomainError::DateParseError {
        date_string: raw.to_string(),
        error: e.to_string(),
    })
}

/// Parses an RFC 3339 timestamp, degrading to `None` on dirty data.
fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(instant) => Some(instant.with_timezone(&Utc)),
        Err(e) => {
            tracing::warn!(timestamp = raw, error = %e, "unparseable timestamp in snapshot");
            None
        }
    }
}

impl ActivitySnapshot {
    /// Decodes an activity snapshot from its stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the JSON does not match the
    /// snapshot shape.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        serde_json::from_str(json).map_err(|e| ApiError::InvalidInput {
            field: String::from("activity"),
            message: format!("Failed to decode activity snapshot: {e}"),
        })
    }

    /// Converts this snapshot into a validated domain activity.
    ///
    /// # Errors
    ///
    /// Returns an error if the kind, dates, or slot times cannot be
    /// parsed, or if the result fails structural validation (see
    /// [`rollcall_domain::validate_activity`]).
    pub fn into_activity(self) -> Result<Activity, ApiError> {
        let kind: ActivityKind =
            ActivityKind::from_str(&self.kind).map_err(translate_domain_error)?;

        let date: Option<NaiveDate> = self
            .date
            .as_deref()
            .map(parse_date)
            .transpose()
            .map_err(translate_domain_error)?;
        let start_date: Option<NaiveDate> = self
            .start_date
            .as_deref()
            .map(parse_date)
            .transpose()
            .map_err(translate_domain_error)?;
        let end_date: Option<NaiveDate> = self
            .end_date
            .as_deref()
            .map(parse_date)
            .transpose()
            .map_err(translate_domain_error)?;

        let mut time_slots: Vec<TimeSlot> = Vec::with_capacity(self.time_slots.len());
        for slot in self.time_slots {
            let start_time: NaiveTime =
                parse_time(&slot.start_time).map_err(translate_domain_error)?;
            let end_time: NaiveTime = parse_time(&slot.end_time).map_err(translate_domain_error)?;
            let parsed: TimeSlot = TimeSlot::new(&slot.name, start_time, end_time, slot.is_active)
                .map_err(translate_domain_error)?;
            time_slots.push(parsed);
        }

        let mut schedule: Vec<ScheduleDay> = Vec::with_capacity(self.schedule.len());
        for day in self.schedule {
            let parsed_date: NaiveDate = parse_date(&day.date).map_err(translate_domain_error)?;
            schedule.push(ScheduleDay::new(day.day, parsed_date, day.activities_text));
        }

        let activity: Activity = Activity {
            kind,
            date,
            start_date,
            end_date,
            time_slots,
            schedule,
            timezone: self
                .timezone
                .unwrap_or_else(|| String::from(DEFAULT_TIMEZONE)),
            max_participants: self.max_participants,
            registration_threshold: self.registration_threshold,
        };

        validate_activity(&activity).map_err(translate_domain_error)?;
        Ok(activity)
    }
}

impl ParticipantSnapshot {
    /// Decodes a participant snapshot from its stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the JSON does not match the
    /// snapshot shape.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        serde_json::from_str(json).map_err(|e| ApiError::InvalidInput {
            field: String::from("participant"),
            message: format!("Failed to decode participant snapshot: {e}"),
        })
    }

    /// Converts this snapshot into a domain participant.
    ///
    /// Registration entries whose slot key cannot be resolved are dropped
    /// with a warning; a missing or empty opt-in list becomes
    /// [`Registration::Unrestricted`] (the legacy default). An unparseable
    /// join timestamp degrades to `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if no user id can be recovered from the duck-typed
    /// `user` field, or if the membership status is unrecognized.
    pub fn into_participant(self) -> Result<Participant, ApiError> {
        let user_id: String =
            normalize_user_id(&self.user).ok_or_else(|| ApiError::InvalidInput {
                field: String::from("user"),
                message: format!("No user id recoverable from reference {}", self.user),
            })?;

        let status: ParticipantStatus =
            ParticipantStatus::from_str(&self.status).map_err(translate_domain_error)?;

        let joined_at: Option<DateTime<Utc>> =
            self.joined_at.as_deref().and_then(parse_instant);

        let registration: Registration = match self.registered_day_slots {
            None => Registration::Unrestricted,
            Some(entries) if entries.is_empty() => Registration::Unrestricted,
            Some(entries) => {
                let mut day_slots: Vec<DaySlot> = Vec::with_capacity(entries.len());
                for entry in entries {
                    let key: Option<SlotKey> = SlotKey::from_str(&entry.slot)
                        .ok()
                        .or_else(|| SlotKey::detect(&entry.slot));
                    if let Some(slot) = key {
                        day_slots.push(DaySlot::new(entry.day, slot));
                    } else {
                        tracing::warn!(
                            user_id = %user_id,
                            slot = %entry.slot,
                            day = entry.day,
                            "dropping registration entry with unresolvable slot key"
                        );
                    }
                }
                Registration::Restricted(day_slots)
            }
        };

        Ok(Participant {
            user_id,
            name: self.name,
            email: self.email,
            role: self.role,
            status,
            joined_at,
            registration,
        })
    }
}

impl AttendanceSnapshot {
    /// Decodes an attendance snapshot from its stored JSON form.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidInput` if the JSON does not match the
    /// snapshot shape.
    pub fn from_json(json: &str) -> Result<Self, ApiError> {
        serde_json::from_str(json).map_err(|e| ApiError::InvalidInput {
            field: String::from("attendance"),
            message: format!("Failed to decode attendance snapshot: {e}"),
        })
    }

    /// Converts this snapshot into a domain attendance record.
    ///
    /// An unparseable check-in timestamp degrades to `None` with a
    /// warning; the record still enters reconciliation and resolves with
    /// an unknown timeliness.
    ///
    /// # Errors
    ///
    /// Returns an error if the check-in type or approval status string is
    /// unrecognized.
    pub fn into_record(self) -> Result<AttendanceRecord, ApiError> {
        let check_in_type: CheckInType =
            CheckInType::from_str(&self.check_in_type).map_err(translate_domain_error)?;
        let status: ApprovalStatus =
            ApprovalStatus::from_str(&self.status).map_err(translate_domain_error)?;

        let check_in_time: Option<DateTime<Utc>> =
            self.check_in_time.as_deref().and_then(parse_instant);

        Ok(AttendanceRecord {
            id: normalize_user_id(&self.id),
            time_slot: self.time_slot,
            check_in_type,
            check_in_time,
            status,
            photo_url: self.photo_url,
            location: self.location.map(|point| GeoPoint {
                lat: point.lat,
                lng: point.lng,
            }),
            verification_note: self.verification_note,
            verified_by: self.verified_by,
            late_reason: self.late_reason,
            cancellation_reason: self.cancellation_reason,
        })
    }
}

/// Filters a converted roster down to approved members.
///
/// Pending, rejected, and removed participants never enter the
/// reconciliation denominators.
#[must_use]
pub fn approved_roster(participants: &[Participant]) -> Vec<&Participant> {
    participants
        .iter()
        .filter(|participant| participant.status == ParticipantStatus::Approved)
        .collect()
}
