// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::registration::Registration;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The default declared timezone for activities that do not carry one.
///
/// The source deployment runs in Vietnam; historical snapshots predate the
/// timezone field and must keep resolving against local wall-clock time.
pub const DEFAULT_TIMEZONE: &str = "Asia/Ho_Chi_Minh";

/// Distinguishes single-day activities from multi-day ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ActivityKind {
    /// One calendar date with a set of time slots.
    #[default]
    SingleDay,
    /// An ordered schedule of numbered days, each with its own date.
    MultipleDays,
}

impl FromStr for ActivityKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "single_day" => Ok(Self::SingleDay),
            "multiple_days" => Ok(Self::MultipleDays),
            _ => Err(DomainError::InvalidActivityKind(s.to_string())),
        }
    }
}

impl ActivityKind {
    /// Converts this kind to its snapshot string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::SingleDay => "single_day",
            Self::MultipleDays => "multiple_days",
        }
    }
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The canonical three-way slot vocabulary.
///
/// Slot identity in attendance records is free text, not a foreign key;
/// this enum is the canonical token that the label matcher and the
/// registration resolver reduce those strings to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotKey {
    /// The morning slot ("Buổi Sáng").
    Morning,
    /// The afternoon slot ("Buổi Chiều").
    Afternoon,
    /// The evening slot ("Buổi Tối").
    Evening,
}

impl FromStr for SlotKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            _ => Err(DomainError::InvalidSlotKey(s.to_string())),
        }
    }
}

impl SlotKey {
    /// Converts this key to its registration string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
        }
    }

    /// Returns the display label used by slot definitions in the source locale.
    #[must_use]
    pub const fn display_label(&self) -> &'static str {
        match self {
            Self::Morning => "Buổi Sáng",
            Self::Afternoon => "Buổi Chiều",
            Self::Evening => "Buổi Tối",
        }
    }

    /// Maps a configured slot name to its key via exact vocabulary lookup.
    ///
    /// Accepts the locale display labels and the registration keys,
    /// case-insensitively, after trimming. Returns `None` for anything else;
    /// callers that want looser matching fall back to [`Self::detect`].
    #[must_use]
    pub fn from_exact_name(name: &str) -> Option<Self> {
        let trimmed = name.trim().to_lowercase();
        for key in [Self::Morning, Self::Afternoon, Self::Evening] {
            if trimmed == key.as_str() || trimmed == key.display_label().to_lowercase() {
                return Some(key);
            }
        }
        None
    }

    /// Detects a slot key inside arbitrary free text.
    ///
    /// Locale tokens are checked with and without diacritics so that
    /// operator-typed labels like "buoi sang" still resolve. Detection is
    /// intentionally permissive; it is the last resort of the label matcher.
    #[must_use]
    pub fn detect(text: &str) -> Option<Self> {
        let haystack = text.to_lowercase();
        let tokens: [(&[&str], Self); 3] = [
            (&["sáng", "sang", "morning"], Self::Morning),
            (&["chiều", "chieu", "afternoon"], Self::Afternoon),
            (&["tối", "toi", "evening"], Self::Evening),
        ];
        for (needles, key) in tokens {
            if needles.iter().any(|needle| haystack.contains(needle)) {
                return Some(key);
            }
        }
        None
    }
}

impl std::fmt::Display for SlotKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A named time-of-day window within one day of an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// The configured slot name (e.g. "Buổi Sáng").
    name: String,
    /// Nominal start time-of-day.
    start_time: NaiveTime,
    /// Nominal end time-of-day.
    end_time: NaiveTime,
    /// Whether this slot is enabled for the activity.
    is_active: bool,
}

impl TimeSlot {
    /// Creates a new `TimeSlot`.
    ///
    /// # Arguments
    ///
    /// * `name` - The configured slot name
    /// * `start_time` - Nominal start time-of-day
    /// * `end_time` - Nominal end time-of-day
    /// * `is_active` - Whether the slot is enabled
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTimeSlot` if the name is empty or the
    /// end time is not strictly after the start time. Overnight wraparound
    /// slots are not supported.
    pub fn new(
        name: &str,
        start_time: NaiveTime,
        end_time: NaiveTime,
        is_active: bool,
    ) -> Result<Self, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidTimeSlot {
                name: name.to_string(),
                reason: String::from("Slot name cannot be empty"),
            });
        }
        if end_time <= start_time {
            return Err(DomainError::InvalidTimeSlot {
                name: name.to_string(),
                reason: format!("End time {end_time} must be after start time {start_time}"),
            });
        }
        Ok(Self {
            name: name.trim().to_string(),
            start_time,
            end_time,
            is_active,
        })
    }

    /// Returns the configured slot name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nominal start time-of-day.
    #[must_use]
    pub const fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    /// Returns the nominal end time-of-day.
    #[must_use]
    pub const fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    /// Returns whether this slot is enabled.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }
}

/// One numbered day of a multi-day activity schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleDay {
    /// The day number (1-based, unique within one activity).
    pub day: u32,
    /// The calendar date of this day.
    pub date: NaiveDate,
    /// Freeform organizer text; may embed per-slot time ranges such as
    /// "Buổi Sáng (07:00-11:30)" which override the slot template for
    /// this day only.
    pub activities_text: String,
}

impl ScheduleDay {
    /// Creates a new `ScheduleDay`.
    #[must_use]
    pub const fn new(day: u32, date: NaiveDate, activities_text: String) -> Self {
        Self {
            day,
            date,
            activities_text,
        }
    }
}

/// A campus activity definition, fetched read-only from the persistence
/// collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Whether this is a single-day or multi-day activity.
    pub kind: ActivityKind,
    /// The calendar date (single-day activities only).
    pub date: Option<NaiveDate>,
    /// The first scheduled date (multi-day activities only).
    pub start_date: Option<NaiveDate>,
    /// The last scheduled date (multi-day activities only).
    pub end_date: Option<NaiveDate>,
    /// The configured time slots.
    pub time_slots: Vec<TimeSlot>,
    /// The ordered day schedule (multi-day activities only).
    pub schedule: Vec<ScheduleDay>,
    /// Declared IANA timezone; all calendar-day anchoring happens here.
    pub timezone: String,
    /// Optional participant capacity.
    pub max_participants: Option<u32>,
    /// Optional minimum registration threshold.
    pub registration_threshold: Option<u32>,
}

impl Activity {
    /// Returns the active time slots in configuration order.
    pub fn active_slots(&self) -> impl Iterator<Item = &TimeSlot> {
        self.time_slots.iter().filter(|slot| slot.is_active())
    }

    /// Looks up a schedule day by its day number.
    #[must_use]
    pub fn schedule_day(&self, day: u32) -> Option<&ScheduleDay> {
        self.schedule.iter().find(|entry| entry.day == day)
    }

    /// Resolves the calendar date a (day-scoped) query refers to.
    ///
    /// Single-day activities ignore `day` and use the activity date.
    /// Multi-day activities require a known day number; an unknown day
    /// yields `None` and callers degrade to `TimeStatus::Unknown`.
    #[must_use]
    pub fn reference_date(&self, day: Option<u32>) -> Option<NaiveDate> {
        match self.kind {
            ActivityKind::SingleDay => self.date,
            ActivityKind::MultipleDays => day
                .and_then(|number| self.schedule_day(number))
                .map(|entry| entry.date),
        }
    }

    /// Returns the declared timezone, falling back to the source locale
    /// default when the stored string does not parse.
    ///
    /// Snapshot validation rejects unparseable timezones at the ingestion
    /// boundary, so the fallback only protects hand-built values.
    #[must_use]
    pub fn declared_tz(&self) -> Tz {
        self.timezone
            .parse()
            .unwrap_or(chrono_tz::Asia::Ho_Chi_Minh)
    }
}

/// Approval state of a participant's membership in an activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    /// Awaiting organizer review.
    #[default]
    Pending,
    /// Approved to attend.
    Approved,
    /// Rejected by an organizer.
    Rejected,
    /// Removed after having joined.
    Removed,
}

impl FromStr for ParticipantStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "removed" => Ok(Self::Removed),
            _ => Err(DomainError::InvalidParticipantStatus(s.to_string())),
        }
    }
}

impl ParticipantStatus {
    /// Converts this status to its snapshot string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Removed => "removed",
        }
    }
}

/// Verification state of one attendance check-in record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    /// Submitted, not yet reviewed by an officer.
    #[default]
    Pending,
    /// Verified and approved.
    Approved,
    /// Reviewed and rejected.
    Rejected,
}

impl FromStr for ApprovalStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidApprovalStatus(s.to_string())),
        }
    }
}

impl ApprovalStatus {
    /// Converts this status to its snapshot string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

/// Whether a check-in was made at the start or the end of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckInType {
    /// Check-in against the slot's start time.
    Start,
    /// Check-in against the slot's end time.
    End,
}

impl FromStr for CheckInType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(Self::Start),
            "end" => Ok(Self::End),
            _ => Err(DomainError::InvalidCheckInType(s.to_string())),
        }
    }
}

impl CheckInType {
    /// Converts this type to its snapshot string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::End => "end",
        }
    }
}

/// A participant in one activity.
///
/// The user reference has already been normalized to a canonical string id
/// at the snapshot boundary; the core never sees the duck-typed raw form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Canonical user id.
    pub user_id: String,
    /// Display name.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Role within the activity (informational).
    pub role: String,
    /// Membership approval state.
    pub status: ParticipantStatus,
    /// When the participant joined, if recorded.
    pub joined_at: Option<DateTime<Utc>>,
    /// Which day/slot combinations the participant signed up for.
    pub registration: Registration,
}

/// A geolocation captured with a check-in.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

/// One raw attendance check-in record.
///
/// `time_slot` is operator-authored free text, not a foreign key; the label
/// matcher recovers slot identity from it. `check_in_time` is `None` when
/// the stored timestamp did not parse — the resolver reports such records
/// as checked-in with indeterminate timeliness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Record id, if the store assigned one.
    pub id: Option<String>,
    /// Free-text slot label (e.g. "Ngày 2 - Buổi Sáng").
    pub time_slot: String,
    /// Start or end check-in.
    pub check_in_type: CheckInType,
    /// The check-in instant (UTC), if it parsed.
    pub check_in_time: Option<DateTime<Utc>>,
    /// Verification state.
    pub status: ApprovalStatus,
    /// Photo evidence URL.
    pub photo_url: Option<String>,
    /// Captured geolocation.
    pub location: Option<GeoPoint>,
    /// Officer note attached during verification.
    pub verification_note: Option<String>,
    /// Canonical id of the verifying officer.
    pub verified_by: Option<String>,
    /// Participant-supplied reason for a late check-in.
    pub late_reason: Option<String>,
    /// Reason the check-in was cancelled, if it was.
    pub cancellation_reason: Option<String>,
}

/// Classification of a check-in query relative to its slot's time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeStatus {
    /// The slot window has not opened yet.
    NotStarted,
    /// The slot window is currently open.
    InProgress,
    /// The slot window has closed.
    Passed,
    /// Checked in within the tolerance window.
    OnTime,
    /// Checked in outside the tolerance window.
    Late,
    /// Timeliness could not be determined from the stored data.
    Unknown,
}

impl TimeStatus {
    /// Converts this status to its snapshot string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Passed => "passed",
            Self::OnTime => "on_time",
            Self::Late => "late",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for TimeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The computed status of one (participant, slot, check-in type, day) cell.
///
/// This is derived data: recomputed on every query, never persisted, and a
/// pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotStatus {
    /// The matched attendance record, if any.
    pub attendance: Option<AttendanceRecord>,
    /// The matched record's approval state, carried verbatim.
    pub approval: Option<ApprovalStatus>,
    /// Window or timeliness classification.
    pub time_status: TimeStatus,
    /// Whether a matching check-in record exists at all.
    pub has_checked_in: bool,
}
