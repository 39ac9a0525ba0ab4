// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-day slot time overrides embedded in schedule text.
//!
//! A multi-day schedule entry carries freeform organizer text. When that
//! text embeds an explicit time range for a slot — "Buổi Sáng
//! (07:00-11:30)" — the parsed range overrides the activity-level slot
//! template for that one day only. This supports ad hoc schedule changes
//! without editing the slot definitions.

use crate::types::SlotKey;
use chrono::NaiveTime;
use regex::Regex;
use std::sync::LazyLock;

// Pattern is hard-coded and known valid; construction cannot fail.
#[allow(clippy::expect_used)]
static SLOT_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)bu[ổo]i\s+(\p{L}+)\s*\((\d{1,2}):(\d{2})\s*-\s*(\d{1,2}):(\d{2})\)")
        .expect("slot range pattern is valid")
});

/// Extracts the per-day time override for a slot from schedule text.
///
/// # Arguments
///
/// * `activities_text` - The freeform schedule-day text
/// * `slot` - The slot being queried
///
/// # Returns
///
/// The overriding `(start, end)` times when the text embeds a valid range
/// for this slot; `None` when no range is present, the range belongs to a
/// different slot, or the digits do not form valid times-of-day. The first
/// matching range for the slot wins.
#[must_use]
pub fn slot_time_override(activities_text: &str, slot: SlotKey) -> Option<(NaiveTime, NaiveTime)> {
    for caps in SLOT_RANGE_RE.captures_iter(activities_text) {
        let token = caps.get(1)?.as_str();
        if SlotKey::detect(token) != Some(slot) {
            continue;
        }

        let start = parse_hm(caps.get(2)?.as_str(), caps.get(3)?.as_str());
        let end = parse_hm(caps.get(4)?.as_str(), caps.get(5)?.as_str());
        if let (Some(start), Some(end)) = (start, end)
            && end > start
        {
            return Some((start, end));
        }
    }
    None
}

fn parse_hm(hours: &str, minutes: &str) -> Option<NaiveTime> {
    let hour: u32 = hours.parse().ok()?;
    let minute: u32 = minutes.parse().ok()?;
    NaiveTime::from_hms_opt(hour, minute, 0)
}
