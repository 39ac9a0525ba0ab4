// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Slot label matching for free-text attendance records.
//!
//! Attendance records carry an operator-authored label ("Buổi Sáng",
//! "Ngày 2 - Buổi Sáng", "Buổi Sáng (07:00-11:30)") instead of a stable
//! slot key. The label format evolved across features — single-day,
//! multi-day, and legacy shapes all coexist in historical data — so the
//! matcher accepts every shape through an ordered rule list.
//!
//! ## Invariants
//!
//! - Rule order is part of the observable contract; loosening or
//!   reordering rules lets a wrong record match first.
//! - A day mismatch is a hard gate: once a day number is extracted from
//!   the label and it differs from the queried day, nothing later may
//!   rescue the match.
//! - The matcher is pure and total for any string input.

use crate::types::SlotKey;
use regex::Regex;
use std::sync::LazyLock;

// Patterns are hard-coded and known valid; construction cannot fail.
#[allow(clippy::expect_used)]
static DAY_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^\s*ng[àa]y\s+(\d+)\s*(?:-\s*)?").expect("day prefix pattern is valid")
});

#[allow(clippy::expect_used)]
static PARENTHETICAL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*\([^)]*\)\s*$").expect("parenthetical pattern is valid")
});

/// The structured form recovered from a free-text slot label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedLabel {
    /// The day number from a leading "Ngày <N>" prefix, if present.
    pub day: Option<u32>,
    /// The slot vocabulary token detected in the label, if any.
    pub slot: Option<SlotKey>,
}

/// Parses a free-text slot label into its structured form.
///
/// # Arguments
///
/// * `label` - The raw attendance record label
///
/// # Returns
///
/// A `ParsedLabel`; both fields are `None` when nothing was recognized.
#[must_use]
pub fn parse_label(label: &str) -> ParsedLabel {
    ParsedLabel {
        day: extract_day_number(label),
        slot: SlotKey::detect(label),
    }
}

/// Extracts the day number from a leading "Ngày <N>" prefix.
///
/// The full number is matched: "Ngày 10" is day 10, never day 1.
#[must_use]
pub fn extract_day_number(label: &str) -> Option<u32> {
    DAY_PREFIX_RE
        .captures(label)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Strips a leading "Ngày <N> - " prefix, returning the remainder.
fn strip_day_prefix(label: &str) -> Option<&str> {
    DAY_PREFIX_RE
        .find(label)
        .map(|m| label[m.end()..].trim())
        .filter(|rest| !rest.is_empty())
}

/// Removes a trailing parenthetical such as "(07:00-11:30)".
fn strip_parenthetical(text: &str) -> String {
    PARENTHETICAL_RE.replace(text, "").trim().to_lowercase()
}

/// Decides whether a free-text record label refers to a target slot.
///
/// Rules are tried in priority order; the first that fires wins:
///
/// 1. Exact case-insensitive match of the trimmed strings.
/// 2. With a target day: a day number extracted from the label that
///    differs from the target is a hard gate (no match, regardless of any
///    later rule). When the day matches, equal slot tokens from both
///    strings match.
/// 3. Suffix match: the label ends with `" - <target>"`.
/// 4. Stripping a leading "Ngày N - " prefix leaves exactly the target.
/// 5. After removing parenthetical suffixes from both: equality, then a
///    mutual substring check, then one more slot-token comparison without
///    the day gate.
/// 6. Otherwise no match.
///
/// # Arguments
///
/// * `record_label` - The free-text label on the attendance record
/// * `target_slot_name` - The configured slot name being queried
/// * `target_day` - The queried day number, for multi-day activities
///
/// # Returns
///
/// `true` when the label refers to the target slot. Empty inputs never
/// match. The function is pure and total.
#[must_use]
pub fn label_matches(record_label: &str, target_slot_name: &str, target_day: Option<u32>) -> bool {
    let label = record_label.trim();
    let target = target_slot_name.trim();
    if label.is_empty() || target.is_empty() {
        return false;
    }

    let label_lower = label.to_lowercase();
    let target_lower = target.to_lowercase();

    // Rule 1: exact case-insensitive match.
    if label_lower == target_lower {
        return true;
    }

    // Rule 2: day gate plus slot-token comparison.
    if let Some(day) = target_day
        && let Some(label_day) = extract_day_number(label)
    {
        if label_day != day {
            return false;
        }
        if let (Some(label_slot), Some(target_slot)) =
            (SlotKey::detect(label), SlotKey::detect(target))
            && label_slot == target_slot
        {
            return true;
        }
    }

    // Rule 3: "<anything> - <target>" suffix.
    if label_lower.ends_with(&format!(" - {target_lower}")) {
        return true;
    }

    // Rule 4: the label is exactly the target behind a day prefix.
    if let Some(rest) = strip_day_prefix(label)
        && rest.to_lowercase() == target_lower
    {
        return true;
    }

    // Rule 5: normalize away parenthetical time ranges, then loosen.
    let label_norm = strip_parenthetical(label);
    let target_norm = strip_parenthetical(target);
    if !label_norm.is_empty() && !target_norm.is_empty() {
        if label_norm == target_norm {
            return true;
        }
        if label_norm.contains(&target_norm) || target_norm.contains(&label_norm) {
            return true;
        }
    }
    if let (Some(label_slot), Some(target_slot)) = (SlotKey::detect(label), SlotKey::detect(target))
        && label_slot == target_slot
    {
        return true;
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match() {
        assert!(label_matches("Buổi Sáng", "Buổi Sáng", None));
        assert!(label_matches("  buổi sáng  ", "Buổi Sáng", None));
    }

    #[test]
    fn test_different_slots_do_not_match() {
        assert!(!label_matches("Buổi Chiều", "Buổi Sáng", None));
        assert!(!label_matches("Buổi Tối", "Buổi Chiều", None));
    }

    #[test]
    fn test_empty_inputs_never_match() {
        assert!(!label_matches("", "Buổi Sáng", None));
        assert!(!label_matches("Buổi Sáng", "", None));
        assert!(!label_matches("", "", None));
    }

    #[test]
    fn test_day_gate_blocks_mismatched_day() {
        assert!(!label_matches("Ngày 2 - Buổi Sáng", "Buổi Sáng", Some(3)));
    }

    #[test]
    fn test_day_gate_allows_matching_day() {
        assert!(label_matches("Ngày 3 - Buổi Sáng", "Buổi Sáng", Some(3)));
    }

    #[test]
    fn test_day_number_matches_full_number() {
        // "1" is a substring of "10"; the extracted number must be compared
        // as a whole.
        assert!(label_matches("Ngày 10 - Buổi Tối", "Buổi Tối", Some(10)));
        assert!(!label_matches("Ngày 10 - Buổi Tối", "Buổi Tối", Some(1)));
    }

    #[test]
    fn test_suffix_match_without_day() {
        assert!(label_matches("Ngày 2 - Buổi Sáng", "Buổi Sáng", None));
    }

    #[test]
    fn test_day_prefix_strip() {
        assert!(label_matches("Ngày 4 - Buổi Chiều", "Buổi Chiều", Some(4)));
        assert!(label_matches("ngày 4 buổi chiều", "Buổi Chiều", None));
    }

    #[test]
    fn test_parenthetical_time_range_is_ignored() {
        assert!(label_matches(
            "Buổi Sáng",
            "Buổi Sáng (07:00-11:30)",
            None
        ));
        assert!(label_matches(
            "Buổi Sáng (07:00-11:30)",
            "Buổi Sáng",
            None
        ));
    }

    #[test]
    fn test_unaccented_label_resolves_by_token() {
        assert!(label_matches("buoi sang", "Buổi Sáng", None));
    }

    #[test]
    fn test_substring_containment() {
        assert!(label_matches("Sinh hoạt - Buổi Sáng", "Buổi Sáng", None));
    }

    #[test]
    fn test_day_gate_not_rescued_by_later_rules() {
        // The suffix rule would match, but the day gate already failed.
        assert!(!label_matches("Ngày 2 - Buổi Sáng", "Buổi Sáng", Some(1)));
    }

    #[test]
    fn test_parse_label_structured_form() {
        let parsed: ParsedLabel = parse_label("Ngày 7 - Buổi Tối");
        assert_eq!(parsed.day, Some(7));
        assert_eq!(parsed.slot, Some(SlotKey::Evening));

        let unparsed: ParsedLabel = parse_label("Hội trường A");
        assert_eq!(unparsed.day, None);
        assert_eq!(unparsed.slot, None);
    }

    #[test]
    fn test_extract_day_number_requires_prefix() {
        assert_eq!(extract_day_number("Ngày 12 - Buổi Sáng"), Some(12));
        assert_eq!(extract_day_number("Buổi Sáng - Ngày 12"), None);
    }
}
