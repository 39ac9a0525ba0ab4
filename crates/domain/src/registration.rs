// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Day/slot registration resolution.
//!
//! Registration became day/slot-granular after the feature first shipped.
//! Old participant records lack the field entirely and must default to
//! "registered for everything", while new records are precise. That
//! asymmetry is load-bearing: it decides which slot-instances enter a
//! participant's completion denominator.

use crate::types::{ActivityKind, SlotKey};
use serde::{Deserialize, Serialize};

/// One registered (day, slot) combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DaySlot {
    /// The day number (1-based; meaningful for multi-day activities).
    pub day: u32,
    /// The registered slot.
    pub slot: SlotKey,
}

impl DaySlot {
    /// Creates a new `DaySlot`.
    #[must_use]
    pub const fn new(day: u32, slot: SlotKey) -> Self {
        Self { day, slot }
    }
}

/// A participant's registration, as an explicit tagged variant.
///
/// `Unrestricted` models the legacy "no registeredDaySlots field" case:
/// the participant counts as registered for every day and slot. The
/// ingestion boundary also maps an *empty* day/slot list to
/// `Unrestricted`, preserving the permissive legacy default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Registration {
    /// Registered for everything (legacy default).
    #[default]
    Unrestricted,
    /// Registered only for the listed (day, slot) combinations.
    Restricted(Vec<DaySlot>),
}

impl Registration {
    /// Decides whether a (day, slot-name) query counts toward this
    /// participant's denominator.
    ///
    /// The slot name is mapped to a key via exact vocabulary lookup first;
    /// if that lookup finds no membership, a second pass using looser
    /// token detection is attempted before giving up. An unresolvable slot
    /// name never counts.
    ///
    /// For single-day activities the day is ignored: membership means some
    /// entry with this slot key, regardless of day. Multi-day activities
    /// require an entry matching both day and slot exactly; a query
    /// without a day falls back to slot-only membership.
    ///
    /// # Arguments
    ///
    /// * `kind` - The activity kind
    /// * `day` - The queried day number, for multi-day activities
    /// * `slot_name` - The configured slot name being queried
    #[must_use]
    pub fn covers(&self, kind: ActivityKind, day: Option<u32>, slot_name: &str) -> bool {
        let entries = match self {
            Self::Unrestricted => return true,
            Self::Restricted(entries) => entries,
        };

        if let Some(key) = SlotKey::from_exact_name(slot_name)
            && Self::member(entries, kind, day, key)
        {
            return true;
        }
        if let Some(key) = SlotKey::detect(slot_name)
            && Self::member(entries, kind, day, key)
        {
            return true;
        }
        false
    }

    fn member(entries: &[DaySlot], kind: ActivityKind, day: Option<u32>, key: SlotKey) -> bool {
        match kind {
            ActivityKind::SingleDay => entries.iter().any(|entry| entry.slot == key),
            ActivityKind::MultipleDays => day.map_or_else(
                || entries.iter().any(|entry| entry.slot == key),
                |number| {
                    entries
                        .iter()
                        .any(|entry| entry.day == number && entry.slot == key)
                },
            ),
        }
    }
}
