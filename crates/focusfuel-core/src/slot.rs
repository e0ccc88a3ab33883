//! Slot data model.
//!
//! Five fixed time-of-day slots, each tagged with a user-reported energy
//! level. The set is created once per session and never grows or shrinks;
//! only the level of a slot changes.

use serde::{Deserialize, Serialize};

/// User-reported energy level for a time slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    /// High energy (e.g., morning peak)
    High,
    /// Medium energy (default)
    Medium,
    /// Low energy (e.g., end of day)
    Low,
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

impl EnergyLevel {
    /// Parse from the lowercase wire/CLI form.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "high" => Some(EnergyLevel::High),
            "medium" => Some(EnergyLevel::Medium),
            "low" => Some(EnergyLevel::Low),
            _ => None,
        }
    }

    /// Lowercase form used in storage and CLI output.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyLevel::High => "high",
            EnergyLevel::Medium => "medium",
            EnergyLevel::Low => "low",
        }
    }
}

/// One tracked time-of-day bucket.
///
/// `id` and `label` are fixed at creation; only `level` mutates.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    pub id: String,
    pub label: String,
    pub level: EnergyLevel,
}

/// The fixed set of slot identifiers, in display order.
pub const SLOT_IDS: [&str; 5] = ["morning", "midday", "afternoon", "evening", "night"];

/// The default collection used when no valid persisted data exists.
pub fn default_slots() -> Vec<Slot> {
    let defaults = [
        ("morning", "Morning (8–10)", EnergyLevel::Medium),
        ("midday", "Midday (11–13)", EnergyLevel::High),
        ("afternoon", "Afternoon (14–16)", EnergyLevel::Medium),
        ("evening", "Evening (17–19)", EnergyLevel::Low),
        ("night", "Night (20–22)", EnergyLevel::Low),
    ];

    defaults
        .iter()
        .map(|(id, label, level)| Slot {
            id: (*id).to_string(),
            label: (*label).to_string(),
            level: *level,
        })
        .collect()
}
