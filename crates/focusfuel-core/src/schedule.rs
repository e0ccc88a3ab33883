//! Schedule derivation.
//!
//! Maps a slot collection to a suggested-task view using a fixed
//! three-entry catalog, one entry per energy level. The mapping is pure:
//! no state, no side effects, same-length output for any input.

use serde::{Deserialize, Serialize};

use crate::slot::{EnergyLevel, Slot};

/// Kind of example task in the demo catalog.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    /// Creative, high-value work
    Creative,
    /// Focused execution work
    Focused,
    /// Light administrative work
    Admin,
}

/// An example task from the fixed catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: u32,
    pub name: String,
    pub kind: TaskKind,
}

/// A slot paired with its suggested task. Derived on every read,
/// never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduledSlot {
    pub slot: Slot,
    pub suggestion: Task,
}

/// The fixed demo catalog: High, Medium, Low in that order.
///
/// Never persisted; rebuilt identically on every call.
pub fn task_catalog() -> [Task; 3] {
    [
        Task {
            id: 1,
            name: "Design landing".to_string(),
            kind: TaskKind::Creative,
        },
        Task {
            id: 2,
            name: "Finish report".to_string(),
            kind: TaskKind::Focused,
        },
        Task {
            id: 3,
            name: "Emails & Admin".to_string(),
            kind: TaskKind::Admin,
        },
    ]
}

/// Pair each slot with a suggested task by energy level.
///
/// High maps to the first catalog entry, Medium to the second, and
/// everything else to the third. The fallthrough is intentional, kept
/// from the reference behavior: a level that is not High and not Medium
/// is treated as Low rather than rejected.
pub fn derive_schedule(slots: &[Slot]) -> Vec<ScheduledSlot> {
    let catalog = task_catalog();
    slots
        .iter()
        .map(|slot| {
            let suggestion = match slot.level {
                EnergyLevel::High => catalog[0].clone(),
                EnergyLevel::Medium => catalog[1].clone(),
                _ => catalog[2].clone(),
            };
            ScheduledSlot {
                slot: slot.clone(),
                suggestion,
            }
        })
        .collect()
}
