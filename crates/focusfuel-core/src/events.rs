use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::slot::Slot;

/// Every mutation of the slot collection produces an Event.
/// Subscribers registered on the store receive it synchronously,
/// in registration order, after the mutation completes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A slot's energy level changed.
    SlotsUpdated {
        slots: Vec<Slot>,
        at: DateTime<Utc>,
    },
    /// The collection was restored to its defaults.
    SlotsReset {
        slots: Vec<Slot>,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The slot collection carried by this event.
    pub fn slots(&self) -> &[Slot] {
        match self {
            Event::SlotsUpdated { slots, .. } | Event::SlotsReset { slots, .. } => slots,
        }
    }
}
