//! # FocusFuel Core Library
//!
//! This library provides the logic behind the FocusFuel demo: an energy
//! logger over five fixed time-of-day slots and a derived suggestion view
//! that pairs each slot with an example task matching its energy level.
//! It implements a CLI-first philosophy where all operations are available
//! via a standalone CLI binary; any GUI would be a thin layer over the
//! same core library.
//!
//! ## Architecture
//!
//! - **Slot Store**: Owns the canonical slot collection, persists it to a
//!   single JSON entry, and notifies subscribers after every mutation
//! - **Schedule Derivation**: A pure function from slots to suggested
//!   tasks, driven by a fixed three-entry catalog
//! - **Storage**: File-backed key-value entry with an in-memory variant
//!   for tests
//! - **Content**: Static landing-page copy rendered by the CLI
//!
//! ## Key Components
//!
//! - [`SlotStore`]: Canonical slot collection with persistence and pub/sub
//! - [`derive_schedule`]: Slot collection to suggestion view
//! - [`FileStorage`]: Durable single-entry storage backend
//! - [`Event`]: Notification payload delivered to subscribers

pub mod content;
pub mod error;
pub mod events;
pub mod schedule;
pub mod slot;
pub mod storage;
pub mod store;

pub use error::{CoreError, StorageError};
pub use events::Event;
pub use schedule::{derive_schedule, task_catalog, ScheduledSlot, Task, TaskKind};
pub use slot::{default_slots, EnergyLevel, Slot, SLOT_IDS};
pub use storage::{FileStorage, MemoryStorage, SlotStorage};
pub use store::{SlotStore, SubscriptionId};
