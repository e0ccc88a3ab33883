//! Canonical slot store.
//!
//! Owns the current energy level for each of the five fixed slots, keeps
//! it durable across sessions through a [`SlotStorage`] backend, and
//! notifies registered subscribers after every mutation. One store is
//! constructed per session and passed by reference to whatever consumes
//! it; there is no ambient global state.
//!
//! All operations are synchronous and run to completion on the calling
//! thread. The store has exactly one writer path (`set_level` / `reset`),
//! so no locking is involved.

use chrono::Utc;
use log::warn;

use crate::error::Result;
use crate::events::Event;
use crate::slot::{default_slots, EnergyLevel, Slot};
use crate::storage::{decode_slots, encode_slots, FileStorage, SlotStorage};

/// Handle returned by [`SlotStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Subscriber = Box<dyn FnMut(&Event)>;

/// The canonical, current slot collection.
pub struct SlotStore<S: SlotStorage> {
    slots: Vec<Slot>,
    storage: S,
    subscribers: Vec<(SubscriptionId, Subscriber)>,
    next_subscription: u64,
}

impl SlotStore<FileStorage> {
    /// Open the store over the default file-backed storage.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared. Invalid
    /// or unreadable persisted content is never an error; it falls back to
    /// the default collection.
    pub fn open() -> Result<Self> {
        Ok(Self::new(FileStorage::open()?))
    }
}

impl<S: SlotStorage> SlotStore<S> {
    /// Create a store over `storage`, restoring the persisted collection
    /// if one exists and validates, otherwise starting from the defaults.
    ///
    /// Any failure to read or decode the persisted entry is absorbed:
    /// the data is discarded with a warning and treated as absent.
    pub fn new(storage: S) -> Self {
        let slots = match storage.load() {
            Ok(Some(raw)) => decode_slots(&raw).unwrap_or_else(|| {
                warn!("discarding invalid persisted slot data, using defaults");
                default_slots()
            }),
            Ok(None) => default_slots(),
            Err(e) => {
                warn!("failed to read persisted slot data ({e}), using defaults");
                default_slots()
            }
        };

        Self {
            slots,
            storage,
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// The current collection, in display order. No side effects.
    pub fn get_all(&self) -> &[Slot] {
        &self.slots
    }

    /// Set the energy level of the slot with the given id.
    ///
    /// Updates the one matching slot, persists the whole collection, then
    /// publishes [`Event::SlotsUpdated`] to subscribers. Returns
    /// `Ok(true)` when a slot was updated.
    ///
    /// An unknown id is ignored: no mutation, no persist, no event,
    /// `Ok(false)`.
    ///
    /// # Errors
    /// Propagates storage write failures. The in-memory level is already
    /// updated at that point and the event is not published; the store
    /// stays internally consistent and the caller may retry.
    pub fn set_level(&mut self, id: &str, level: EnergyLevel) -> Result<bool> {
        let Some(slot) = self.slots.iter_mut().find(|s| s.id == id) else {
            warn!("ignoring set_level for unknown slot id '{id}'");
            return Ok(false);
        };
        slot.level = level;

        self.persist()?;
        self.publish(Event::SlotsUpdated {
            slots: self.slots.clone(),
            at: Utc::now(),
        });
        Ok(true)
    }

    /// Restore the default collection, persist it, and publish
    /// [`Event::SlotsReset`].
    ///
    /// # Errors
    /// Propagates storage write failures, as with [`set_level`](Self::set_level).
    pub fn reset(&mut self) -> Result<()> {
        self.slots = default_slots();
        self.persist()?;
        self.publish(Event::SlotsReset {
            slots: self.slots.clone(),
            at: Utc::now(),
        });
        Ok(())
    }

    /// Register a subscriber. Callbacks run synchronously on the mutating
    /// thread, in registration order, after each mutation completes.
    pub fn subscribe(&mut self, callback: impl FnMut(&Event) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sub_id, _)| *sub_id != id);
        self.subscribers.len() != before
    }

    fn persist(&self) -> Result<()> {
        let encoded = encode_slots(&self.slots)?;
        self.storage.store(&encoded)
    }

    fn publish(&mut self, event: Event) {
        for (_, callback) in &mut self.subscribers {
            callback(&event);
        }
    }
}
