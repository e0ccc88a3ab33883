//! Durable single-entry storage for the slot collection.
//!
//! The collection lives under one fixed key (`ff_slots_demo`), serialized
//! as a JSON array of `{id, label, level}` records with no schema
//! versioning. Stored data that fails to decode or validate is treated the
//! same as absent data.
//!
//! Production uses [`FileStorage`] under `~/.config/focusfuel/`;
//! tests use [`MemoryStorage`].

use std::cell::RefCell;
use std::path::PathBuf;

use crate::error::{Result, StorageError};
use crate::slot::{Slot, SLOT_IDS};

/// File name for the persisted collection, after the original storage key.
pub const STORAGE_KEY: &str = "ff_slots_demo";

/// Backend for the single persisted entry.
///
/// `load` returns the raw stored text, `None` when nothing has been
/// persisted yet. Decoding and validation happen in [`decode_slots`] so
/// every backend shares the same acceptance rules.
pub trait SlotStorage {
    fn load(&self) -> Result<Option<String>>;
    fn store(&self, value: &str) -> Result<()>;
}

/// Returns `~/.config/focusfuel[-dev]/` based on FOCUSFUEL_ENV.
///
/// Set FOCUSFUEL_ENV=dev to use the development data directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("FOCUSFUEL_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("focusfuel-dev")
    } else {
        base_dir.join("focusfuel")
    };

    std::fs::create_dir_all(&dir).map_err(|source| StorageError::DataDir {
        path: dir.clone(),
        source,
    })?;
    Ok(dir)
}

/// File-backed storage: one JSON file in the data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    /// Open storage at the default location in the data directory.
    ///
    /// # Errors
    /// Returns an error if the data directory cannot be prepared.
    pub fn open() -> Result<Self> {
        Ok(Self {
            path: data_dir()?.join(format!("{STORAGE_KEY}.json")),
        })
    }

    /// Open storage at an explicit path (used by tests).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl SlotStorage for FileStorage {
    fn load(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::ReadFailed {
                path: self.path.clone(),
                source,
            }
            .into()),
        }
    }

    fn store(&self, value: &str) -> Result<()> {
        std::fs::write(&self.path, value).map_err(|source| StorageError::WriteFailed {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral runs.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    value: RefCell<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed with arbitrary content, valid or not.
    pub fn seeded(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl SlotStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.value.borrow().clone())
    }

    fn store(&self, value: &str) -> Result<()> {
        *self.value.borrow_mut() = Some(value.to_string());
        Ok(())
    }
}

/// Decode and validate a stored collection.
///
/// Accepts only an array of exactly five records whose ids cover the known
/// set exactly once each; level validity is enforced by the enum decode.
/// Order is kept as stored. Any deviation yields `None`.
pub fn decode_slots(raw: &str) -> Option<Vec<Slot>> {
    let slots: Vec<Slot> = serde_json::from_str(raw).ok()?;
    if slots.len() != SLOT_IDS.len() {
        return None;
    }
    for id in SLOT_IDS {
        if slots.iter().filter(|s| s.id == id).count() != 1 {
            return None;
        }
    }
    Some(slots)
}

/// Serialize a collection for persistence.
pub fn encode_slots(slots: &[Slot]) -> Result<String> {
    let encoded = serde_json::to_string(slots).map_err(StorageError::EncodeFailed)?;
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::default_slots;

    #[test]
    fn encode_decode_roundtrip() {
        let slots = default_slots();
        let raw = encode_slots(&slots).unwrap();
        let decoded = decode_slots(&raw).unwrap();
        assert_eq!(decoded, slots);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(decode_slots("not json at all").is_none());
        assert!(decode_slots("{\"id\": \"morning\"}").is_none());
        assert!(decode_slots("[]").is_none());
    }

    #[test]
    fn decode_rejects_wrong_cardinality() {
        let mut slots = default_slots();
        slots.pop();
        let raw = serde_json::to_string(&slots).unwrap();
        assert!(decode_slots(&raw).is_none());
    }

    #[test]
    fn decode_rejects_unknown_id() {
        let mut slots = default_slots();
        slots[0].id = "brunch".to_string();
        let raw = serde_json::to_string(&slots).unwrap();
        assert!(decode_slots(&raw).is_none());
    }

    #[test]
    fn decode_rejects_duplicate_id() {
        let mut slots = default_slots();
        slots[1].id = "morning".to_string();
        let raw = serde_json::to_string(&slots).unwrap();
        assert!(decode_slots(&raw).is_none());
    }

    #[test]
    fn decode_rejects_unknown_level() {
        let raw = r#"[
            {"id":"morning","label":"Morning (8–10)","level":"turbo"},
            {"id":"midday","label":"Midday (11–13)","level":"high"},
            {"id":"afternoon","label":"Afternoon (14–16)","level":"medium"},
            {"id":"evening","label":"Evening (17–19)","level":"low"},
            {"id":"night","label":"Night (20–22)","level":"low"}
        ]"#;
        assert!(decode_slots(raw).is_none());
    }

    #[test]
    fn memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_none());
        storage.store("payload").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("payload"));
    }

    #[test]
    fn file_storage_missing_file_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::at_path(dir.path().join("ff_slots_demo.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::at_path(dir.path().join("ff_slots_demo.json"));
        storage.store("[1,2,3]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[1,2,3]"));
    }
}
