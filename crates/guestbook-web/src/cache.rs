//! Ephemeral last-write cache.
//!
//! Holds the timestamp of the most recent successful submission. A single
//! in-process slot with no expiry: the value is last-known, never
//! authoritative, and readers must tolerate its absence.

use std::sync::{Arc, RwLock};

/// Shared single-slot cache for the last write time.
#[derive(Debug, Clone, Default)]
pub struct LastWriteCache {
    slot: Arc<RwLock<Option<String>>>,
}

impl LastWriteCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last write time, if any submission succeeded since startup.
    pub fn get(&self) -> Option<String> {
        self.slot.read().ok().and_then(|slot| slot.clone())
    }

    /// Record the latest write time.
    pub fn set(&self, value: String) {
        if let Ok(mut slot) = self.slot.write() {
            *slot = Some(value);
        }
    }
}
