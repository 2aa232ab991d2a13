//! GreetingStore — redb-backed persistence for guestbook entries.
//!
//! Greetings are JSON-serialized into redb's `&[u8]` value column under
//! composite keys of the form `{guestbook}:{inverted_nanos:016x}:{id}`. The
//! inverted-timestamp segment makes a plain prefix scan return entries
//! newest-first, and the partition segment guarantees a query for one
//! guestbook never observes another guestbook's rows.
//!
//! Writes to a single guestbook partition should stay around one per
//! second; the store documents this convention but does not enforce it.

use std::path::Path;
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use redb::{Database, ReadableDatabase, ReadableTable};
use tracing::debug;
use uuid::Uuid;

use crate::error::{StoreError, StoreResult};
use crate::tables::GREETINGS;
use crate::types::{Greeting, NewGreeting, partition_segment};

/// Convert any `Display` error into a `StoreError` variant via a closure factory.
macro_rules! map_err {
    ($variant:ident) => {
        |e| StoreError::$variant(e.to_string())
    };
}

/// Thread-safe greeting store backed by redb.
#[derive(Clone)]
pub struct GreetingStore {
    db: Arc<Database>,
}

impl GreetingStore {
    /// Open (or create) a persistent store at the given path.
    pub fn open(path: &Path) -> StoreResult<Self> {
        let db = Database::create(path).map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!(?path, "greeting store opened");
        Ok(store)
    }

    /// Create an ephemeral in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let backend = redb::backends::InMemoryBackend::new();
        let db = Database::builder()
            .create_with_backend(backend)
            .map_err(map_err!(Open))?;
        let store = Self { db: Arc::new(db) };
        store.ensure_tables()?;
        debug!("in-memory greeting store opened");
        Ok(store)
    }

    /// Create all tables if they don't exist yet.
    fn ensure_tables(&self) -> StoreResult<()> {
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        // Opening a table in a write transaction creates it if absent.
        txn.open_table(GREETINGS).map_err(map_err!(Table))?;
        txn.commit().map_err(map_err!(Transaction))?;
        Ok(())
    }

    /// Persist a new greeting, assigning its id and creation timestamp.
    ///
    /// Returns the stored row. Greetings are write-once: there is no
    /// update or delete.
    pub fn put_greeting(&self, new: &NewGreeting) -> StoreResult<Greeting> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let greeting = Greeting {
            id: Uuid::now_v7().to_string(),
            guestbook: new.guestbook.clone(),
            author: new.author.clone(),
            content: new.content.clone(),
            created_at: now.as_millis() as u64,
        };
        // Nanosecond resolution in the key keeps back-to-back writes within
        // the same millisecond ordered.
        let key = greeting_key(&greeting.guestbook, now.as_nanos() as u64, &greeting.id);
        let value = serde_json::to_vec(&greeting).map_err(map_err!(Serialize))?;
        let txn = self.db.begin_write().map_err(map_err!(Transaction))?;
        {
            let mut table = txn.open_table(GREETINGS).map_err(map_err!(Table))?;
            table
                .insert(key.as_str(), value.as_slice())
                .map_err(map_err!(Write))?;
        }
        txn.commit().map_err(map_err!(Transaction))?;
        debug!(%key, guestbook = %greeting.guestbook, "greeting stored");
        Ok(greeting)
    }

    /// List the most recent greetings for one guestbook, newest first.
    pub fn list_greetings(&self, guestbook: &str, limit: usize) -> StoreResult<Vec<Greeting>> {
        let prefix = format!("{}:", partition_segment(guestbook));
        let txn = self.db.begin_read().map_err(map_err!(Transaction))?;
        let table = txn.open_table(GREETINGS).map_err(map_err!(Table))?;
        let mut results = Vec::new();
        for entry in table.iter().map_err(map_err!(Read))? {
            let (key, value) = entry.map_err(map_err!(Read))?;
            if key.value().starts_with(&prefix) {
                let greeting: Greeting =
                    serde_json::from_slice(value.value()).map_err(map_err!(Deserialize))?;
                results.push(greeting);
                if results.len() >= limit {
                    break;
                }
            }
        }
        Ok(results)
    }
}

/// Build the composite key for the greetings table.
///
/// Inverting the timestamp makes lexicographic key order equal
/// newest-first order within a guestbook partition.
fn greeting_key(guestbook: &str, write_nanos: u64, id: &str) -> String {
    format!(
        "{}:{:016x}:{}",
        partition_segment(guestbook),
        u64::MAX - write_nanos,
        id
    )
}
