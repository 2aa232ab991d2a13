//! Domain types for the guestbook store.
//!
//! A guestbook is not a stored row, only a partition key derived from a
//! caller-supplied name. Greetings are the stored entities; they are
//! immutable once written.

use serde::{Deserialize, Serialize};

/// Guestbook name used when the caller does not supply one.
pub const DEFAULT_GUESTBOOK_NAME: &str = "default_guestbook";

/// Maximum stored greeting content length, in characters.
pub const MAX_CONTENT_CHARS: usize = 100;

/// Author of a greeting, sourced from the authenticated caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub identity: String,
    pub email: String,
}

/// A single guestbook entry. Never updated or deleted once stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Greeting {
    pub id: String,
    /// Partition key: the guestbook this entry belongs to.
    pub guestbook: String,
    /// Absent for anonymous submissions.
    pub author: Option<Author>,
    /// At most [`MAX_CONTENT_CHARS`] characters of the fetched payload.
    pub content: String,
    /// Unix timestamp (milliseconds) assigned by the store at write time.
    pub created_at: u64,
}

/// A greeting as submitted, before the store assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewGreeting {
    pub guestbook: String,
    pub author: Option<Author>,
    pub content: String,
}

/// Escape the partition segment of a table key.
///
/// Keys use `:` as the segment separator, so a guestbook name containing
/// `:` must not bleed into another guestbook's prefix scan.
pub fn partition_segment(name: &str) -> String {
    name.replace('%', "%25").replace(':', "%3a")
}
