//! redb table definitions for the guestbook store.
//!
//! The table uses `&str` keys and `&[u8]` values (JSON-serialized greetings).
//! Keys follow the pattern `{guestbook}:{inverted_nanos:016x}:{id}`.

use redb::TableDefinition;

/// Greetings keyed by `{guestbook}:{inverted_nanos:016x}:{id}`.
pub const GREETINGS: TableDefinition<&str, &[u8]> = TableDefinition::new("greetings");
