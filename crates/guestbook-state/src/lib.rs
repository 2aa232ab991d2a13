//! guestbook-state — embedded document store for the guestbook.
//!
//! Backed by [redb](https://docs.rs/redb), provides persistent and in-memory
//! storage for greeting entries grouped by guestbook name.
//!
//! # Architecture
//!
//! Greetings are JSON-serialized into redb's `&[u8]` value columns. Each key
//! carries the guestbook partition first and an inverted write timestamp
//! second, so a plain prefix scan over one guestbook returns its entries
//! newest-first and never observes another guestbook's rows.
//!
//! The `GreetingStore` is `Clone` + `Send` + `Sync` (backed by
//! `Arc<Database>`) and can be shared across async tasks.

pub mod error;
pub mod store;
pub mod tables;
pub mod types;

pub use error::{StoreError, StoreResult};
pub use store::GreetingStore;
pub use types::*;
