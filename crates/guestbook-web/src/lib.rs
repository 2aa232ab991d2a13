//! guestbook-web — server-rendered web front end for the guestbook.
//!
//! Two handlers are the whole surface:
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | GET | `/` | `pages::index` |
//! | POST | `/sign` | `actions::sign` |
//!
//! Handlers are stateless single-pass transformations; per-request auth
//! context travels as an explicit `RequestTicket`, never as shared state.

pub mod actions;
pub mod cache;
pub mod error;
pub mod fetch;
pub mod pages;
pub mod views;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};

use guestbook_auth::AuthUrls;
use guestbook_state::GreetingStore;

use crate::cache::LastWriteCache;
use crate::fetch::ContentFetcher;

/// Shared state for web handlers.
#[derive(Clone)]
pub struct WebState {
    pub store: GreetingStore,
    pub cache: LastWriteCache,
    pub fetcher: Arc<dyn ContentFetcher>,
    pub auth_urls: AuthUrls,
}

/// Build the guestbook router.
pub fn build_router(state: WebState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/sign", post(actions::sign))
        .with_state(state)
}
