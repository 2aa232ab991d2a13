//! Guestbook form actions.

use axum::extract::{Form, Query, State};
use axum::http::HeaderMap;
use axum::response::Redirect;
use chrono::Utc;
use serde::Deserialize;
use tracing::debug;

use guestbook_auth::RequestTicket;
use guestbook_state::{Author, NewGreeting};

use crate::WebState;
use crate::error::WebError;
use crate::fetch::truncate_content;
use crate::pages::GuestbookQuery;

/// Sign form body.
#[derive(Debug, Deserialize)]
pub struct SignForm {
    /// URL whose fetched body becomes the greeting content.
    pub content: String,
}

/// POST `/sign` — fetch the submitted URL, store a greeting, bump the
/// last-write cache, redirect back to the list view.
pub async fn sign(
    State(state): State<WebState>,
    Query(query): Query<GuestbookQuery>,
    headers: HeaderMap,
    Form(form): Form<SignForm>,
) -> Result<Redirect, WebError> {
    let ticket = RequestTicket::from_headers(&headers)?;
    let guestbook_name = query.name().to_string();

    // The stored content is the start of whatever the submitted URL
    // serves, not the text the visitor typed.
    let payload = state.fetcher.fetch(&form.content).await?;
    let content = truncate_content(&payload);

    let author = ticket.identity.as_ref().map(|identity| Author {
        identity: identity.user_id.clone(),
        email: identity.email.clone(),
    });

    let greeting = state.store.put_greeting(&NewGreeting {
        guestbook: guestbook_name.clone(),
        author,
        content,
    })?;
    state.cache.set(Utc::now().to_rfc3339());
    debug!(id = %greeting.id, guestbook = %guestbook_name, "greeting signed");

    Ok(Redirect::to(&format!(
        "/?guestbook_name={}",
        urlencoding::encode(&guestbook_name)
    )))
}
