//! Guestbook page handlers.
//!
//! The index page queries the store, builds view types, and renders an
//! Askama template.

use askama::Template;
use axum::extract::{Query, State};
use axum::http::HeaderMap;
use axum::response::Html;
use serde::Deserialize;

use guestbook_auth::RequestTicket;
use guestbook_state::DEFAULT_GUESTBOOK_NAME;

use crate::WebState;
use crate::error::WebError;
use crate::views::GreetingView;

/// Number of greetings shown on the index page.
pub const PAGE_SIZE: usize = 10;

/// Optional `guestbook_name` query parameter shared by both routes.
#[derive(Debug, Deserialize)]
pub struct GuestbookQuery {
    pub guestbook_name: Option<String>,
}

impl GuestbookQuery {
    /// The requested guestbook, or the default one.
    pub fn name(&self) -> &str {
        self.guestbook_name
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(DEFAULT_GUESTBOOK_NAME)
    }
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    guestbook_name: String,
    /// Percent-encoded guestbook name for use inside URLs.
    guestbook_param: String,
    user_email: Option<String>,
    greetings: Vec<GreetingView>,
    auth_url: String,
    auth_link_text: &'static str,
    last_write: Option<String>,
}

/// GET `/` — render the most recent greetings for one guestbook.
pub async fn index(
    State(state): State<WebState>,
    Query(query): Query<GuestbookQuery>,
    headers: HeaderMap,
) -> Result<Html<String>, WebError> {
    let ticket = RequestTicket::from_headers(&headers)?;
    let guestbook_name = query.name().to_string();
    let guestbook_param = urlencoding::encode(&guestbook_name).into_owned();

    let greetings = state
        .store
        .list_greetings(&guestbook_name, PAGE_SIZE)?
        .iter()
        .map(GreetingView::from_greeting)
        .collect();

    let return_url = format!("/?guestbook_name={guestbook_param}");
    let (auth_url, auth_link_text, user_email) = match &ticket.identity {
        Some(identity) => (
            state.auth_urls.logout_url(&return_url),
            "Logout",
            Some(identity.email.clone()),
        ),
        None => (state.auth_urls.login_url(&return_url), "Login", None),
    };

    let page = IndexTemplate {
        guestbook_name,
        guestbook_param,
        user_email,
        greetings,
        auth_url,
        auth_link_text,
        last_write: state.cache.get(),
    };
    let html = page.render().map_err(|e| WebError::Render(e.to_string()))?;
    Ok(Html(html))
}
