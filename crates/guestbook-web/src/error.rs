//! Web-layer error type.
//!
//! Every failure surfaces as a failed HTTP response to the caller; nothing
//! is retried or recovered locally.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;
use tracing::warn;

use crate::fetch::FetchError;

/// Errors a guestbook handler can surface.
#[derive(Debug, Error)]
pub enum WebError {
    #[error(transparent)]
    Auth(#[from] guestbook_auth::AuthError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Store(#[from] guestbook_state::StoreError),

    #[error("template render failed: {0}")]
    Render(String),
}

impl WebError {
    fn status(&self) -> StatusCode {
        match self {
            WebError::Auth(_) => StatusCode::BAD_REQUEST,
            WebError::Fetch(_) => StatusCode::BAD_GATEWAY,
            WebError::Store(_) | WebError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(%status, error = %self, "request failed");
        (status, Html(format!("<pre>Error: {self}</pre>"))).into_response()
    }
}
