//! Request-scoped security ticket context.
//!
//! The platform fronting this service forwards a per-request API ticket and
//! the caller's identity as headers. They are extracted once per request
//! into a [`RequestTicket`] that handlers carry explicitly; nothing is
//! stashed in environment variables or other process-wide state.

use axum::http::HeaderMap;

use crate::error::{AuthError, AuthResult};

/// Header carrying the per-request security ticket.
pub const TICKET_HEADER: &str = "x-guestbook-api-ticket";
/// Header carrying the caller's auth domain.
pub const AUTH_DOMAIN_HEADER: &str = "x-guestbook-auth-domain";
/// Header carrying the caller's opaque user id.
pub const USER_ID_HEADER: &str = "x-guestbook-user-id";
/// Header carrying the caller's email address.
pub const USER_EMAIL_HEADER: &str = "x-guestbook-user-email";

const DEFAULT_AUTH_DOMAIN: &str = "gmail.com";

/// Authenticated caller identity as forwarded by the identity provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub user_id: String,
    pub email: String,
}

/// Per-request auth context: the backend API ticket plus the caller's
/// identity, if the request was authenticated.
#[derive(Debug, Clone)]
pub struct RequestTicket {
    pub ticket: String,
    pub auth_domain: String,
    pub identity: Option<Identity>,
}

impl RequestTicket {
    /// Extract the ticket context from request headers.
    ///
    /// The API ticket is required; its absence fails the request. The
    /// identity headers are optional, and an absent or empty user id or
    /// email means the caller is anonymous.
    pub fn from_headers(headers: &HeaderMap) -> AuthResult<Self> {
        let ticket = header_str(headers, TICKET_HEADER)
            .filter(|t| !t.is_empty())
            .ok_or(AuthError::MissingTicket)?
            .to_string();

        let auth_domain = header_str(headers, AUTH_DOMAIN_HEADER)
            .filter(|d| !d.is_empty())
            .unwrap_or(DEFAULT_AUTH_DOMAIN)
            .to_string();

        let user_id = header_str(headers, USER_ID_HEADER).unwrap_or_default();
        let email = header_str(headers, USER_EMAIL_HEADER).unwrap_or_default();
        let identity = (!user_id.is_empty() && !email.is_empty()).then(|| Identity {
            user_id: user_id.to_string(),
            email: email.to_string(),
        });

        Ok(Self {
            ticket,
            auth_domain,
            identity,
        })
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
