//! guestbook-auth — identity delegation for the guestbook.
//!
//! Authentication itself lives in an external identity provider. This crate
//! covers the two seams the service needs:
//!
//! - extracting the per-request security ticket and caller identity from
//!   forwarded headers into a request-scoped [`RequestTicket`], and
//! - building login/logout URLs that hand the visitor off to the provider
//!   and bring them back afterwards ([`AuthUrls`]).
//!
//! Nothing here touches process-global state; the ticket context is built
//! once per request and passed down the handler call chain.

pub mod error;
pub mod ticket;
pub mod urls;

pub use error::{AuthError, AuthResult};
pub use ticket::{Identity, RequestTicket};
pub use urls::AuthUrls;
