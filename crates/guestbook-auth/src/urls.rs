//! Login/logout URL construction for the external identity provider.
//!
//! The provider owns the actual flows; this service only sends visitors
//! there with a `continue` parameter pointing back at the page they left.

/// Builds login/logout URLs against the identity provider endpoint.
#[derive(Debug, Clone)]
pub struct AuthUrls {
    base: String,
}

impl AuthUrls {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// URL that starts a login flow and returns to `return_url`.
    pub fn login_url(&self, return_url: &str) -> String {
        format!(
            "{}/login?continue={}",
            self.base,
            urlencoding::encode(return_url)
        )
    }

    /// URL that ends the session and returns to `return_url`.
    pub fn logout_url(&self, return_url: &str) -> String {
        format!(
            "{}/logout?continue={}",
            self.base,
            urlencoding::encode(return_url)
        )
    }
}
