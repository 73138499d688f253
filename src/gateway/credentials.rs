use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

/// Holds the opaque bearer token for the current request's caller.
///
/// Scoped per inbound request: the token arrives with each request from
/// the session storage owned by the caller, so no credential is ever
/// shared across concurrent requests. The token is never inspected or
/// validated locally - the upstream API is the sole authority on its
/// validity and expiry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    token: Option<String>,
}

impl Credentials {
    /// No token held. Used for the login call itself.
    pub fn anonymous() -> Self {
        Self { token: None }
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Replaces the held token unconditionally.
    pub fn set_token(&mut self, token: impl Into<String>) {
        self.token = Some(token.into());
    }

    pub fn clear(&mut self) {
        self.token = None;
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Headers for an outbound upstream call. The authorization header
    /// is present if and only if a token is currently held.
    pub fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = &self.token {
            // A token that cannot form a valid header value is dropped
            // rather than sent malformed; upstream will answer 401.
            if let Ok(value) = HeaderValue::from_str(&format!("Bearer {token}")) {
                headers.insert(AUTHORIZATION, value);
            }
        }

        headers
    }
}
