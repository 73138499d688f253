use std::time::Duration;

use reqwest::{Client, StatusCode};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::UpstreamConfig;

use super::credentials::Credentials;
use super::envelope;

/// Classified upstream failure. Every upstream outcome is reduced to
/// one of these before control returns to the caller; no upstream
/// condition escapes the gateway as a panic.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// DNS, connection, timeout or body-decode failure.
    #[error("unable to reach the upstream API")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered 401: the credential is invalid or expired.
    #[error("upstream rejected the credential")]
    Unauthorized,

    /// Upstream answered 403: the caller lacks the required privilege.
    #[error("insufficient permissions for this operation")]
    Forbidden,

    /// Login was refused, either by status or by the success flag.
    #[error("login failed: {}", .message.as_deref().unwrap_or("invalid credentials or unable to connect to server"))]
    LoginRejected { message: Option<String> },

    /// Any other non-2xx status or a false/missing success flag.
    #[error("upstream request failed with status {status}")]
    Rejected { status: u16, message: Option<String> },
}

pub type GatewayResult<T> = std::result::Result<T, GatewayError>;

/// Session established by a successful login call.
#[derive(Debug, Clone)]
pub struct AuthenticatedSession {
    pub token: String,
    pub user: Value,
}

/// Raw outcome of a mutating upstream call. The status is passed
/// through verbatim; the caller decides success phrasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationOutcome {
    pub status: u16,
    pub message: Option<String>,
}

impl MutationOutcome {
    pub fn succeeded(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Authenticated client for the upstream identity/administration API.
///
/// Constructed once per inbound request with that caller's
/// [`Credentials`]; stateless otherwise. Each operation is a single
/// request/response cycle with a bounded timeout and no retries - a
/// failed attempt is surfaced immediately as a [`GatewayError`].
pub struct UpstreamGateway {
    base_url: String,
    http: Client,
    credentials: Credentials,
}

impl UpstreamGateway {
    pub fn new(config: &UpstreamConfig, credentials: Credentials) -> GatewayResult<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
            credentials,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST /api/auth/login - exchange email/password for a bearer
    /// token. On success the returned token becomes the held
    /// credential for subsequent calls on this gateway.
    pub async fn login(&mut self, email: &str, password: &str) -> GatewayResult<AuthenticatedSession> {
        let response = self
            .http
            .post(self.endpoint("/api/auth/login"))
            .headers(self.credentials.headers())
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = response.status();
        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(_) => return Err(GatewayError::LoginRejected { message: None }),
        };

        if !status.is_success() || !envelope::succeeded(&body) {
            return Err(GatewayError::LoginRejected {
                message: envelope::message(&body),
            });
        }

        let token = body
            .pointer("/data/token")
            .and_then(Value::as_str)
            .ok_or(GatewayError::LoginRejected { message: None })?
            .to_string();
        let user = body.pointer("/data/user").cloned().unwrap_or(Value::Null);

        self.credentials.set_token(token.clone());
        Ok(AuthenticatedSession { token, user })
    }

    pub async fn list_users(&self) -> GatewayResult<Vec<Value>> {
        self.fetch_records("/api/admin/users", "users").await
    }

    pub async fn get_user(&self, id: &str) -> GatewayResult<Option<Value>> {
        self.fetch_record(&format!("/api/admin/users/{id}"), "user")
            .await
    }

    pub async fn list_activities(&self) -> GatewayResult<Vec<Value>> {
        self.fetch_records("/api/activities", "activities").await
    }

    pub async fn list_activity_instances(&self) -> GatewayResult<Vec<Value>> {
        self.fetch_records("/api/activity-instances", "activity_instances")
            .await
    }

    pub async fn profile(&self) -> GatewayResult<Option<Value>> {
        self.fetch_record("/api/auth/me", "user").await
    }

    /// PUT /api/admin/users/{id} - change a user's role. The raw
    /// status is passed through for the caller to branch on.
    pub async fn change_role(&self, id: &str, role: &str) -> GatewayResult<MutationOutcome> {
        let response = self
            .http
            .put(self.endpoint(&format!("/api/admin/users/{id}")))
            .headers(self.credentials.headers())
            .json(&json!({ "role": role }))
            .send()
            .await?;

        Ok(Self::outcome(response).await)
    }

    /// PUT /api/users/{id}/activate or .../deactivate, no body.
    pub async fn set_active(&self, id: &str, active: bool) -> GatewayResult<MutationOutcome> {
        let action = if active { "activate" } else { "deactivate" };
        let response = self
            .http
            .put(self.endpoint(&format!("/api/users/{id}/{action}")))
            .headers(self.credentials.headers())
            .send()
            .await?;

        Ok(Self::outcome(response).await)
    }

    pub async fn update_profile<T: Serialize>(&self, fields: &T) -> GatewayResult<MutationOutcome> {
        let response = self
            .http
            .put(self.endpoint("/api/auth/me"))
            .headers(self.credentials.headers())
            .json(fields)
            .send()
            .await?;

        Ok(Self::outcome(response).await)
    }

    /// One authenticated GET reduced to a normalized record sequence.
    async fn fetch_records(&self, path: &str, resource: &str) -> GatewayResult<Vec<Value>> {
        let body = self.fetch_envelope(path).await?;
        Ok(envelope::records(&body, resource))
    }

    async fn fetch_record(&self, path: &str, resource: &str) -> GatewayResult<Option<Value>> {
        let body = self.fetch_envelope(path).await?;
        Ok(envelope::record(&body, resource))
    }

    async fn fetch_envelope(&self, path: &str) -> GatewayResult<Value> {
        let response = self
            .http
            .get(self.endpoint(path))
            .headers(self.credentials.headers())
            .send()
            .await?;

        let status = response.status();
        match status {
            StatusCode::UNAUTHORIZED => return Err(GatewayError::Unauthorized),
            StatusCode::FORBIDDEN => return Err(GatewayError::Forbidden),
            s if !s.is_success() => {
                return Err(GatewayError::Rejected {
                    status: s.as_u16(),
                    message: None,
                })
            }
            _ => {}
        }

        let body: Value = response.json().await?;
        if !envelope::succeeded(&body) {
            return Err(GatewayError::Rejected {
                status: status.as_u16(),
                message: envelope::message(&body),
            });
        }
        Ok(body)
    }

    async fn outcome(response: reqwest::Response) -> MutationOutcome {
        let status = response.status().as_u16();
        // Body shape is not guaranteed on mutations; a message is best effort.
        let message = response
            .json::<Value>()
            .await
            .ok()
            .and_then(|body| envelope::message(&body));

        MutationOutcome { status, message }
    }
}
