pub mod activities;
pub mod auth;
pub mod dashboard;
pub mod profile;
pub mod users;

use crate::config::config;
use crate::error::ApiError;
use crate::gateway::{Credentials, UpstreamGateway};
use crate::middleware::bearer::BearerToken;

/// Per-request gateway carrying the caller's credential. No gateway or
/// credential is ever shared across concurrent requests.
fn gateway_for(token: &BearerToken) -> Result<UpstreamGateway, ApiError> {
    let credentials = Credentials::bearer(token.0.clone());
    Ok(UpstreamGateway::new(&config().upstream, credentials)?)
}
