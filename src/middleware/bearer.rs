use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use crate::error::ApiError;

/// Opaque bearer token forwarded by the presentation layer with each
/// request. The token is never decoded or validated locally - the
/// upstream API is the sole authority on it. Extraction only checks
/// that the header is well-formed and non-empty.
#[derive(Clone, Debug)]
pub struct BearerToken(pub String);

#[async_trait]
impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| ApiError::unauthorized("Missing Authorization header"))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| ApiError::unauthorized("Invalid Authorization header format"))?;

        let token = auth_str.strip_prefix("Bearer ").ok_or_else(|| {
            ApiError::unauthorized("Authorization header must use Bearer token format")
        })?;

        if token.trim().is_empty() {
            return Err(ApiError::unauthorized("Empty bearer token"));
        }

        Ok(BearerToken(token.to_string()))
    }
}
