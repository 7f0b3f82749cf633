use axum::{extract::FromRequestParts, http::request::Parts};
use colegio_adapters::config::AUTHENTICATED_USER_HEADER;
use colegio_core::AuthContext;

use crate::error::ApiError;

/// Caller identity as vouched for by the authentication layer in front of
/// this service.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthContext);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let principal = parts
            .headers
            .get(AUTHENTICATED_USER_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ApiError::Unauthenticated)?;

        Ok(Self(AuthContext::new(principal)))
    }
}
