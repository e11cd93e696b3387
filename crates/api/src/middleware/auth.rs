//! # Authentication Module
//!
//! Every booking endpoint needs to know who is calling. Callers present an
//! `Authorization: Bearer <token>` header; an [`IdentityProvider`] turns the
//! token into a user id, and the [`AuthUser`] extractor rejects the request
//! with 401 before any handler runs when that fails.
//!
//! The bundled provider validates HS256 JSON Web Tokens whose `sub` claim is
//! the numeric user id.

use std::sync::Arc;

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use chrono::{Duration, Utc};
use eyre::{Result, WrapErr};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use medconsult_core::{models::consultation::UserId, ConsultError, ConsultResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{middleware::error_handling::AppError, ApiState};

/// Resolves a credential to the identity making the request.
pub trait IdentityProvider: Send + Sync {
    fn authenticate(&self, token: &str) -> ConsultResult<UserId>;
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User id, as a decimal string
    pub sub: String,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

pub struct JwtIdentityProvider {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtIdentityProvider {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }
}

impl IdentityProvider for JwtIdentityProvider {
    fn authenticate(&self, token: &str) -> ConsultResult<UserId> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            debug!("Token rejected: {}", e);
            ConsultError::Unauthenticated("Invalid or expired token".to_string())
        })?;

        data.claims.sub.parse().map_err(|_| {
            ConsultError::Unauthenticated("Token subject is not a user id".to_string())
        })
    }
}

/// Signs a token for `user_id` that expires after `ttl`.
pub fn issue_token(secret: &str, user_id: UserId, ttl: Duration) -> Result<String> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.to_string(),
        exp: (now + ttl).timestamp(),
        iat: Some(now.timestamp()),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .wrap_err("Failed to sign token")
}

/// The authenticated caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthUser(pub UserId);

#[async_trait]
impl FromRequestParts<Arc<ApiState>> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<ApiState>,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or_else(|| unauthenticated("Missing authorization header"))?;

        let token = header
            .to_str()
            .ok()
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| unauthenticated("Invalid authorization header format"))?;

        let user_id = state.identity.authenticate(token)?;
        Ok(AuthUser(user_id))
    }
}

fn unauthenticated(message: &str) -> AppError {
    AppError(ConsultError::Unauthenticated(message.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_resolves_to_its_user() {
        let token = issue_token("secret", 42, Duration::hours(1)).unwrap();
        let provider = JwtIdentityProvider::new("secret");

        assert_eq!(provider.authenticate(&token).unwrap(), 42);
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let token = issue_token("other", 42, Duration::hours(1)).unwrap();
        let provider = JwtIdentityProvider::new("secret");

        let err = provider.authenticate(&token).unwrap_err();
        assert!(matches!(err, ConsultError::Unauthenticated(_)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let token = issue_token("secret", 42, Duration::hours(-2)).unwrap();
        let provider = JwtIdentityProvider::new("secret");

        assert!(provider.authenticate(&token).is_err());
    }
}
