//! Access Tokens
//!
//! Bearer tokens are HS256-signed claims `{sub, iat, exp}`. A token is
//! valid while the signature checks out and `now < exp`.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use platform::token::{self, TokenError};
use serde::{Deserialize, Serialize};

use crate::application::config::AuthConfig;
use crate::error::{AuthError, AuthResult};

/// Claims carried by an access token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Canonical user name; optional on decode so its absence is our error
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Expiry, seconds since the Unix epoch
    pub exp: i64,
}

/// A freshly signed token and its lifetime
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_in: u64,
}

/// Signs and checks access tokens with the configured secret
#[derive(Clone)]
pub struct AccessTokenIssuer {
    config: Arc<AuthConfig>,
}

impl AccessTokenIssuer {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self { config }
    }

    /// `create_token`: sign `subject` with expiry now + TTL
    pub fn issue(&self, subject: &str) -> AuthResult<IssuedToken> {
        self.issue_at(subject, Utc::now())
    }

    pub fn issue_at(&self, subject: &str, now: DateTime<Utc>) -> AuthResult<IssuedToken> {
        let ttl = chrono::Duration::from_std(self.config.access_token_ttl)
            .map_err(|e| AuthError::Internal(format!("Invalid access token TTL: {e}")))?;
        let expires_at = now
            .checked_add_signed(ttl)
            .ok_or_else(|| AuthError::Internal("Access token expiry overflows".to_string()))?;

        let claims = AccessClaims {
            sub: Some(subject.to_string()),
            iat: Some(now.timestamp()),
            exp: expires_at.timestamp(),
        };

        let token = token::sign(&claims, &self.config.token_secret)
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        Ok(IssuedToken {
            token,
            expires_in: self.config.access_token_ttl_secs(),
        })
    }

    /// Check signature, algorithm and expiry; return the subject
    pub fn verify(&self, token: &str) -> AuthResult<String> {
        self.verify_at(token, Utc::now())
    }

    pub fn verify_at(&self, token: &str, now: DateTime<Utc>) -> AuthResult<String> {
        let claims: AccessClaims =
            token::verify(token, &self.config.token_secret).map_err(|e| {
                match &e {
                    TokenError::UnsupportedAlgorithm => {
                        tracing::warn!("Token with unexpected algorithm");
                    }
                    _ => tracing::debug!(error = %e, "Token rejected"),
                }
                AuthError::InvalidToken
            })?;

        if now.timestamp() >= claims.exp {
            tracing::debug!(exp = claims.exp, "Token expired");
            return Err(AuthError::InvalidToken);
        }

        match claims.sub {
            Some(sub) if !sub.is_empty() => Ok(sub),
            _ => {
                tracing::debug!("Token without subject");
                Err(AuthError::InvalidToken)
            }
        }
    }
}
