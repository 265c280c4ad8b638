//! Application Configuration
//!
//! Configuration for the Auth application layer. Secrets are supplied by
//! the binary from its environment.

use std::fmt;
use std::time::Duration;

use platform::crypto::random_bytes;

/// Access tokens live for one hour unless configured otherwise
pub const DEFAULT_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(3600);

/// Longest configurable token lifetime (30 days)
pub const MAX_ACCESS_TOKEN_TTL: Duration = Duration::from_secs(30 * 24 * 3600);

/// Auth application configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 key for access tokens (32 bytes)
    pub token_secret: [u8; 32],
    /// Lifetime of an issued access token
    pub access_token_ttl: Duration,
    /// Password pepper (optional, application-wide secret)
    pub password_pepper: Option<Vec<u8>>,
}

impl AuthConfig {
    pub fn new(token_secret: [u8; 32]) -> Self {
        Self {
            token_secret,
            access_token_ttl: DEFAULT_ACCESS_TOKEN_TTL,
            password_pepper: None,
        }
    }

    /// Random per-process secret; tokens do not survive a restart
    pub fn development() -> Self {
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&random_bytes(32));
        Self::new(secret)
    }

    pub fn access_token_ttl_secs(&self) -> u64 {
        self.access_token_ttl.as_secs()
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}

impl fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("access_token_ttl", &self.access_token_ttl)
            .field("password_pepper", &self.password_pepper.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}
