//! Server configuration from the environment

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::{Context, bail};
use auth::AuthConfig;
use auth::application::config::MAX_ACCESS_TOKEN_TTL;
use platform::crypto::from_base64;
use typing::TypingConfig;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_FRONTEND_ORIGINS: &str = "http://localhost:5173,http://127.0.0.1:5173";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

pub struct ApiConfig {
    pub database_url: String,
    pub database_max_connections: u32,
    pub bind_addr: SocketAddr,
    pub frontend_origins: Vec<String>,
    pub auth: AuthConfig,
    pub typing: TypingConfig,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL").context("DATABASE_URL must be set")?;

        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => bail!("DATABASE_MAX_CONNECTIONS must be a positive integer"),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("BIND_ADDR must be host:port")?;

        let frontend_origins = lookup("FRONTEND_ORIGINS")
            .unwrap_or_else(|| DEFAULT_FRONTEND_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        let mut auth = match lookup("JWT_SECRET") {
            Some(secret_b64) => AuthConfig::new(decode_secret(&secret_b64)?),
            None if cfg!(debug_assertions) => {
                tracing::warn!("JWT_SECRET not set, using a random secret for this process");
                AuthConfig::development()
            }
            None => bail!("JWT_SECRET must be set in production"),
        };

        if let Some(ttl) = lookup("ACCESS_TOKEN_TTL_SECS") {
            let secs: u64 = ttl
                .parse()
                .context("ACCESS_TOKEN_TTL_SECS must be a number of seconds")?;
            let ttl = Duration::from_secs(secs);
            if ttl.is_zero() || ttl > MAX_ACCESS_TOKEN_TTL {
                bail!(
                    "ACCESS_TOKEN_TTL_SECS must be between 1 and {}",
                    MAX_ACCESS_TOKEN_TTL.as_secs()
                );
            }
            auth.access_token_ttl = ttl;
        }

        auth.password_pepper = lookup("PASSWORD_PEPPER")
            .filter(|pepper| !pepper.is_empty())
            .map(String::into_bytes);

        Ok(Self {
            database_url,
            database_max_connections,
            bind_addr,
            frontend_origins,
            auth,
            typing: TypingConfig::default(),
        })
    }
}

/// Base64 (standard alphabet) of exactly 32 bytes
fn decode_secret(secret_b64: &str) -> anyhow::Result<[u8; 32]> {
    let bytes = from_base64(secret_b64.trim()).context("JWT_SECRET must be base64")?;
    bytes
        .try_into()
        .map_err(|bytes: Vec<u8>| {
            anyhow::anyhow!("JWT_SECRET must decode to 32 bytes, got {}", bytes.len())
        })
}
