//! Presentation Layer
//!
//! HTTP handlers, DTOs, router, and bearer middleware.

use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::domain::repository::UserRepository;

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod router;

pub use middleware::{CurrentUser, require_bearer_user};
pub use router::auth_router;

/// Shared state for auth handlers and the bearer middleware
pub struct AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
}

impl<R> AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>) -> Self {
        Self { repo, config }
    }
}

// Manual impl: only the `Arc`s are cloned, `R` itself need not be `Clone`
impl<R> Clone for AuthAppState<R>
where
    R: UserRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}
