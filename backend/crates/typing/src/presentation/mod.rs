//! Presentation Layer
//!
//! HTTP handlers, DTOs, router.

use std::sync::Arc;

use crate::application::config::TypingConfig;
use crate::domain::repository::TypingResultRepository;

pub mod dto;
pub mod handlers;
pub mod router;

pub use router::typing_router;

/// Shared state for typing handlers
pub struct TypingAppState<R>
where
    R: TypingResultRepository + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<TypingConfig>,
}

impl<R> Clone for TypingAppState<R>
where
    R: TypingResultRepository + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
            config: self.config.clone(),
        }
    }
}
