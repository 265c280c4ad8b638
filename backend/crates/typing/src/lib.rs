//! Typing Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Scorer, sample texts, results, leaderboard, repository trait
//! - `application/` - Use cases and configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! Scoring is a pure function. Results live only in the `typing_results`
//! table; the leaderboard is a query over it.

pub mod application;
pub mod domain;
pub mod infra;
pub mod presentation;

pub use application::config::TypingConfig;
pub use domain::scorer::{ScoreError, TypingScore, score};
pub use infra::postgres::PgTypingResultRepository;
pub use presentation::router::typing_router;
