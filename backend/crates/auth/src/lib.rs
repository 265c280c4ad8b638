//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases, access tokens, configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router, bearer middleware
//!
//! ## Features
//! - Registration with user name, email and password
//! - Login returning a signed bearer token (HS256, 1 hour by default)
//! - Token resolution to the stored user for protected routes
//!
//! ## Security Model
//! - Passwords hashed with Argon2id, optional server-side pepper
//! - Token secret comes from configuration, never from source
//! - Every token failure reaches the client as the same 401 response
//! - Login does not reveal whether a user name exists

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgAuthRepository;
pub use presentation::middleware::{CurrentUser, require_bearer_user};
pub use presentation::router::auth_router;
pub use presentation::AuthAppState;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

pub mod models {
    pub use crate::domain::entity::*;
    pub use crate::domain::value_object::*;
    pub use crate::presentation::dto::*;
}
