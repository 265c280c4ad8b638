//! Application Layer
//!
//! Use cases and application services.

pub mod access_token;
pub mod config;
pub mod login;
pub mod register;
pub mod resolve_token;

// Re-exports
pub use access_token::{AccessClaims, AccessTokenIssuer, IssuedToken};
pub use config::AuthConfig;
pub use login::{LoginInput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
pub use resolve_token::ResolveTokenUseCase;
