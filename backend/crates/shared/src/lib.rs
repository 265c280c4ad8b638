//! Shared Kernel
//!
//! Vocabulary shared by the auth and typing crates:
//! - Unified error type ([`error::app_error::AppError`]) and its HTTP mapping
//! - `ApiJson` request bodies that reject with that error type
//! - Typed entity identifiers ([`id::UserId`], [`id::TypingResultId`])
//!
//! Nothing domain specific lives here. If only one crate needs it, it
//! belongs in that crate.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
#[cfg(feature = "axum")]
pub mod extract;
pub mod id;
