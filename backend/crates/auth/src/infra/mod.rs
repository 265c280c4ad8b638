//! Infrastructure Layer
//!
//! Database implementations of the repository traits.

#[cfg(any(test, feature = "test-util"))]
pub mod memory;
pub mod postgres;

pub use postgres::PgAuthRepository;
