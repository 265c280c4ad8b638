//! Infrastructure Layer

#[cfg(test)]
pub mod memory;
pub mod postgres;

pub use postgres::PgTypingResultRepository;
