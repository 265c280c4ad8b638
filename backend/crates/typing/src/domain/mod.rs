//! Domain Layer

pub mod entity;
pub mod leaderboard;
pub mod repository;
pub mod sample_text;
pub mod scorer;
