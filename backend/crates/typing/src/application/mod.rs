//! Application Layer

pub mod config;
pub mod leaderboard;
pub mod save_result;

pub use config::TypingConfig;
pub use leaderboard::LeaderboardUseCase;
pub use save_result::{SaveResultInput, SaveResultUseCase};
