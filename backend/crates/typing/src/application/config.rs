//! Typing Configuration

pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone)]
pub struct TypingConfig {
    /// Rows returned by the leaderboard
    pub leaderboard_size: usize,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            leaderboard_size: DEFAULT_LEADERBOARD_SIZE,
        }
    }
}
