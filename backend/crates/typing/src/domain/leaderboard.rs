//! Leaderboard ordering
//!
//! Highest wpm first. Equal wpm keeps the earlier result ahead.

use std::cmp::Ordering;

use crate::domain::entity::LeaderboardEntry;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Leaderboard(Vec<LeaderboardEntry>);

impl Leaderboard {
    /// Order `entries` and keep the first `limit`
    pub fn rank(mut entries: Vec<LeaderboardEntry>, limit: usize) -> Self {
        entries.sort_by(rank_order);
        entries.truncate(limit);
        Self(entries)
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.0
    }

    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        self.0
    }
}

pub fn rank_order(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.wpm
        .total_cmp(&a.wpm)
        .then_with(|| a.created_at.cmp(&b.created_at))
}
