use serde::{Deserialize, Serialize};

/// Lifetime statistics across finished games.
///
/// Serialized with camelCase field names; unknown or missing fields fall back
/// to zero so older files keep loading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameStats {
    pub total_games: u64,
    pub total_score: u64,
    pub games_won: u64,
    pub best_score: u64,
    pub average_score: u64,
    pub highest_tile: u32,
    pub total_moves: u64,
}

impl GameStats {
    /// Fold one finished game into the totals.
    pub fn record_game(&mut self, score: u32, won: bool, highest_tile: u32, moves: u32) {
        self.total_games += 1;
        self.total_score += u64::from(score);
        self.total_moves += u64::from(moves);
        if won {
            self.games_won += 1;
        }
        self.best_score = self.best_score.max(u64::from(score));
        self.highest_tile = self.highest_tile.max(highest_tile);
        // Rounded half up.
        self.average_score = (self.total_score + self.total_games / 2) / self.total_games;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fraction of games won, `0.0` when nothing was played.
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }
}
