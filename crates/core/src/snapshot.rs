use crate::grid::Grid;
use crate::types::GameStatus;

/// Immutable copy of the scoring state: the unit stored in the undo history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u32,
    pub game_over: bool,
    pub won: bool,
}

impl GameSnapshot {
    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }
}

/// Everything a renderer needs to draw the board and its side panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewSnapshot {
    pub state: GameSnapshot,
    pub swap_tokens: u32,
    pub swap_mode: bool,
    pub selected: Option<(usize, usize)>,
    pub can_undo: bool,
    pub moves: u32,
    pub episode_id: u32,
}

impl Default for ViewSnapshot {
    fn default() -> Self {
        Self {
            state: GameSnapshot::default(),
            swap_tokens: 0,
            swap_mode: false,
            selected: None,
            can_undo: false,
            moves: 0,
            episode_id: 0,
        }
    }
}
