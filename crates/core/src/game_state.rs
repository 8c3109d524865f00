//! Game state module - the board engine state machine
//!
//! This module ties together the grid, the undo history, the random source and
//! the swap power-up. It owns all mutation of the grid: callers read snapshots
//! and invoke operations, nothing else writes tiles.
//!
//! States: `Playing`, `Won` (play continues) and `GameOver` (terminal for
//! moves and swaps; undo can still step out of it).

use log::{debug, info};
use rand::Rng;

use crate::grid::Grid;
use crate::history::History;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, ViewSnapshot};
use crate::types::*;

/// Outcome of the last engine operation (consumed by observers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GameEvent {
    pub moved: bool,
    pub swapped: bool,
    pub merges: u32,
    pub gained: u32,
    pub spawned: Option<(usize, usize, Tile)>,
    pub won_now: bool,
    pub game_over_now: bool,
    /// Swap tokens granted by this operation.
    pub swap_reward: u32,
}

/// Flags raised by a single terminal-state evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TerminalCheck {
    pub won_now: bool,
    pub game_over_now: bool,
}

/// Successful result of [`Game::select_for_swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapOutcome {
    /// First cell recorded.
    Selected { row: usize, col: usize },
    /// Same cell picked twice; selection cancelled.
    Deselected,
    /// Two cells exchanged and one token spent.
    Swapped {
        from: (usize, usize),
        to: (usize, usize),
    },
}

/// Why a swap request was refused. The grid is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SwapRejection {
    #[error("No swaps left! Make a 256 tile to earn more.")]
    NoSwapsLeft,
    #[error("The game is over")]
    GameOver,
    #[error("Cell ({row}, {col}) is outside the grid")]
    OutOfBounds { row: usize, col: usize },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    grid: Grid,
    score: u32,
    won: bool,
    game_over: bool,
    history: History,
    swap_tokens: u32,
    swap_mode: bool,
    selected: Option<(usize, usize)>,
    /// The 256 reward is paid at most once per game.
    swap_reward_granted: bool,
    /// Successful moves in the current game.
    moves: u32,
    /// Monotonic game id (increments on reset).
    episode_id: u32,
    last_event: Option<GameEvent>,
    rng: R,
}

impl Game<SimpleRng> {
    /// Start a new game with the default RNG and the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: Rng> Game<R> {
    /// Start a new game drawing randomness from `rng`
    pub fn with_rng(rng: R) -> Self {
        let mut game = Self::blank(rng);
        game.seed_board();
        game
    }

    /// Resume play from a given position (no tiles are spawned).
    ///
    /// The position becomes history entry 0; flags are evaluated immediately.
    pub fn from_grid(grid: Grid, rng: R) -> Self {
        let mut game = Self::blank(rng);
        game.grid = grid;
        game.check_terminal();
        game.swap_reward_granted = game.grid.contains(SWAP_REWARD_TILE);
        let snapshot = game.snapshot();
        game.history.commit(snapshot);
        game
    }

    fn blank(rng: R) -> Self {
        Self {
            grid: Grid::new(),
            score: 0,
            won: false,
            game_over: false,
            history: History::new(),
            swap_tokens: INITIAL_SWAP_TOKENS,
            swap_mode: false,
            selected: None,
            swap_reward_granted: false,
            moves: 0,
            episode_id: 0,
            last_event: None,
            rng,
        }
    }

    fn seed_board(&mut self) {
        for _ in 0..START_TILES {
            self.grid.spawn_random(&mut self.rng);
        }
        let snapshot = self.snapshot();
        self.history.commit(snapshot);
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> GameStatus {
        self.snapshot().status()
    }

    pub fn swap_tokens(&self) -> u32 {
        self.swap_tokens
    }

    pub fn swap_mode(&self) -> bool {
        self.swap_mode
    }

    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn highest_tile(&self) -> Tile {
        self.grid.max_tile()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid,
            score: self.score,
            game_over: self.game_over,
            won: self.won,
        }
    }

    pub fn view(&self) -> ViewSnapshot {
        ViewSnapshot {
            state: self.snapshot(),
            swap_tokens: self.swap_tokens,
            swap_mode: self.swap_mode,
            selected: self.selected,
            can_undo: self.history.can_undo(),
            moves: self.moves,
            episode_id: self.episode_id,
        }
    }

    /// Take and clear the last operation's event.
    pub fn take_last_event(&mut self) -> Option<GameEvent> {
        self.last_event.take()
    }

    /// Slide all tiles toward `direction`.
    ///
    /// Returns false (and changes nothing) when the game is over or when no
    /// cell would change.
    pub fn move_tiles(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let result = self.grid.shift(direction);
        if !result.moved {
            return false;
        }

        self.grid = result.grid;
        self.score += result.gained;
        self.moves += 1;
        self.selected = None;

        let spawned = self.grid.spawn_random(&mut self.rng);
        let swap_reward = self.apply_swap_reward();
        let check = self.check_terminal();
        let snapshot = self.snapshot();
        self.history.commit(snapshot);

        debug!(
            "move {}: +{} ({} merges), score {}",
            direction.as_str(),
            result.gained,
            result.merges,
            self.score
        );

        self.last_event = Some(GameEvent {
            moved: true,
            swapped: false,
            merges: result.merges,
            gained: result.gained,
            spawned,
            won_now: check.won_now,
            game_over_now: check.game_over_now,
            swap_reward,
        });
        true
    }

    /// Evaluate win and game-over conditions.
    ///
    /// `won` is raised the first time the win tile appears and never raised
    /// again while already set. `game_over` is raised when the grid is full and
    /// no adjacent pair can merge.
    pub fn check_terminal(&mut self) -> TerminalCheck {
        let mut check = TerminalCheck::default();

        if !self.won && self.grid.contains(WIN_TILE) {
            self.won = true;
            check.won_now = true;
            info!("reached {} with score {}", WIN_TILE, self.score);
        }

        if !self.game_over && self.grid.is_full() && !self.grid.can_merge() {
            self.game_over = true;
            self.swap_mode = false;
            self.selected = None;
            check.game_over_now = true;
            info!("game over: score {}, highest tile {}", self.score, self.highest_tile());
        }

        check
    }

    /// Restore the previous snapshot. Returns false at the oldest entry.
    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().copied() else {
            return false;
        };

        self.grid = snapshot.grid;
        self.score = snapshot.score;
        self.game_over = snapshot.game_over;
        self.won = snapshot.won;
        self.selected = None;
        debug!("undo to history index {}", self.history.index());
        true
    }

    /// Start over: empty grid, zero score, fresh history and swap tokens.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
        self.won = false;
        self.game_over = false;
        self.history.clear();
        self.swap_tokens = INITIAL_SWAP_TOKENS;
        self.swap_mode = false;
        self.selected = None;
        self.swap_reward_granted = false;
        self.moves = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        self.seed_board();
    }

    /// Enter or leave swap mode. Returns the new mode.
    pub fn toggle_swap_mode(&mut self) -> Result<bool, SwapRejection> {
        if self.swap_mode {
            self.swap_mode = false;
            self.selected = None;
            return Ok(false);
        }
        if self.game_over {
            return Err(SwapRejection::GameOver);
        }
        if self.swap_tokens == 0 {
            return Err(SwapRejection::NoSwapsLeft);
        }
        self.swap_mode = true;
        self.selected = None;
        Ok(true)
    }

    /// Two-phase tile selection for the swap power-up.
    ///
    /// The first call records a cell; a second call on the same cell cancels
    /// the selection; a second call on another cell exchanges both values,
    /// spends a token and commits a history entry.
    pub fn select_for_swap(&mut self, row: usize, col: usize) -> Result<SwapOutcome, SwapRejection> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return Err(SwapRejection::OutOfBounds { row, col });
        }
        if self.game_over {
            return Err(SwapRejection::GameOver);
        }
        if self.swap_tokens == 0 {
            return Err(SwapRejection::NoSwapsLeft);
        }

        let Some(first) = self.selected else {
            self.selected = Some((row, col));
            return Ok(SwapOutcome::Selected { row, col });
        };

        if first == (row, col) {
            self.selected = None;
            return Ok(SwapOutcome::Deselected);
        }

        self.grid.swap(first, (row, col));
        self.swap_tokens -= 1;
        self.selected = None;
        self.swap_mode = false;

        let swap_reward = self.apply_swap_reward();
        let check = self.check_terminal();
        let snapshot = self.snapshot();
        self.history.commit(snapshot);

        debug!(
            "swapped {:?} <-> {:?}, {} swaps left",
            first,
            (row, col),
            self.swap_tokens
        );

        self.last_event = Some(GameEvent {
            swapped: true,
            won_now: check.won_now,
            game_over_now: check.game_over_now,
            swap_reward,
            ..GameEvent::default()
        });
        Ok(SwapOutcome::Swapped {
            from: first,
            to: (row, col),
        })
    }

    /// Grant extra swap tokens the first time the reward tile is on the grid.
    fn apply_swap_reward(&mut self) -> u32 {
        if self.swap_reward_granted || !self.grid.contains(SWAP_REWARD_TILE) {
            return 0;
        }
        self.swap_reward_granted = true;
        self.swap_tokens += SWAP_REWARD_TOKENS;
        info!(
            "{} tile reached: +{} swaps ({} available)",
            SWAP_REWARD_TILE, SWAP_REWARD_TOKENS, self.swap_tokens
        );
        SWAP_REWARD_TOKENS
    }

    /// Apply an engine-level action.
    ///
    /// Session actions (sound, theme, statistics) are not handled here and
    /// return false.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.move_tiles(direction),
            GameAction::Undo => self.undo(),
            GameAction::Restart => {
                self.reset();
                true
            }
            GameAction::ToggleSwap => self.toggle_swap_mode().is_ok(),
            GameAction::ToggleSound | GameAction::ToggleTheme | GameAction::ClearStats => false,
        }
    }
}

impl Default for Game<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
