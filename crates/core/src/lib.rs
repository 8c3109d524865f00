//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board engine: the grid, the move/merge rules, tile
//! spawning, win/loss detection, the bounded undo history and the tile-swap
//! power-up. It has **no dependencies** on terminals, files or the clock:
//!
//! - **Deterministic**: randomness is injected; the same seed replays the same game
//! - **Testable**: every rule is reachable from a plain `Game` value
//! - **Portable**: runs headless, in the terminal front-end, or in benches
//!
//! # Module Structure
//!
//! - [`grid`]: 4x4 tile matrix with slide/merge and random spawning
//! - [`game_state`]: the `Game` state machine (move, undo, reset, swap)
//! - [`history`]: fixed-capacity undo stack of snapshots
//! - [`rng`]: `SimpleRng`, the default seedable random source
//! - [`snapshot`]: immutable state copies for history and renderers
//!
//! # Game Rules
//!
//! - **Move**: every line slides toward the chosen edge; equal neighbours merge
//!   once per move in row or column order, and the merged value is scored
//! - **Spawn**: after a move that changed the grid, a 2 (90%) or 4 (10%) appears
//!   on a random empty cell
//! - **Win**: the first 2048 tile sets the won flag; play continues
//! - **Game over**: full grid with no adjacent equal pair
//! - **Undo**: up to 50 snapshots; a new move after undo drops the redo tail
//! - **Swap**: exchange two tiles for one token; the first 256 tile of a game
//!   earns two more tokens
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Game;
//! use tui_2048_types::{Direction, GameAction};
//!
//! let mut game = Game::new(12345);
//! assert_eq!(game.grid().empty_count(), 14);
//!
//! // Try every direction; at least one changes a fresh grid.
//! let moved = Direction::ALL.iter().any(|&d| game.apply_action(GameAction::Move(d)));
//! assert!(moved);
//! assert!(game.can_undo());
//!
//! game.undo();
//! assert!(!game.can_undo());
//! ```

pub mod game_state;
pub mod grid;
pub mod history;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use game_state::{Game, GameEvent, SwapOutcome, SwapRejection, TerminalCheck};
pub use grid::{slide_line, Grid, LineSlide, ShiftResult};
pub use history::History;
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, ViewSnapshot};
