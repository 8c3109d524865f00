//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, persistence, terminal rendering).
//!
//! # Grid
//!
//! The playfield is a fixed 4x4 grid of tile values:
//!
//! - **Size**: 4 rows by 4 columns, indexed `(row, col)` from the top-left
//! - **Empty**: a cell value of `0`
//! - **Tiles**: powers of two, starting at 2
//!
//! # Rule Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `WIN_TILE` | 2048 | First tile of this value wins the game |
//! | `HISTORY_LIMIT` | 50 | Snapshots retained for undo |
//! | `SPAWN_FOUR_PERCENT` | 10 | Chance a spawned tile is a 4 |
//! | `INITIAL_SWAP_TOKENS` | 1 | Swaps available at game start |
//! | `SWAP_REWARD_TILE` | 256 | Tile value that earns more swaps |
//! | `SWAP_REWARD_TOKENS` | 2 | Swaps granted by the reward |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, Theme, GRID_SIZE};
//!
//! // Parse a direction (case-insensitive)
//! assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
//!
//! // Opposite direction
//! assert_eq!(Direction::Up.opposite(), Direction::Down);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! // Theme toggling
//! assert_eq!(Theme::Light.toggled(), Theme::Dark);
//!
//! assert_eq!(GRID_SIZE, 4);
//! ```

/// Grid side length in cells (4x4)
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the grid
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that marks the game as won
pub const WIN_TILE: u32 = 2048;

/// Maximum number of snapshots kept in the undo history
pub const HISTORY_LIMIT: usize = 50;

/// Chance (in percent) that a spawned tile is a 4 instead of a 2
pub const SPAWN_FOUR_PERCENT: u32 = 10;

/// Number of tiles placed on an empty grid when a game starts
pub const START_TILES: usize = 2;

/// Swap tokens available at the start of every game
pub const INITIAL_SWAP_TOKENS: u32 = 1;

/// Tile value whose appearance grants extra swap tokens
pub const SWAP_REWARD_TILE: u32 = 256;

/// Swap tokens granted when the reward tile appears
pub const SWAP_REWARD_TOKENS: u32 = 2;

/// Default minimum drag distance (in terminal columns) for a swipe
pub const DEFAULT_SWIPE_THRESHOLD: u16 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_constants() {
        assert_eq!(CELL_COUNT, 16);
        assert_eq!(WIN_TILE, 2048);
        assert_eq!(HISTORY_LIMIT, 50);
        assert_eq!(SPAWN_FOUR_PERCENT, 10);
        assert_eq!(INITIAL_SWAP_TOKENS, 1);
        assert_eq!(SWAP_REWARD_TILE, 256);
        assert_eq!(SWAP_REWARD_TOKENS, 2);
    }

    #[test]
    fn test_direction_round_trips_through_str() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
        assert_eq!(Direction::from_str("sideways"), None);
    }

    #[test]
    fn test_action_parsing_accepts_camel_case() {
        assert_eq!(
            GameAction::from_str("moveLeft"),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(GameAction::from_str("UNDO"), Some(GameAction::Undo));
        assert_eq!(GameAction::from_str("toggleSwap"), Some(GameAction::ToggleSwap));
        assert_eq!(GameAction::from_str("fly"), None);
    }

    #[test]
    fn test_theme_defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::from_str("DARK"), Some(Theme::Dark));
        assert_eq!(Theme::Dark.toggled().as_str(), "light");
    }
}

/// The four slide directions
///
/// A move compacts every line toward the named edge of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("up"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("DOWN"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// The direction pointing the other way.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// True for `Left` and `Right`.
    pub fn is_horizontal(&self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

/// Game actions that can be applied to the engine or the session
///
/// These are produced by the keyboard and pointer mappings and consumed
/// by the game and the application shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide all tiles in a direction
    Move(Direction),
    /// Step back one snapshot in the history
    Undo,
    /// Start a new game
    Restart,
    /// Enter or leave tile-swap mode
    ToggleSwap,
    /// Mute or unmute sound cues
    ToggleSound,
    /// Switch between light and dark themes
    ToggleTheme,
    /// Reset the persisted statistics
    ClearStats,
}

impl GameAction {
    /// Parse action from a camelCase string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::Move(Direction::Right)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "undo" => Some(GameAction::Undo),
            "restart" => Some(GameAction::Restart),
            "toggleswap" => Some(GameAction::ToggleSwap),
            "togglesound" => Some(GameAction::ToggleSound),
            "toggletheme" => Some(GameAction::ToggleTheme),
            "clearstats" => Some(GameAction::ClearStats),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Undo => "undo",
            GameAction::Restart => "restart",
            GameAction::ToggleSwap => "toggleSwap",
            GameAction::ToggleSound => "toggleSound",
            GameAction::ToggleTheme => "toggleTheme",
            GameAction::ClearStats => "clearStats",
        }
    }
}

/// Coarse game status derived from the engine flags
///
/// - **Playing**: moves are accepted
/// - **Won**: the win tile has been reached; play continues
/// - **GameOver**: no empty cell and no merge left (terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    Playing,
    Won,
    GameOver,
}

/// Colour theme for the terminal front-end
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse theme from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme.
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// A grid cell value: `0` when empty, otherwise a power of two.
pub type Tile = u32;
