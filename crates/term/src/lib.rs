//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids ratatui widgets/layout and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Redraw only the cells that changed between frames
//! - Keep tiles roughly square (7 columns by 3 rows per tile)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sound;
pub mod theme;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, SessionView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sound::{SoundCue, SoundPlayer};
pub use theme::Palette;
