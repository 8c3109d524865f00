//! TUI 2048 (workspace facade crate).
//!
//! This package exposes `tui_2048::{core,input,store,term,types}` while the
//! implementation lives in dedicated crates under `crates/`. The [`app`]
//! module ties them together into one playable session.

pub mod app;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_store as store;
pub use tui_2048_term as term;
pub use tui_2048_types as types;

pub use app::App;
