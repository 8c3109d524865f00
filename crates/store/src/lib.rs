//! Persistence module - key-value storage for scores, statistics and settings
//!
//! The game only ever persists a handful of small values under fixed keys.
//! Everything goes through the [`KeyValueStore`] trait so the session can run
//! against a JSON file on disk or a throwaway in-memory map.
//!
//! Loading never fails: missing or malformed values fall back to defaults and
//! are logged. Saving reports [`StoreError`] to the caller.
//!
//! # Example
//!
//! ```
//! use tui_2048_store::{MemoryStore, Persistence};
//!
//! let mut persistence = Persistence::new(MemoryStore::new());
//! assert_eq!(persistence.best_score(), 0);
//!
//! persistence.save_best_score(2048).unwrap();
//! assert_eq!(persistence.best_score(), 2048);
//! ```

pub mod error;
pub mod kv;
pub mod persistence;
pub mod settings;
pub mod stats;

pub use tui_2048_types as types;

pub use error::StoreError;
pub use kv::{JsonFileStore, KeyValueStore, MemoryStore};
pub use persistence::{Persistence, BEST_SCORE_KEY, SOUND_KEY, STATS_KEY, THEME_KEY};
pub use settings::Settings;
pub use stats::GameStats;
