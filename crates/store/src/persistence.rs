//! Typed access to the persisted values.

use log::warn;

use crate::error::Result;
use crate::kv::KeyValueStore;
use crate::settings::Settings;
use crate::stats::GameStats;
use crate::types::Theme;

pub const BEST_SCORE_KEY: &str = "2048-best-score";
pub const STATS_KEY: &str = "2048-game-stats";
pub const SOUND_KEY: &str = "2048-sound-enabled";
pub const THEME_KEY: &str = "2048-theme";

/// Reads and writes scores, statistics and settings through a [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct Persistence<S> {
    store: S,
}

impl<S: KeyValueStore> Persistence<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    /// Stored best score, `0` when absent or malformed.
    pub fn best_score(&self) -> u32 {
        match self.store.get(BEST_SCORE_KEY) {
            None => 0,
            Some(raw) => raw.trim().parse().unwrap_or_else(|e| {
                warn!("invalid best score {:?}: {}", raw, e);
                0
            }),
        }
    }

    pub fn save_best_score(&mut self, score: u32) -> Result<()> {
        self.store.set(BEST_SCORE_KEY, &score.to_string())
    }

    /// Sound is on unless explicitly stored as `false`.
    pub fn settings(&self) -> Settings {
        let defaults = Settings::default();
        let sound_enabled = match self.store.get(SOUND_KEY).as_deref() {
            Some("false") => false,
            Some("true") | None => true,
            Some(other) => {
                warn!("invalid sound setting {:?}", other);
                defaults.sound_enabled
            }
        };
        let theme = match self.store.get(THEME_KEY) {
            None => defaults.theme,
            Some(raw) => Theme::from_str(&raw).unwrap_or_else(|| {
                warn!("unknown theme {:?}", raw);
                defaults.theme
            }),
        };
        Settings {
            sound_enabled,
            theme,
        }
    }

    pub fn save_settings(&mut self, settings: Settings) -> Result<()> {
        self.store
            .set(SOUND_KEY, if settings.sound_enabled { "true" } else { "false" })?;
        self.store.set(THEME_KEY, settings.theme.as_str())
    }

    /// Stored statistics, zeroed when absent or malformed.
    pub fn stats(&self) -> GameStats {
        match self.store.get(STATS_KEY) {
            None => GameStats::default(),
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("invalid game stats: {}", e);
                GameStats::default()
            }),
        }
    }

    pub fn save_stats(&mut self, stats: &GameStats) -> Result<()> {
        let json = serde_json::to_string(stats)?;
        self.store.set(STATS_KEY, &json)
    }

    pub fn clear_stats(&mut self) -> Result<()> {
        self.store.remove(STATS_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kv::MemoryStore;

    fn with(entries: &[(&str, &str)]) -> Persistence<MemoryStore> {
        let mut store = MemoryStore::new();
        for (k, v) in entries {
            store.set(k, v).unwrap();
        }
        Persistence::new(store)
    }

    #[test]
    fn test_defaults_when_empty() {
        let p = with(&[]);
        assert_eq!(p.best_score(), 0);
        assert_eq!(p.settings(), Settings::default());
        assert_eq!(p.stats(), GameStats::default());
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let p = with(&[
            (BEST_SCORE_KEY, "lots"),
            (SOUND_KEY, "maybe"),
            (THEME_KEY, "solarized"),
            (STATS_KEY, "[1,2"),
        ]);
        assert_eq!(p.best_score(), 0);
        assert_eq!(p.settings(), Settings::default());
        assert_eq!(p.stats(), GameStats::default());
    }

    #[test]
    fn test_settings_round_trip() {
        let mut p = with(&[]);
        let settings = Settings {
            sound_enabled: false,
            theme: Theme::Dark,
        };
        p.save_settings(settings).unwrap();
        assert_eq!(p.store().get(SOUND_KEY).as_deref(), Some("false"));
        assert_eq!(p.store().get(THEME_KEY).as_deref(), Some("dark"));
        assert_eq!(p.settings(), settings);
    }

    #[test]
    fn test_stats_saved_and_cleared() {
        let mut p = with(&[]);
        let mut stats = GameStats::default();
        stats.record_game(512, false, 64, 80);
        p.save_stats(&stats).unwrap();
        assert_eq!(p.stats(), stats);

        p.clear_stats().unwrap();
        assert_eq!(p.stats(), GameStats::default());
    }
}
