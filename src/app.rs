//! Session glue between the engine, persistence and the terminal front-end.
//!
//! `App` owns one [`Game`] plus everything that outlives a single game: the
//! best score, lifetime statistics and user settings. It turns engine events
//! into persisted values, sound cues and short notices for the view.

use log::warn;
use rand::Rng;

use crate::core::{Game, GameEvent, SimpleRng, SwapOutcome, ViewSnapshot};
use crate::store::{GameStats, KeyValueStore, Persistence, Settings, StoreError};
use crate::term::{SessionView, SoundCue};
use crate::types::{Direction, GameAction, Theme, SWAP_REWARD_TILE};

pub struct App<S: KeyValueStore, R: Rng = SimpleRng> {
    game: Game<R>,
    persistence: Persistence<S>,
    settings: Settings,
    stats: GameStats,
    best_score: u32,
    notice: Option<String>,
    win_banner: bool,
    cue: Option<SoundCue>,
}

impl<S: KeyValueStore, R: Rng> App<S, R> {
    /// Load best score, settings and statistics from `persistence`.
    pub fn new(game: Game<R>, persistence: Persistence<S>) -> Self {
        let settings = persistence.settings();
        let stats = persistence.stats();
        let best_score = persistence.best_score();
        Self {
            game,
            persistence,
            settings,
            stats,
            best_score,
            notice: None,
            win_banner: false,
            cue: None,
        }
    }

    /// Override loaded settings for this session only (nothing is saved).
    pub fn override_settings(&mut self, theme: Option<Theme>, mute: bool) {
        if let Some(theme) = theme {
            self.settings.theme = theme;
        }
        if mute {
            self.settings.sound_enabled = false;
        }
    }

    pub fn game(&self) -> &Game<R> {
        &self.game
    }

    pub fn settings(&self) -> Settings {
        self.settings
    }

    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn persistence(&self) -> &Persistence<S> {
        &self.persistence
    }

    /// Sound cue produced by the last action, if sound is enabled.
    pub fn take_cue(&mut self) -> Option<SoundCue> {
        self.cue.take()
    }

    pub fn view(&self) -> ViewSnapshot {
        self.game.view()
    }

    pub fn session_view(&self) -> SessionView<'_> {
        SessionView {
            best_score: self.best_score,
            theme: self.settings.theme,
            sound_enabled: self.settings.sound_enabled,
            notice: self.notice.as_deref(),
            win_banner: self.win_banner,
            games_played: self.stats.total_games,
            games_won: self.stats.games_won,
        }
    }

    /// Apply one action. Returns true when anything visible changed.
    pub fn handle(&mut self, action: GameAction) -> bool {
        self.notice = None;
        self.win_banner = false;
        self.cue = None;

        match action {
            GameAction::Move(direction) => {
                let moved = self.game.move_tiles(direction);
                self.absorb_event();
                moved
            }
            GameAction::Undo => {
                if !self.game.undo() {
                    self.notice = Some("Nothing to undo".to_string());
                }
                true
            }
            GameAction::Restart => {
                self.game.reset();
                true
            }
            GameAction::ToggleSwap => {
                if let Err(rejection) = self.game.toggle_swap_mode() {
                    self.notice = Some(rejection.to_string());
                }
                true
            }
            GameAction::ToggleSound => {
                self.settings.sound_enabled = !self.settings.sound_enabled;
                self.notice = Some(
                    if self.settings.sound_enabled {
                        "Sound on"
                    } else {
                        "Sound off"
                    }
                    .to_string(),
                );
                let result = self.persistence.save_settings(self.settings);
                log_save("settings", result);
                true
            }
            GameAction::ToggleTheme => {
                self.settings.theme = self.settings.theme.toggled();
                let result = self.persistence.save_settings(self.settings);
                log_save("settings", result);
                true
            }
            GameAction::ClearStats => {
                self.stats.clear();
                self.notice = Some("Statistics cleared".to_string());
                let result = self.persistence.clear_stats();
                log_save("stats", result);
                true
            }
        }
    }

    /// A swipe is a move in the swipe's direction.
    pub fn swipe(&mut self, direction: Direction) -> bool {
        self.handle(GameAction::Move(direction))
    }

    /// Route a board click to the swap power-up. Ignored outside swap mode.
    pub fn click(&mut self, row: usize, col: usize) -> bool {
        if !self.game.swap_mode() {
            return false;
        }
        self.notice = None;
        self.cue = None;

        match self.game.select_for_swap(row, col) {
            Ok(SwapOutcome::Swapped { .. }) => {
                self.absorb_event();
                true
            }
            Ok(_) => true,
            Err(rejection) => {
                self.notice = Some(rejection.to_string());
                true
            }
        }
    }

    fn absorb_event(&mut self) {
        let Some(event) = self.game.take_last_event() else {
            return;
        };

        let score = self.game.score();
        if score > self.best_score {
            self.best_score = score;
            let result = self.persistence.save_best_score(score);
            log_save("best score", result);
        }

        if event.won_now {
            self.win_banner = true;
        }
        if event.swap_reward > 0 {
            self.notice = Some(format!(
                "{} tile! +{} swaps",
                SWAP_REWARD_TILE, event.swap_reward
            ));
        }
        if event.game_over_now {
            self.record_finished_game();
        }
        self.queue_cue(&event);
    }

    fn record_finished_game(&mut self) {
        self.stats.record_game(
            self.game.score(),
            self.game.won(),
            self.game.highest_tile(),
            self.game.moves(),
        );
        let result = self.persistence.save_stats(&self.stats);
        log_save("stats", result);
    }

    fn queue_cue(&mut self, event: &GameEvent) {
        if self.settings.sound_enabled {
            self.cue = SoundCue::for_event(event);
        }
    }
}

fn log_save(what: &str, result: Result<(), StoreError>) {
    if let Err(e) = result {
        warn!("failed to save {}: {}", what, e);
    }
}
