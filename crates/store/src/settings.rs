use crate::types::Theme;

/// User preferences that survive restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Settings {
    pub sound_enabled: bool,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            theme: Theme::Light,
        }
    }
}
