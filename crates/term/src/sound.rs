//! Sound cues rendered as terminal bells.
//!
//! | cue        | bells |
//! |------------|-------|
//! | `Move`     | 0     |
//! | `Merge`    | 1     |
//! | `Win`      | 2     |
//! | `GameOver` | 3     |

use std::io::{self, Write};

use crate::core::GameEvent;

const BEL: &[u8] = b"\x07";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Move,
    Merge,
    Win,
    GameOver,
}

impl SoundCue {
    /// Pick the most significant cue for an engine event.
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        if event.game_over_now {
            Some(SoundCue::GameOver)
        } else if event.won_now {
            Some(SoundCue::Win)
        } else if event.merges > 0 {
            Some(SoundCue::Merge)
        } else if event.moved || event.swapped {
            Some(SoundCue::Move)
        } else {
            None
        }
    }

    pub fn bells(&self) -> usize {
        match self {
            SoundCue::Move => 0,
            SoundCue::Merge => 1,
            SoundCue::Win => 2,
            SoundCue::GameOver => 3,
        }
    }
}

/// Writes bell characters for cues while enabled.
pub struct SoundPlayer<W: Write = io::Stdout> {
    enabled: bool,
    out: W,
}

impl SoundPlayer<io::Stdout> {
    pub fn stdout(enabled: bool) -> Self {
        Self::new(io::stdout(), enabled)
    }
}

impl<W: Write> SoundPlayer<W> {
    pub fn new(out: W, enabled: bool) -> Self {
        Self { enabled, out }
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn play(&mut self, cue: SoundCue) -> io::Result<()> {
        if !self.enabled || cue.bells() == 0 {
            return Ok(());
        }
        for _ in 0..cue.bells() {
            self.out.write_all(BEL)?;
        }
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cue_priority() {
        let mut event = GameEvent {
            moved: true,
            merges: 2,
            won_now: true,
            game_over_now: true,
            ..GameEvent::default()
        };
        assert_eq!(SoundCue::for_event(&event), Some(SoundCue::GameOver));
        event.game_over_now = false;
        assert_eq!(SoundCue::for_event(&event), Some(SoundCue::Win));
        event.won_now = false;
        assert_eq!(SoundCue::for_event(&event), Some(SoundCue::Merge));
        event.merges = 0;
        assert_eq!(SoundCue::for_event(&event), Some(SoundCue::Move));
        assert_eq!(SoundCue::for_event(&GameEvent::default()), None);
    }

    #[test]
    fn test_bells_written_only_when_enabled() {
        let mut player = SoundPlayer::new(Vec::new(), true);
        player.play(SoundCue::Win).unwrap();
        player.play(SoundCue::Move).unwrap();
        player.set_enabled(false);
        player.play(SoundCue::GameOver).unwrap();
        assert_eq!(player.into_inner(), b"\x07\x07".to_vec());
    }
}
