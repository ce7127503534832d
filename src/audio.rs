//! Sound cues and the playback gate
//!
//! The core never plays audio itself: simulation and screens hand back
//! [`SoundCue`]s, and the driver forwards them through an [`AudioManager`]
//! to whatever backend implements [`AudioSink`].

use serde::{Deserialize, Serialize};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SoundCue {
    /// Actor left the floor
    Jump,
    /// Attack triggered
    Swing,
    /// Attack landed
    Damage,
    /// Match decided
    MatchEnd,
    /// Menu button pressed
    ButtonClick,
    /// Pointer moved onto a menu button
    ButtonHover,
}

/// Playback backend (fire-and-forget)
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue, volume: f32);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: SoundCue, volume: f32) {
        log::debug!("sfx {:?} @ {:.2}", cue, volume);
    }
}

/// Volume and mute gate in front of a sink
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
        }
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    pub fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play(cue, vol);
    }

    /// Play a frame's worth of cues in order
    pub fn play_all(&mut self, cues: &[SoundCue]) {
        for &cue in cues {
            self.play(cue);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
