//! Options-screen values
//!
//! Held in memory for the session only.

use serde::{Deserialize, Serialize};

/// Graphics quality, as offered on the options screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::High => "High",
        }
    }
}

/// Volume adjustment per key press
pub const VOLUME_STEP: f32 = 0.1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Sound volume (0.0 - 1.0)
    pub sound_volume: f32,
    pub quality: QualityPreset,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_volume: 1.0,
            quality: QualityPreset::High,
        }
    }
}

impl Settings {
    pub fn volume_up(&mut self) {
        self.set_volume(self.sound_volume + VOLUME_STEP);
    }

    pub fn volume_down(&mut self) {
        self.set_volume(self.sound_volume - VOLUME_STEP);
    }

    /// Clamped to [0, 1] and snapped to a tenth so repeated steps don't drift
    pub fn set_volume(&mut self, vol: f32) {
        self.sound_volume = ((vol.clamp(0.0, 1.0)) * 10.0).round() / 10.0;
    }

    /// Whole-percent volume for display
    pub fn volume_percent(&self) -> u32 {
        (self.sound_volume * 100.0).round() as u32
    }
}
