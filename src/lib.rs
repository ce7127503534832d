//! Duel Arena - a two-player local versus brawler
//!
//! Core modules:
//! - `sim`: Deterministic match simulation (kinematics, hits, outcome)
//! - `screens`: Screen navigator (menu, options, match, pause, match over)
//! - `input`: Key queries and the two fixed control schemes
//! - `audio`: Sound cue vocabulary and the playback gate
//! - `tuning`: Data-driven game balance
//! - `settings`: Options-screen values

pub mod audio;
pub mod error;
pub mod input;
pub mod screens;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use audio::{AudioManager, AudioSink, SoundCue};
pub use error::{Error, Result};
pub use input::{ControlScheme, InputSource, Key, KeyboardState};
pub use screens::{Action, Frame, Lifecycle, Navigator, ScreenId};
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Acceleration toward the floor (units/s²)
    pub const GRAVITY: f32 = -4500.0;
    /// Horizontal speed while a move key is held (no inertia)
    pub const MOVE_SPEED: f32 = 1200.0;
    /// Vertical launch speed of a jump
    pub const JUMP_SPEED: f32 = 2000.0;

    /// Height of the floor surface above the bottom of the viewport
    pub const FLOOR_HEIGHT: f32 = 150.0;

    /// How long the attack pose (and its damage window) lasts, in seconds
    pub const ATTACK_DURATION: f32 = 0.1;
    /// Health removed by a landed attack
    pub const ATTACK_DAMAGE: u32 = 10;
    pub const MAX_HEALTH: u32 = 100;

    /// Actor hitbox dimensions
    pub const ACTOR_WIDTH: f32 = 128.0;
    pub const ACTOR_HEIGHT: f32 = 128.0;
    /// Spawn distance from arena center for each side
    pub const SPAWN_OFFSET: f32 = 50.0;

    /// Largest frame delta forwarded to the simulation
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default viewport (matches the desktop launcher window)
    pub const VIEWPORT_WIDTH: f32 = 1920.0;
    pub const VIEWPORT_HEIGHT: f32 = 1080.0;

    /// Fade-in rate of every screen (alpha per second)
    pub const FADE_IN_RATE: f32 = 0.5;
}

/// Sanitize a frame delta: non-finite and negative values become zero.
pub fn sanitize_dt(dt: f32) -> f32 {
    if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::warn!("Discarding invalid frame delta {}", dt);
        0.0
    }
}
