//! Data-driven game balance
//!
//! Every field has a default from [`crate::consts`], so a tuning document
//! only needs to name the values it overrides:
//!
//! ```json
//! { "gravity": -3000.0, "attack_damage": 20 }
//! ```

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Vertical acceleration, must be negative
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_speed: f32,
    /// Seconds the attack window stays open after a trigger
    pub attack_duration: f32,
    pub attack_damage: u32,
    pub max_health: u32,
    pub actor_width: f32,
    pub actor_height: f32,
    /// Distance of each spawn point from arena center
    pub spawn_offset: f32,
    /// Frame deltas above this are clamped before reaching the simulation
    pub max_frame_dt: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_speed: JUMP_SPEED,
            attack_duration: ATTACK_DURATION,
            attack_damage: ATTACK_DAMAGE,
            max_health: MAX_HEALTH,
            actor_width: ACTOR_WIDTH,
            actor_height: ACTOR_HEIGHT,
            spawn_offset: SPAWN_OFFSET,
            max_frame_dt: MAX_FRAME_DT,
        }
    }
}

impl Tuning {
    /// Parse a (possibly partial) JSON tuning document and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        log::info!("Loaded tuning overrides: {:?}", tuning);
        Ok(tuning)
    }

    /// Load a tuning document from disk
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("move_speed", self.move_speed),
            ("jump_speed", self.jump_speed),
            ("attack_duration", self.attack_duration),
            ("actor_width", self.actor_width),
            ("actor_height", self.actor_height),
            ("max_frame_dt", self.max_frame_dt),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{name} must be positive, got {value}")));
            }
        }
        if !(self.gravity.is_finite() && self.gravity < 0.0) {
            return Err(invalid(format!(
                "gravity must pull toward the floor, got {}",
                self.gravity
            )));
        }
        if !(self.spawn_offset.is_finite() && self.spawn_offset >= 0.0) {
            return Err(invalid(format!(
                "spawn_offset must be non-negative, got {}",
                self.spawn_offset
            )));
        }
        if self.max_health == 0 {
            return Err(invalid("max_health must be at least 1".to_string()));
        }
        if self.attack_damage > self.max_health {
            return Err(invalid(format!(
                "attack_damage {} exceeds max_health {}",
                self.attack_damage, self.max_health
            )));
        }
        Ok(())
    }
}

fn invalid(reason: String) -> Error {
    Error::InvalidTuning { reason }
}
