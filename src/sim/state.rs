//! Match state and core simulation types
//!
//! Everything a running match needs lives here; the arena and tuning are
//! captured at construction and never change for the match's lifetime.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::AxisAlignedBox;
use crate::consts::{FLOOR_HEIGHT, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use crate::error::{Error, Result};
use crate::tuning::Tuning;

/// Which combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    PlayerOne,
    PlayerTwo,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::PlayerOne, Side::PlayerTwo];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Side::PlayerOne => 0,
            Side::PlayerTwo => 1,
        }
    }

    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::PlayerOne => Side::PlayerTwo,
            Side::PlayerTwo => Side::PlayerOne,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Side::PlayerOne => "Player 1",
            Side::PlayerTwo => "Player 2",
        }
    }
}

/// Arena geometry, derived from the presentation viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    /// Floor surface; actors rest with `pos.y == floor_height`
    pub floor_height: f32,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            floor_height: FLOOR_HEIGHT,
        }
    }
}

impl Arena {
    pub fn new(width: f32, height: f32, floor_height: f32) -> Result<Self> {
        let arena = Self {
            width,
            height,
            floor_height,
        };
        arena.validate()?;
        Ok(arena)
    }

    fn validate(&self) -> Result<()> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(invalid_arena(format!("width must be positive, got {}", self.width)));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(invalid_arena(format!("height must be positive, got {}", self.height)));
        }
        if !(self.floor_height.is_finite()
            && self.floor_height >= 0.0
            && self.floor_height < self.height)
        {
            return Err(invalid_arena(format!(
                "floor {} must lie within [0, {})",
                self.floor_height, self.height
            )));
        }
        Ok(())
    }

    /// Check that actors of the tuned size fit side by side horizontally
    pub fn check_fits(&self, tuning: &Tuning) -> Result<()> {
        self.validate()?;
        if tuning.actor_width >= self.width {
            return Err(invalid_arena(format!(
                "width {} cannot hold an actor {} wide",
                self.width, tuning.actor_width
            )));
        }
        let max_x = self.max_x(tuning.actor_width);
        for side in Side::BOTH {
            let x = self.spawn_point(side, tuning.spawn_offset).x;
            if !(0.0..=max_x).contains(&x) {
                return Err(invalid_arena(format!(
                    "{} spawns at x {} outside [0, {}]",
                    side.label(),
                    x,
                    max_x
                )));
            }
        }
        Ok(())
    }

    /// Rightmost legal `pos.x` for an actor of the given width
    #[inline]
    pub fn max_x(&self, actor_width: f32) -> f32 {
        (self.width - actor_width).max(0.0)
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Spawn point: player one left of center, player two right of it
    pub fn spawn_point(&self, side: Side, offset: f32) -> Vec2 {
        let x = match side {
            Side::PlayerOne => self.center_x() - offset,
            Side::PlayerTwo => self.center_x() + offset,
        };
        Vec2::new(x, self.floor_height)
    }
}

fn invalid_arena(reason: String) -> Error {
    Error::InvalidArena { reason }
}

/// One combatant
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    pub side: Side,
    /// Bottom-left origin of the sprite and hitbox
    pub pos: Vec2,
    pub vel: Vec2,
    pub health: u32,
    /// Attack pose is showing and the hit has not landed yet
    pub attacking: bool,
    /// Seconds left in the current attack window
    pub attack_time: f32,
    /// Mirrors `pos` after every step; size fixed for the actor's lifetime
    pub hitbox: AxisAlignedBox,
}

impl Actor {
    pub fn new(side: Side, spawn: Vec2, tuning: &Tuning) -> Self {
        Self {
            side,
            pos: spawn,
            vel: Vec2::ZERO,
            health: tuning.max_health,
            attacking: false,
            attack_time: 0.0,
            hitbox: AxisAlignedBox::new(spawn.x, spawn.y, tuning.actor_width, tuning.actor_height),
        }
    }

    /// Standing on the floor. The floor clamp snaps `pos.y` to exactly
    /// `floor_height`, so nothing ever rests below it.
    #[inline]
    pub fn is_grounded(&self, floor_height: f32) -> bool {
        self.pos.y <= floor_height
    }

    #[inline]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Subtract damage, saturating at zero. Returns remaining health.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_sub(amount);
        self.health
    }

    /// Open (or reopen) the attack window
    pub fn trigger_attack(&mut self, duration: f32) {
        self.attacking = true;
        self.attack_time = duration;
    }

    /// Count down the attack window; the pose drops once it has run out
    pub fn tick_attack(&mut self, dt: f32) {
        if self.attack_time > 0.0 {
            self.attack_time -= dt;
        } else {
            self.attacking = false;
        }
    }

    #[inline]
    pub fn sync_hitbox(&mut self) {
        self.hitbox.set_position(self.pos);
    }
}

/// Terminal result of a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Side),
    Draw,
}

impl Outcome {
    /// Decide from the two health values; `None` while both still stand
    pub fn judge(one: &Actor, two: &Actor) -> Option<Outcome> {
        match (one.is_defeated(), two.is_defeated()) {
            (true, true) => Some(Outcome::Draw),
            (true, false) => Some(Outcome::Winner(two.side)),
            (false, true) => Some(Outcome::Winner(one.side)),
            (false, false) => None,
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Outcome::Winner(Side::PlayerOne) => "Character 1 Wins!",
            Outcome::Winner(Side::PlayerTwo) => "Character 2 Wins!",
            Outcome::Draw => "DRAW",
        }
    }
}

/// Things that happened during a step, in order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum MatchEvent {
    Hit {
        attacker: Side,
        defender: Side,
        damage: u32,
        remaining: u32,
    },
    Defeated(Side),
    MatchOver(Outcome),
}

/// Complete match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchState {
    pub arena: Arena,
    pub tuning: Tuning,
    /// Indexed by [`Side::index`]
    pub actors: [Actor; 2],
    outcome: Option<Outcome>,
}

impl MatchState {
    pub fn new(arena: Arena, tuning: Tuning) -> Result<Self> {
        tuning.validate()?;
        arena.check_fits(&tuning)?;
        Ok(Self::spawn(arena, tuning))
    }

    /// Build without validation; callers have already checked the pair.
    pub(crate) fn spawn(arena: Arena, tuning: Tuning) -> Self {
        let actors = Side::BOTH
            .map(|side| Actor::new(side, arena.spawn_point(side, tuning.spawn_offset), &tuning));
        Self {
            arena,
            tuning,
            actors,
            outcome: None,
        }
    }

    /// Restore both actors to their spawn points at full health and clear
    /// the outcome. Arena and tuning are kept.
    pub fn reset(&mut self) {
        *self = Self::spawn(self.arena, self.tuning);
        log::info!("Match reset");
    }

    #[inline]
    pub fn actor(&self, side: Side) -> &Actor {
        &self.actors[side.index()]
    }

    #[inline]
    pub fn actor_mut(&mut self, side: Side) -> &mut Actor {
        &mut self.actors[side.index()]
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Outcome text, empty while the match is running
    pub fn message(&self) -> &'static str {
        self.outcome.map(Outcome::message).unwrap_or("")
    }

    /// Latch the outcome. Returns true only the first time.
    pub(crate) fn conclude(&mut self, outcome: Outcome) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        self.outcome = Some(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> MatchState {
        MatchState::new(Arena::default(), Tuning::default()).unwrap()
    }

    #[test]
    fn test_spawn_symmetric_about_center() {
        let state = fresh();
        let one = state.actor(Side::PlayerOne);
        let two = state.actor(Side::PlayerTwo);
        assert_eq!(one.pos, Vec2::new(910.0, FLOOR_HEIGHT));
        assert_eq!(two.pos, Vec2::new(1010.0, FLOOR_HEIGHT));
        assert_eq!(one.health, 100);
        assert_eq!(one.hitbox.pos, one.pos);
        assert!(!state.is_over());
        assert_eq!(state.message(), "");
    }

    #[test]
    fn test_outcome_judgement() {
        let state = fresh();
        let mut one = *state.actor(Side::PlayerOne);
        let mut two = *state.actor(Side::PlayerTwo);
        assert_eq!(Outcome::judge(&one, &two), None);

        two.health = 0;
        assert_eq!(Outcome::judge(&one, &two), Some(Outcome::Winner(Side::PlayerOne)));

        one.health = 0;
        assert_eq!(Outcome::judge(&one, &two), Some(Outcome::Draw));

        two.health = 40;
        assert_eq!(Outcome::judge(&one, &two), Some(Outcome::Winner(Side::PlayerTwo)));
    }

    #[test]
    fn test_conclude_latches_once() {
        let mut state = fresh();
        assert!(state.conclude(Outcome::Draw));
        assert!(!state.conclude(Outcome::Winner(Side::PlayerOne)));
        assert_eq!(state.outcome(), Some(Outcome::Draw));
        assert_eq!(state.message(), "DRAW");
    }

    #[test]
    fn test_damage_saturates() {
        let mut actor = *fresh().actor(Side::PlayerOne);
        actor.health = 5;
        assert_eq!(actor.take_damage(10), 0);
        assert!(actor.is_defeated());
    }

    #[test]
    fn test_reset_restores_spawn() {
        let mut state = fresh();
        let pristine = state.actors;
        {
            let one = state.actor_mut(Side::PlayerOne);
            one.health = 0;
            one.pos = Vec2::new(3.0, 600.0);
            one.vel = Vec2::new(1200.0, -50.0);
            one.trigger_attack(0.1);
        }
        state.conclude(Outcome::Winner(Side::PlayerTwo));

        state.reset();
        assert_eq!(state.actors, pristine);
        assert!(!state.is_over());
        assert_eq!(state.message(), "");
    }

    #[test]
    fn test_arena_rejects_bad_dimensions() {
        assert!(Arena::new(0.0, 1080.0, 150.0).is_err());
        assert!(Arena::new(1920.0, 1080.0, 2000.0).is_err());
        assert!(Arena::new(f32::NAN, 1080.0, 150.0).is_err());
        let narrow = Arena::new(100.0, 1080.0, 150.0).unwrap();
        assert!(MatchState::new(narrow, Tuning::default()).is_err());
    }

    #[test]
    fn test_spawn_must_lie_inside_arena() {
        // Wide enough for an actor, too narrow for the spawn offsets
        let cramped = Arena::new(300.0, 1080.0, 150.0).unwrap();
        assert!(matches!(
            MatchState::new(cramped, Tuning::default()),
            Err(Error::InvalidArena { .. })
        ));

        let tuning = Tuning {
            spawn_offset: 0.0,
            ..Tuning::default()
        };
        let state = MatchState::new(cramped, tuning).unwrap();
        for actor in &state.actors {
            assert!(actor.pos.x <= cramped.max_x(tuning.actor_width));
        }
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Winner(Side::PlayerOne).message(), "Character 1 Wins!");
        assert_eq!(Outcome::Winner(Side::PlayerTwo).message(), "Character 2 Wins!");
        assert_eq!(Outcome::Draw.message(), "DRAW");
    }

    #[test]
    fn test_attack_window_countdown() {
        let mut actor = *fresh().actor(Side::PlayerTwo);
        actor.trigger_attack(0.1);
        actor.tick_attack(0.06);
        assert!(actor.attacking);
        actor.tick_attack(0.06);
        // Timer is spent but the pose drops on the following tick
        assert!(actor.attacking);
        actor.tick_attack(0.06);
        assert!(!actor.attacking);
    }
}
