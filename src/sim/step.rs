//! Per-frame simulation step
//!
//! Advances both actors by one frame of the given length: kinematics first,
//! then controls, then hit resolution and the outcome check.

use super::state::{Actor, Arena, MatchEvent, MatchState, Outcome, Side};
use crate::audio::SoundCue;
use crate::input::{ControlScheme, InputSource};
use crate::sanitize_dt;
use crate::tuning::Tuning;

/// One actor's controls for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActorInput {
    /// Move-left held
    pub left: bool,
    /// Move-right held
    pub right: bool,
    /// Jump pressed this frame (rising edge)
    pub jump: bool,
    /// Attack pressed this frame (rising edge)
    pub attack: bool,
}

impl ActorInput {
    pub fn poll(scheme: &ControlScheme, source: &dyn InputSource) -> Self {
        Self {
            left: source.is_down(scheme.left),
            right: source.is_down(scheme.right),
            jump: source.is_just_pressed(scheme.jump),
            attack: source.is_just_pressed(scheme.attack),
        }
    }
}

/// Input commands for both actors, indexed by [`Side::index`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepInput {
    pub actors: [ActorInput; 2],
}

impl StepInput {
    /// Read both fixed control schemes
    pub fn poll(source: &dyn InputSource) -> Self {
        Self {
            actors: ControlScheme::PAIR.map(|scheme| ActorInput::poll(&scheme, source)),
        }
    }

    /// Replace one side's controls
    pub fn with(mut self, side: Side, input: ActorInput) -> Self {
        self.actors[side.index()] = input;
        self
    }

    #[inline]
    pub fn get(&self, side: Side) -> &ActorInput {
        &self.actors[side.index()]
    }
}

/// What a step produced
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Both actors after the step, for rendering
    pub actors: [Actor; 2],
    pub outcome: Option<Outcome>,
    pub events: Vec<MatchEvent>,
    /// Sound cues in emission order
    pub cues: Vec<SoundCue>,
}

/// Advance the match by one frame.
///
/// Negative or non-finite `dt` counts as zero; large values are taken as-is.
/// A finished match is frozen and yields no events.
pub fn step(state: &mut MatchState, input: &StepInput, dt: f32) -> StepResult {
    let dt = sanitize_dt(dt);
    let mut events = Vec::new();
    let mut cues = Vec::new();

    if state.is_over() {
        return StepResult {
            actors: state.actors,
            outcome: state.outcome(),
            events,
            cues,
        };
    }

    let arena = state.arena;
    let tuning = state.tuning;

    for actor in &mut state.actors {
        integrate(actor, &arena, &tuning, dt);
    }

    for side in Side::BOTH {
        let actor = state.actor_mut(side);
        apply_controls(actor, input.get(side), &arena, &tuning, dt, &mut cues);
    }

    let health_before = state.actors.map(|a| a.health);
    {
        let [one, two] = &mut state.actors;
        resolve_hit(one, two, tuning.attack_damage, &mut events, &mut cues);
        resolve_hit(two, one, tuning.attack_damage, &mut events, &mut cues);
    }
    for side in Side::BOTH {
        let actor = state.actor(side);
        if actor.is_defeated() && health_before[side.index()] > 0 {
            log::info!("{} defeated", side.label());
            events.push(MatchEvent::Defeated(side));
        }
    }

    let [one, two] = &state.actors;
    if let Some(outcome) = Outcome::judge(one, two) {
        if state.conclude(outcome) {
            log::info!("Match over: {}", outcome.message());
            events.push(MatchEvent::MatchOver(outcome));
            cues.push(SoundCue::MatchEnd);
        }
    }

    StepResult {
        actors: state.actors,
        outcome: state.outcome(),
        events,
        cues,
    }
}

/// Gravity, semi-implicit Euler integration, floor and wall clamps
fn integrate(actor: &mut Actor, arena: &Arena, tuning: &Tuning, dt: f32) {
    actor.vel.y += tuning.gravity * dt;
    actor.pos += actor.vel * dt;

    if actor.pos.y <= arena.floor_height {
        actor.pos.y = arena.floor_height;
        actor.vel.y = 0.0;
    }

    actor.pos.x = actor.pos.x.clamp(0.0, arena.max_x(tuning.actor_width));
    actor.sync_hitbox();
}

fn apply_controls(
    actor: &mut Actor,
    input: &ActorInput,
    arena: &Arena,
    tuning: &Tuning,
    dt: f32,
    cues: &mut Vec<SoundCue>,
) {
    // No inertia: velocity snaps to the held direction
    actor.vel.x = if input.left {
        -tuning.move_speed
    } else if input.right {
        tuning.move_speed
    } else {
        0.0
    };

    if input.jump && actor.is_grounded(arena.floor_height) {
        actor.vel.y = tuning.jump_speed;
        cues.push(SoundCue::Jump);
    }

    // Re-triggering mid-swing restarts the window
    if input.attack {
        actor.trigger_attack(tuning.attack_duration);
        cues.push(SoundCue::Swing);
    }

    actor.tick_attack(dt);
}

/// Land the attacker's swing on the defender if their hitboxes overlap.
/// A landed swing is consumed so it cannot hit again.
fn resolve_hit(
    attacker: &mut Actor,
    defender: &mut Actor,
    damage: u32,
    events: &mut Vec<MatchEvent>,
    cues: &mut Vec<SoundCue>,
) {
    if !(attacker.attacking && attacker.hitbox.overlaps(&defender.hitbox)) {
        return;
    }
    let remaining = defender.take_damage(damage);
    attacker.attacking = false;
    log::debug!(
        "{} hit {} for {} ({} left)",
        attacker.side.label(),
        defender.side.label(),
        damage,
        remaining
    );
    events.push(MatchEvent::Hit {
        attacker: attacker.side,
        defender: defender.side,
        damage,
        remaining,
    });
    cues.push(SoundCue::Damage);
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::consts::*;
    use crate::input::{Key, KeyboardState};

    fn fresh() -> MatchState {
        MatchState::new(Arena::default(), Tuning::default()).unwrap()
    }

    fn press(side: Side, input: ActorInput) -> StepInput {
        StepInput::default().with(side, input)
    }

    /// Park player two out of reach
    fn separate(state: &mut MatchState) {
        let two = state.actor_mut(Side::PlayerTwo);
        two.pos.x = 1700.0;
        two.sync_hitbox();
    }

    #[test]
    fn test_floor_clamp_after_large_step() {
        let mut state = fresh();
        state.actor_mut(Side::PlayerOne).pos.y = FLOOR_HEIGHT + 10.0;

        step(&mut state, &StepInput::default(), 1.0);

        let one = state.actor(Side::PlayerOne);
        assert_eq!(one.pos.y, FLOOR_HEIGHT);
        assert_eq!(one.vel.y, 0.0);
    }

    #[test]
    fn test_airborne_integration() {
        let mut state = fresh();
        state.actor_mut(Side::PlayerOne).pos.y = FLOOR_HEIGHT + 500.0;

        step(&mut state, &StepInput::default(), 0.1);

        let one = state.actor(Side::PlayerOne);
        // Velocity is updated before position
        assert!((one.vel.y - (-450.0)).abs() < 1e-3);
        assert!((one.pos.y - (FLOOR_HEIGHT + 455.0)).abs() < 1e-3);
        assert_eq!(one.hitbox.pos, one.pos);
    }

    #[test]
    fn test_horizontal_velocity_snaps() {
        let mut state = fresh();
        let left = ActorInput {
            left: true,
            ..Default::default()
        };

        step(&mut state, &press(Side::PlayerOne, left), 0.1);
        let one = state.actor(Side::PlayerOne);
        assert_eq!(one.vel.x, -MOVE_SPEED);
        // Position moves on the following frame
        assert_eq!(one.pos.x, 910.0);

        step(&mut state, &press(Side::PlayerOne, left), 0.1);
        assert!((state.actor(Side::PlayerOne).pos.x - 790.0).abs() < 1e-3);

        step(&mut state, &StepInput::default(), 0.1);
        assert_eq!(state.actor(Side::PlayerOne).vel.x, 0.0);
    }

    #[test]
    fn test_left_wins_over_right() {
        let mut state = fresh();
        let both = ActorInput {
            left: true,
            right: true,
            ..Default::default()
        };
        step(&mut state, &press(Side::PlayerTwo, both), 0.016);
        assert_eq!(state.actor(Side::PlayerTwo).vel.x, -MOVE_SPEED);
    }

    #[test]
    fn test_horizontal_bounds() {
        let mut state = fresh();
        state.actor_mut(Side::PlayerOne).pos.x = -50.0;
        state.actor_mut(Side::PlayerTwo).pos.x = 5000.0;

        step(&mut state, &StepInput::default(), 0.016);

        assert_eq!(state.actor(Side::PlayerOne).pos.x, 0.0);
        assert_eq!(
            state.actor(Side::PlayerTwo).pos.x,
            VIEWPORT_WIDTH - ACTOR_WIDTH
        );
    }

    #[test]
    fn test_jump_requires_ground() {
        let mut state = fresh();
        let jump = ActorInput {
            jump: true,
            ..Default::default()
        };

        let result = step(&mut state, &press(Side::PlayerOne, jump), 0.1);
        assert_eq!(state.actor(Side::PlayerOne).vel.y, JUMP_SPEED);
        assert_eq!(result.cues, vec![SoundCue::Jump]);

        // Airborne: a second press is ignored
        let result = step(&mut state, &press(Side::PlayerOne, jump), 0.1);
        let one = state.actor(Side::PlayerOne);
        assert!(one.pos.y > FLOOR_HEIGHT);
        assert!(one.vel.y < JUMP_SPEED);
        assert!(result.cues.is_empty());
    }

    #[test]
    fn test_held_jump_fires_once() {
        let mut state = fresh();
        let mut kb = KeyboardState::new();
        kb.press(Key::W);

        let mut jumps = 0;
        // Long enough to land again while the key stays down
        for _ in 0..200 {
            let result = step(&mut state, &StepInput::poll(&kb), 1.0 / 60.0);
            jumps += result.cues.iter().filter(|c| **c == SoundCue::Jump).count();
            kb.end_frame();
        }
        assert_eq!(jumps, 1);
        assert!(state.actor(Side::PlayerTwo).is_grounded(FLOOR_HEIGHT));
    }

    #[test]
    fn test_attack_lands_once() {
        // Spawn points overlap, so a swing connects immediately
        let mut state = fresh();
        let attack = ActorInput {
            attack: true,
            ..Default::default()
        };

        let result = step(&mut state, &press(Side::PlayerOne, attack), 0.016);
        assert_eq!(result.cues, vec![SoundCue::Swing, SoundCue::Damage]);
        assert_eq!(
            result.events,
            vec![MatchEvent::Hit {
                attacker: Side::PlayerOne,
                defender: Side::PlayerTwo,
                damage: ATTACK_DAMAGE,
                remaining: 90,
            }]
        );
        assert!(!state.actor(Side::PlayerOne).attacking);

        for _ in 0..10 {
            step(&mut state, &StepInput::default(), 0.016);
        }
        assert_eq!(state.actor(Side::PlayerTwo).health, 90);
    }

    #[test]
    fn test_mutual_hit_same_step() {
        let mut state = fresh();
        let attack = ActorInput {
            attack: true,
            ..Default::default()
        };
        let input = StepInput {
            actors: [attack, attack],
        };

        let result = step(&mut state, &input, 0.016);

        assert_eq!(state.actor(Side::PlayerOne).health, 90);
        assert_eq!(state.actor(Side::PlayerTwo).health, 90);
        assert!(!state.actor(Side::PlayerOne).attacking);
        assert!(!state.actor(Side::PlayerTwo).attacking);
        assert_eq!(result.events.len(), 2);
        assert_eq!(
            result.cues.iter().filter(|c| **c == SoundCue::Damage).count(),
            2
        );
    }

    #[test]
    fn test_whiff_expires_after_window() {
        let mut state = fresh();
        separate(&mut state);
        let attack = ActorInput {
            attack: true,
            ..Default::default()
        };

        step(&mut state, &press(Side::PlayerOne, attack), 0.05);
        assert!(state.actor(Side::PlayerOne).attacking);

        for _ in 0..3 {
            step(&mut state, &StepInput::default(), 0.05);
        }
        assert!(!state.actor(Side::PlayerOne).attacking);
        assert_eq!(state.actor(Side::PlayerTwo).health, MAX_HEALTH);
    }

    #[test]
    fn test_retrigger_restarts_window() {
        let mut state = fresh();
        separate(&mut state);
        let attack = ActorInput {
            attack: true,
            ..Default::default()
        };

        step(&mut state, &press(Side::PlayerOne, attack), 0.05);
        step(&mut state, &press(Side::PlayerOne, attack), 0.05);
        let one = state.actor(Side::PlayerOne);
        assert!(one.attacking);
        assert!((one.attack_time - (ATTACK_DURATION - 0.05)).abs() < 1e-6);
    }

    #[test]
    fn test_knockout_ends_match() {
        let mut state = fresh();
        state.actor_mut(Side::PlayerTwo).health = 10;
        let attack = ActorInput {
            attack: true,
            ..Default::default()
        };

        let result = step(&mut state, &press(Side::PlayerOne, attack), 0.016);

        assert_eq!(result.outcome, Some(Outcome::Winner(Side::PlayerOne)));
        assert!(result.events.contains(&MatchEvent::Defeated(Side::PlayerTwo)));
        assert_eq!(
            result.events.last(),
            Some(&MatchEvent::MatchOver(Outcome::Winner(Side::PlayerOne)))
        );
        assert_eq!(result.cues.last(), Some(&SoundCue::MatchEnd));
        assert_eq!(state.message(), "Character 1 Wins!");

        // Frozen afterwards
        let before = state.actors;
        let result = step(&mut state, &press(Side::PlayerTwo, attack), 0.016);
        assert!(result.events.is_empty());
        assert!(result.cues.is_empty());
        assert_eq!(state.actors, before);
        assert_eq!(state.message(), "Character 1 Wins!");
    }

    #[test]
    fn test_double_knockout_is_draw() {
        let mut state = fresh();
        state.actor_mut(Side::PlayerOne).health = 10;
        state.actor_mut(Side::PlayerTwo).health = 5;
        let attack = ActorInput {
            attack: true,
            ..Default::default()
        };

        let result = step(&mut state, &StepInput { actors: [attack, attack] }, 0.016);

        assert_eq!(result.outcome, Some(Outcome::Draw));
        assert_eq!(state.message(), "DRAW");
        assert_eq!(state.actor(Side::PlayerOne).health, 0);
        assert_eq!(state.actor(Side::PlayerTwo).health, 0);
    }

    #[test]
    fn test_reset_leaves_no_stale_attack() {
        let mut state = fresh();
        state.actor_mut(Side::PlayerTwo).health = 10;
        let attack = ActorInput {
            attack: true,
            ..Default::default()
        };
        step(&mut state, &press(Side::PlayerOne, attack), 0.016);
        assert!(state.is_over());

        state.reset();
        let result = step(&mut state, &StepInput::default(), 0.016);

        assert!(result.events.is_empty());
        assert_eq!(result.outcome, None);
        for actor in &state.actors {
            assert_eq!(actor.health, MAX_HEALTH);
            assert_eq!(actor.vel, Vec2::ZERO);
            assert!(!actor.attacking);
        }
    }

    #[test]
    fn test_negative_dt_is_inert() {
        let mut state = fresh();
        let one = state.actor_mut(Side::PlayerOne);
        one.pos.y = FLOOR_HEIGHT + 100.0;
        one.sync_hitbox();
        let before = state.actors;

        step(&mut state, &StepInput::default(), -1.0);
        step(&mut state, &StepInput::default(), f32::NAN);

        assert_eq!(state.actors, before);
    }
}
