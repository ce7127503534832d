//! Match screen: owns the simulation while a match is live

use super::{Action, Frame};
use crate::input::{InputSource, Key};
use crate::sim::{Arena, MatchState, StepInput, step};
use crate::tuning::Tuning;
use crate::ui::FadeIn;

#[derive(Debug, Clone)]
pub struct MatchScreen {
    state: MatchState,
    fade: FadeIn,
}

impl MatchScreen {
    /// The arena/tuning pair must already be validated.
    pub(crate) fn new(arena: Arena, tuning: Tuning) -> Self {
        Self {
            state: MatchState::spawn(arena, tuning),
            fade: FadeIn::default(),
        }
    }

    pub fn state(&self) -> &MatchState {
        &self.state
    }

    pub fn alpha(&self) -> f32 {
        self.fade.alpha()
    }

    /// Fresh match in place; the screen fades in again
    pub fn restart(&mut self) {
        self.state.reset();
        self.fade = FadeIn::default();
    }

    /// Escape pauses before the simulation runs; otherwise step once and
    /// report cues and events into the frame.
    pub fn update(&mut self, dt: f32, input: &dyn InputSource, frame: &mut Frame) -> Option<Action> {
        if input.is_just_pressed(Key::Escape) {
            return Some(Action::Pause);
        }

        let result = step(&mut self.state, &StepInput::poll(input), dt);
        frame.cues.extend(result.cues);
        frame.events.extend(result.events);
        self.fade.tick(dt);
        None
    }
}
