//! Match-over banner shown over the finished match

use super::Action;
use crate::input::{InputSource, Key};
use crate::sim::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOverBanner {
    pub outcome: Outcome,
}

impl MatchOverBanner {
    pub fn new(outcome: Outcome) -> Self {
        Self { outcome }
    }

    pub fn message(&self) -> &'static str {
        self.outcome.message()
    }

    pub fn update(&mut self, input: &dyn InputSource) -> Option<Action> {
        input.is_just_pressed(Key::Enter).then_some(Action::Restart)
    }
}
