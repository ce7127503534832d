//! Pause overlay: Resume / Quit over the frozen match

use glam::Vec2;

use super::Action;
use crate::audio::SoundCue;
use crate::input::{InputSource, Key};
use crate::sim::Arena;
use crate::ui::Button;

pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 80.0);

#[derive(Debug, Clone)]
pub struct PauseMenu {
    pub resume: Button,
    pub quit: Button,
}

impl PauseMenu {
    pub fn new(arena: &Arena) -> Self {
        let cx = arena.width / 2.0;
        let cy = arena.height / 2.0 - BUTTON_SIZE.y / 2.0;
        Self {
            resume: Button::centered("Resume", cx, cy + 80.0, BUTTON_SIZE),
            quit: Button::centered("Quit", cx, cy - 80.0, BUTTON_SIZE),
        }
    }

    pub fn update(&mut self, input: &dyn InputSource, cues: &mut Vec<SoundCue>) -> Option<Action> {
        let pointer = input.pointer_position();
        for button in [&mut self.resume, &mut self.quit] {
            if button.update_hover(pointer) {
                cues.push(SoundCue::ButtonHover);
            }
        }

        if !input.is_just_pressed(Key::MouseLeft) {
            return None;
        }
        if self.resume.is_hovered() {
            cues.push(SoundCue::ButtonClick);
            Some(Action::Resume)
        } else if self.quit.is_hovered() {
            Some(Action::Quit)
        } else {
            None
        }
    }
}
