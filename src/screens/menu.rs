//! Main menu: Play / Options / Exit

use glam::Vec2;

use super::Action;
use crate::audio::SoundCue;
use crate::input::{InputSource, Key};
use crate::sim::Arena;
use crate::ui::{Button, FadeIn};

pub const BUTTON_SIZE: Vec2 = Vec2::new(200.0, 100.0);

#[derive(Debug, Clone)]
pub struct MainMenu {
    pub play: Button,
    pub options: Button,
    pub exit: Button,
    fade: FadeIn,
}

impl MainMenu {
    pub fn new(arena: &Arena) -> Self {
        let cx = arena.width / 2.0;
        let cy = arena.height / 2.0;
        Self {
            play: Button::centered("Play", cx, cy + 80.0, BUTTON_SIZE),
            options: Button::centered("Options", cx, cy - 40.0, BUTTON_SIZE),
            exit: Button::centered("Exit", cx, cy - 160.0, BUTTON_SIZE),
            fade: FadeIn::default(),
        }
    }

    pub fn alpha(&self) -> f32 {
        self.fade.alpha()
    }

    pub fn update(
        &mut self,
        dt: f32,
        input: &dyn InputSource,
        cues: &mut Vec<SoundCue>,
    ) -> Option<Action> {
        self.fade.tick(dt);

        let pointer = input.pointer_position();
        for button in [&mut self.play, &mut self.options, &mut self.exit] {
            if button.update_hover(pointer) {
                cues.push(SoundCue::ButtonHover);
            }
        }

        if input.is_just_pressed(Key::MouseLeft) {
            if self.play.is_hovered() {
                cues.push(SoundCue::ButtonClick);
                return Some(Action::Start);
            }
            if self.options.is_hovered() {
                cues.push(SoundCue::ButtonClick);
                return Some(Action::Options);
            }
            if self.exit.is_hovered() {
                return Some(Action::Exit);
            }
        }

        if input.is_just_pressed(Key::Enter) {
            Some(Action::Start)
        } else if input.is_just_pressed(Key::Escape) {
            Some(Action::Exit)
        } else {
            None
        }
    }
}
