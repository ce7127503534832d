//! Options: sound volume, graphics quality, back to the menu

use glam::Vec2;

use super::Action;
use crate::audio::SoundCue;
use crate::input::{InputSource, Key};
use crate::settings::{QualityPreset, Settings};
use crate::sim::Arena;
use crate::ui::{Button, FadeIn};

pub const BACK_BUTTON_SIZE: Vec2 = Vec2::new(200.0, 80.0);

#[derive(Debug, Clone)]
pub struct OptionsMenu {
    pub back: Button,
    fade: FadeIn,
}

impl OptionsMenu {
    pub fn new(arena: &Arena) -> Self {
        Self {
            back: Button::centered(
                "Back",
                arena.width / 2.0,
                arena.height / 4.0,
                BACK_BUTTON_SIZE,
            ),
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
        settings: &mut Settings,
        cues: &mut Vec<SoundCue>,
    ) -> Option<Action> {
        self.fade.tick(dt);

        if self.back.update_hover(input.pointer_position()) {
            cues.push(SoundCue::ButtonHover);
        }
        if (self.back.is_hovered() && input.is_just_pressed(Key::MouseLeft))
            || input.is_just_pressed(Key::Escape)
        {
            return Some(Action::Back);
        }

        if input.is_just_pressed(Key::Up) {
            settings.volume_up();
        }
        if input.is_just_pressed(Key::Down) {
            settings.volume_down();
        }
        if input.is_just_pressed(Key::Left) {
            settings.quality = QualityPreset::Low;
        }
        if input.is_just_pressed(Key::Right) {
            settings.quality = QualityPreset::High;
        }
        None
    }
}
