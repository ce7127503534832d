//! Menu widgets shared by the screens
//!
//! Only hit testing and hover state live here; drawing is the presentation
//! layer's job.

use glam::Vec2;

use crate::consts::FADE_IN_RATE;
use crate::sim::AxisAlignedBox;

/// A clickable rectangle with hover tracking
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    pub label: &'static str,
    pub bounds: AxisAlignedBox,
    hovered: bool,
}

impl Button {
    pub fn new(label: &'static str, bounds: AxisAlignedBox) -> Self {
        Self {
            label,
            bounds,
            hovered: false,
        }
    }

    /// Horizontally centered on `center_x` with its bottom edge at `y`
    pub fn centered(label: &'static str, center_x: f32, y: f32, size: Vec2) -> Self {
        Self::new(
            label,
            AxisAlignedBox::new(center_x - size.x / 2.0, y, size.x, size.y),
        )
    }

    #[inline]
    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Refresh hover state. Returns true when the pointer just moved onto
    /// the button.
    pub fn update_hover(&mut self, pointer: Vec2) -> bool {
        let was = self.hovered;
        self.hovered = self.bounds.contains(pointer);
        self.hovered && !was
    }
}

/// Screen fade-in, 0 (transparent) to 1 (opaque)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FadeIn {
    alpha: f32,
}

impl FadeIn {
    pub fn tick(&mut self, dt: f32) {
        self.alpha = (self.alpha + dt * FADE_IN_RATE).min(1.0);
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }
}
