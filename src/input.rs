//! Input queries and the two fixed control schemes.
//!
//! The platform layer owns the devices; the core only asks whether a key is
//! held, whether it went down this frame, and where the pointer is.

use glam::Vec2;

/// Keys and buttons the game reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    Numpad0,
    A,
    D,
    W,
    Space,
    Enter,
    Escape,
    /// Primary pointer button
    MouseLeft,
}

impl Key {
    pub const ALL: [Key; 12] = [
        Key::Left,
        Key::Right,
        Key::Up,
        Key::Down,
        Key::Numpad0,
        Key::A,
        Key::D,
        Key::W,
        Key::Space,
        Key::Enter,
        Key::Escape,
        Key::MouseLeft,
    ];

    #[inline]
    const fn bit(self) -> u16 {
        1 << (self as u16)
    }
}

/// What the core needs from the input device layer
pub trait InputSource {
    /// Key is currently held
    fn is_down(&self, key: Key) -> bool;
    /// Key went from released to held on this frame
    fn is_just_pressed(&self, key: Key) -> bool;
    /// Pointer in world coordinates (origin bottom-left, y up)
    fn pointer_position(&self) -> Vec2;
}

/// Key bindings for one combatant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlScheme {
    pub left: Key,
    pub right: Key,
    pub jump: Key,
    pub attack: Key,
}

impl ControlScheme {
    /// Player one: arrow keys, attack on numpad 0
    pub const ARROWS: ControlScheme = ControlScheme {
        left: Key::Left,
        right: Key::Right,
        jump: Key::Up,
        attack: Key::Numpad0,
    };

    /// Player two: A/D, jump on W, attack on space
    pub const WASD: ControlScheme = ControlScheme {
        left: Key::A,
        right: Key::D,
        jump: Key::W,
        attack: Key::Space,
    };

    /// Both schemes, indexed like `Side::index`
    pub const PAIR: [ControlScheme; 2] = [Self::ARROWS, Self::WASD];
}

/// Frame-latched keyboard/pointer state.
///
/// Held keys are packed into a bitmask; `end_frame` copies it so that the
/// next frame can report rising edges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KeyboardState {
    bits: u16,
    prev_bits: u16,
    pointer: Vec2,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.bits |= key.bit();
    }

    pub fn release(&mut self, key: Key) {
        self.bits &= !key.bit();
    }

    pub fn set_pointer(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Latch the current keys as "previous"; call after the frame is processed
    pub fn end_frame(&mut self) {
        self.prev_bits = self.bits;
    }
}

impl InputSource for KeyboardState {
    fn is_down(&self, key: Key) -> bool {
        self.bits & key.bit() != 0
    }

    fn is_just_pressed(&self, key: Key) -> bool {
        self.bits & key.bit() != 0 && self.prev_bits & key.bit() == 0
    }

    fn pointer_position(&self) -> Vec2 {
        self.pointer
    }
}
