use anyhow::Result;
use bitflags::bitflags;

use crate::key::Key;

/// The eight logical buttons of the handheld.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Button {
    Right,
    Left,
    Up,
    Down,
    A,
    B,
    Select,
    Start,
}

impl Button {
    pub const ALL: [Button; 8] = [
        Button::Right,
        Button::Left,
        Button::Up,
        Button::Down,
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
    ];

    /// Default keyboard binding: arrows for the d-pad, X/Z for A/B,
    /// Tab for Select and Return for Start.
    pub fn from_key(key: Key) -> Option<Button> {
        match key {
            Key::Right => Some(Button::Right),
            Key::Left => Some(Button::Left),
            Key::Up => Some(Button::Up),
            Key::Down => Some(Button::Down),
            Key::X => Some(Button::A),
            Key::Z => Some(Button::B),
            Key::Tab => Some(Button::Select),
            Key::Return => Some(Button::Start),
            _ => None,
        }
    }
}

bitflags! {
    /// Snapshot of which buttons are held, bit set = pressed.
    ///
    /// The low nibble is the direction group and the high nibble the action
    /// group, each in the bit order the joypad register reports them.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Buttons: u8 {
        const RIGHT = 1 << 0;
        const LEFT = 1 << 1;
        const UP = 1 << 2;
        const DOWN = 1 << 3;
        const A = 1 << 4;
        const B = 1 << 5;
        const SELECT = 1 << 6;
        const START = 1 << 7;
    }
}

impl From<Button> for Buttons {
    fn from(button: Button) -> Self {
        match button {
            Button::Right => Buttons::RIGHT,
            Button::Left => Buttons::LEFT,
            Button::Up => Buttons::UP,
            Button::Down => Buttons::DOWN,
            Button::A => Buttons::A,
            Button::B => Buttons::B,
            Button::Select => Buttons::SELECT,
            Button::Start => Buttons::START,
        }
    }
}

impl Buttons {
    /// Reads all eight buttons from an input source.
    pub fn sample<I: InputSource + ?Sized>(source: &I) -> Self {
        Button::ALL
            .iter()
            .filter(|&&button| source.is_pressed(button))
            .fold(Buttons::empty(), |acc, &button| acc | Buttons::from(button))
    }

    /// Down, Up, Left, Right in bits 3..0.
    #[inline]
    pub fn directions(self) -> u8 {
        self.bits() & 0x0F
    }

    /// Start, Select, B, A in bits 3..0.
    #[inline]
    pub fn actions(self) -> u8 {
        self.bits() >> 4
    }
}

/// Outcome of polling the host for events at a frame boundary.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Poll {
    Continue,
    Quit,
}

/// Consumer of completed frames.
pub trait FrameSink {
    /// `frame` holds `width * height` packed colours (see
    /// [`Color::to_u32`](crate::Color::to_u32)), row-major, top row first.
    fn present(&mut self, frame: &[u32]) -> Result<()>;
}

/// Source of button state and quit requests.
pub trait InputSource {
    /// Pump host events. Called once per frame.
    fn poll(&mut self) -> Result<Poll>;

    fn is_pressed(&self, button: Button) -> bool;
}
