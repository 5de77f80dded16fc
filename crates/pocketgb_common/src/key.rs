/// Host keys the frontends know how to report.
///
/// Only the keys the emulator binds are named; everything else maps to
/// `Key::None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Z,
    X,
    Return,
    Tab,
    Escape,
    None,
}
