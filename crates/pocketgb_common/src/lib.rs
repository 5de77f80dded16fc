pub mod app;
pub mod key;

pub use app::{Button, Buttons, FrameSink, InputSource, Poll};

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new_rgb(0, 0, 0);
    pub const WHITE: Color = Color::new_rgb(255, 255, 255);
    pub const BLUE: Color = Color::new_rgb(0, 0, 255);

    #[inline]
    pub const fn new_rgb(r: u8, g: u8, b: u8) -> Color {
        Color { r, g, b, a: 0xff }
    }

    #[inline]
    pub const fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Color {
        Color { r, g, b, a }
    }

    #[inline]
    pub const fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Packs the colour so that its in-memory byte order is R, G, B, A.
    ///
    /// This matches SDL's `RGBA32` texture format on every host, which is
    /// what the frame buffer is uploaded as.
    #[inline]
    pub const fn to_u32(&self) -> u32 {
        u32::from_le_bytes([self.r, self.g, self.b, self.a])
    }

    #[inline]
    pub const fn from_u32(value: u32) -> Color {
        let [r, g, b, a] = value.to_le_bytes();
        Color { r, g, b, a }
    }
}
