mod bus;
mod cartridge;
mod config;
mod gameboy;
mod ppu;

pub use bus::GameBoyBus;
pub use cartridge::{Cartridge, FileSave, MemorySave, SaveStorage, SAVE_SIZE};
pub use config::MachineConfig;
pub use gameboy::GameBoy;
pub use ppu::{Lcdc, Ppu, SpriteAttributes};

/// Dot-clock units per scanline.
pub const DOTS_PER_LINE: u16 = 456;
/// Scanlines per frame, visible and vertical blank together.
pub const LINES_PER_FRAME: u8 = 154;
/// Dot-clock units per full frame.
pub const DOTS_PER_FRAME: u32 = DOTS_PER_LINE as u32 * LINES_PER_FRAME as u32;
