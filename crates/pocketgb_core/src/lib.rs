pub mod cpu;
pub mod machine;

pub use cpu::{Bus, Cpu, InterruptDispatch};
pub use machine::{
    Cartridge, FileSave, GameBoy, GameBoyBus, MachineConfig, MemorySave, SaveStorage,
};

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: usize = 160;
/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: usize = 144;
/// Default integer scaling factor for the SDL frontend.
pub const SCREEN_SCALE: u32 = 4;
