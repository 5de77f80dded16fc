use pocketgb_common::Buttons;

use super::cartridge::Cartridge;

mod dma;
mod joypad;
mod mmio;
mod traits;

pub(crate) const REG_JOYP: u16 = 0xFF00;
pub(crate) const REG_DIV_LO: u16 = 0xFF03;
pub(crate) const REG_DIV_HI: u16 = 0xFF04;
pub(crate) const REG_IF: u16 = 0xFF0F;
pub(crate) const REG_LCDC: u16 = 0xFF40;
pub(crate) const REG_SCY: u16 = 0xFF42;
pub(crate) const REG_SCX: u16 = 0xFF43;
pub(crate) const REG_LY: u16 = 0xFF44;
pub(crate) const REG_DMA: u16 = 0xFF46;
pub(crate) const REG_BGP: u16 = 0xFF47;
pub(crate) const REG_OBP0: u16 = 0xFF48;
pub(crate) const REG_OBP1: u16 = 0xFF49;
pub(crate) const REG_WY: u16 = 0xFF4A;
pub(crate) const REG_WX: u16 = 0xFF4B;
pub(crate) const REG_IE: u16 = 0xFFFF;

const VRAM_SIZE: usize = 0x2000;
const WRAM_SIZE: usize = 0x4000;
/// 0xFE00-0xFFFF: OAM, I/O registers and high RAM share one flat block.
const IO_SIZE: usize = 0x200;
const OAM_SIZE: usize = 0xA0;

/// The DMG address space and the cycle counter every access is charged to.
pub struct GameBoyBus {
    cartridge: Cartridge,
    vram: Box<[u8; VRAM_SIZE]>,
    /// 0xC000-0xFDFF indexed by `addr & 0x3FFF`. 0xE000 onwards is not a
    /// mirror of 0xC000 in this model.
    wram: Box<[u8; WRAM_SIZE]>,
    io: Box<[u8; IO_SIZE]>,
    /// Free-running 16-bit divider, visible at 0xFF03 (low) and 0xFF04 (high).
    divider: u16,
    /// Buttons latched at the last frame boundary.
    buttons: Buttons,
    cycles: u64,
}

impl GameBoyBus {
    pub fn new(cartridge: Cartridge) -> Self {
        let mut bus = Self {
            cartridge,
            vram: Box::new([0; VRAM_SIZE]),
            wram: Box::new([0; WRAM_SIZE]),
            io: Box::new([0; IO_SIZE]),
            divider: 0xAC00,
            buttons: Buttons::empty(),
            cycles: 0,
        };
        bus.set_io(REG_LCDC, 0x91);
        bus
    }

    /// Untimed read through the normal address decode.
    pub fn peek(&self, addr: u16) -> u8 {
        self.read8_mmio(addr)
    }

    /// Raw register in the 0xFE00-0xFFFF block, bypassing read side effects.
    #[inline]
    pub fn io(&self, addr: u16) -> u8 {
        self.io[addr as usize & (IO_SIZE - 1)]
    }

    #[inline]
    pub fn set_io(&mut self, addr: u16, value: u8) {
        self.io[addr as usize & (IO_SIZE - 1)] = value;
    }

    pub fn vram(&self) -> &[u8] {
        &self.vram[..]
    }

    pub fn oam(&self) -> &[u8] {
        &self.io[..OAM_SIZE]
    }

    pub fn request_interrupt(&mut self, bits: u8) {
        let flags = self.io(REG_IF) | bits;
        self.set_io(REG_IF, flags);
    }

    pub fn divider(&self) -> u16 {
        self.divider
    }

    pub fn advance_divider(&mut self, delta: u32) {
        self.divider = self.divider.wrapping_add(delta as u16);
    }

    pub fn buttons(&self) -> Buttons {
        self.buttons
    }

    pub fn set_buttons(&mut self, buttons: Buttons) {
        self.buttons = buttons;
    }

    pub fn cartridge(&self) -> &Cartridge {
        &self.cartridge
    }

    pub fn cartridge_mut(&mut self) -> &mut Cartridge {
        &mut self.cartridge
    }
}
