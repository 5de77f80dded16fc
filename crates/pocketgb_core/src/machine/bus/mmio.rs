use super::{GameBoyBus, REG_DIV_HI, REG_DIV_LO, REG_DMA, REG_JOYP};

impl GameBoyBus {
    /// Address decode for reads. Charges no time.
    pub(super) fn read8_mmio(&self, addr: u16) -> u8 {
        match addr {
            0x0000..=0x7FFF => self.cartridge.rom_read(addr),
            0x8000..=0x9FFF => self.vram[addr as usize & 0x1FFF],
            0xA000..=0xBFFF => self.cartridge.ram_read(addr),
            0xC000..=0xFDFF => self.wram[addr as usize & 0x3FFF],
            REG_JOYP => self.read_joyp(),
            REG_DIV_LO => self.divider as u8,
            REG_DIV_HI => (self.divider >> 8) as u8,
            0xFE00..=0xFFFF => self.io(addr),
        }
    }

    /// Address decode for writes. Only the DMA trigger charges extra time,
    /// through the reads it performs.
    pub(super) fn write8_mmio(&mut self, addr: u16, value: u8) {
        match addr {
            0x0000..=0x7FFF => self.cartridge.rom_write(addr, value),
            0x8000..=0x9FFF => self.vram[addr as usize & 0x1FFF] = value,
            0xA000..=0xBFFF => self.cartridge.ram_write(addr, value),
            0xC000..=0xFDFF => self.wram[addr as usize & 0x3FFF] = value,
            REG_DIV_LO => self.divider = (self.divider & 0xFF00) | value as u16,
            REG_DIV_HI => self.divider = (self.divider & 0x00FF) | (value as u16) << 8,
            REG_DMA => {
                self.do_oam_dma(value);
                self.set_io(addr, value);
            }
            0xFE00..=0xFFFF => self.set_io(addr, value),
        }
    }
}
