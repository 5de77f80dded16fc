use crate::cpu::Bus;

use super::{GameBoyBus, REG_IE, REG_IF};

const ACCESS_COST: u64 = 4;

impl Bus for GameBoyBus {
    #[inline]
    fn read8(&mut self, addr: u16) -> u8 {
        self.cycles += ACCESS_COST;
        self.read8_mmio(addr)
    }

    #[inline]
    fn write8(&mut self, addr: u16, value: u8) {
        self.cycles += ACCESS_COST;
        self.write8_mmio(addr, value);
    }

    #[inline]
    fn idle(&mut self) {
        self.cycles += ACCESS_COST;
    }

    #[inline]
    fn cycles(&self) -> u64 {
        self.cycles
    }

    fn interrupt_flag(&self) -> u8 {
        self.io(REG_IF)
    }

    fn set_interrupt_flag(&mut self, value: u8) {
        self.set_io(REG_IF, value);
    }

    fn interrupt_enable(&self) -> u8 {
        self.io(REG_IE)
    }
}
