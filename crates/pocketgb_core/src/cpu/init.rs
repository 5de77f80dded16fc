use super::{Cpu, InterruptDispatch, Registers};

impl Default for Cpu {
    fn default() -> Self {
        Self::new(InterruptDispatch::default())
    }
}

impl Cpu {
    pub fn new(dispatch: InterruptDispatch) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            halted: false,
            dispatch,
        };
        cpu.reset();
        cpu
    }

    /// Reset the CPU to the state the boot ROM leaves behind on a DMG.
    pub fn reset(&mut self) {
        self.regs = Registers {
            a: 0x01,
            f: 0xB0,
            b: 0x00,
            c: 0x13,
            d: 0x00,
            e: 0xD8,
            h: 0x01,
            l: 0x4D,
            sp: 0xFFFE,
            pc: 0x0100,
        };
        self.ime = false;
        self.halted = false;
    }
}
