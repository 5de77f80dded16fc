use crate::cpu::{Bus, Cpu};

impl Cpu {
    // INC r
    pub(super) fn exec_inc_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let r = opcode >> 3;
        let value = self.read_reg8(bus, r);
        let result = self.inc8(value);
        self.write_reg8(bus, r, result);
    }

    // DEC r
    pub(super) fn exec_dec_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let r = opcode >> 3;
        let value = self.read_reg8(bus, r);
        let result = self.dec8(value);
        self.write_reg8(bus, r, result);
    }

    /// INC rr (bit 3 clear) and DEC rr (bit 3 set). No flags.
    pub(super) fn exec_incdec16_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let index = opcode >> 4;
        let value = self.regs.rp(index);
        let result = if opcode & 0x08 != 0 {
            value.wrapping_sub(1)
        } else {
            value.wrapping_add(1)
        };
        self.regs.set_rp(index, result);
        bus.idle();
    }
}
