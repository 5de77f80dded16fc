use crate::cpu::{Bus, Cpu};

impl Cpu {
    pub(super) fn exec_alu_reg_group<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        debug_assert!((0x80..=0xBF).contains(&opcode));
        let value = self.read_reg8(bus, opcode);
        self.alu_apply(opcode >> 3, value);
    }

    pub(super) fn exec_alu_imm<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let value = self.fetch8(bus);
        self.alu_apply(opcode >> 3, value);
    }

    /// RLCA, RRCA, RLA, RRA: the first four rotate rows applied to A with
    /// Z forced clear.
    pub(super) fn exec_rotate_a(&mut self, opcode: u8) {
        debug_assert!(matches!(opcode, 0x07 | 0x0F | 0x17 | 0x1F));
        self.regs.a = self.rotate(opcode >> 3, self.regs.a, true);
    }

    // ADD HL, rr
    pub(super) fn exec_add_hl_rr<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let value = self.regs.rp(opcode >> 4);
        self.add_hl(value);
        bus.idle();
    }

    // ADD SP, e8
    pub(super) fn exec_add_sp_e8<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch_offset(bus);
        self.regs.sp = self.sp_offset(offset);
        bus.idle();
        bus.idle();
    }

    pub(super) fn exec_accumulator_misc(&mut self, opcode: u8) {
        match opcode {
            0x27 => self.daa(),
            0x2F => self.cpl(),
            0x37 => self.set_or_complement_carry(false),
            0x3F => self.set_or_complement_carry(true),
            _ => unreachable!("not an accumulator opcode: 0x{opcode:02X}"),
        }
    }
}
