use crate::cpu::{Bus, Cpu};

impl Cpu {
    // LD rr, d16
    pub(super) fn exec_ld_rr_d16<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let value = self.fetch16(bus);
        self.regs.set_rp(opcode >> 4, value);
    }

    /// LD (rr), A and LD A, (rr) over BC, DE, HL+ and HL-.
    pub(super) fn exec_ld_indirect_a<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let group = (opcode >> 4) & 0x03;
        let addr = match group {
            0 => self.regs.bc(),
            1 => self.regs.de(),
            _ => self.regs.hl(),
        };

        if opcode & 0x08 != 0 {
            self.regs.a = bus.read8(addr);
        } else {
            bus.write8(addr, self.regs.a);
        }

        match group {
            2 => self.regs.set_hl(addr.wrapping_add(1)),
            3 => self.regs.set_hl(addr.wrapping_sub(1)),
            _ => {}
        }
    }

    // LD r, d8
    pub(super) fn exec_ld_r_d8<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let value = self.fetch8(bus);
        self.write_reg8(bus, opcode >> 3, value);
    }

    /// LD r, r' for 0x40..=0x7F.
    ///
    /// 0x76 is HALT. It still performs the source operand read of its row,
    /// so it touches (HL) once before the CPU parks.
    pub(super) fn exec_ld_r_r<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let value = self.read_reg8(bus, opcode);
        if opcode == 0x76 {
            self.halted = true;
        } else {
            self.write_reg8(bus, opcode >> 3, value);
        }
    }

    /// Accesses to the 0xFF00 page and to absolute addresses through A.
    pub(super) fn exec_ld_high<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let addr = match opcode & 0x0F {
            0x0A => self.fetch16(bus),
            0x02 => 0xFF00 | self.regs.c as u16,
            _ => 0xFF00 | self.fetch8(bus) as u16,
        };

        if opcode & 0x10 != 0 {
            self.regs.a = bus.read8(addr);
        } else {
            bus.write8(addr, self.regs.a);
        }
    }

    // LD (a16), SP
    pub(super) fn exec_ld_a16_sp<B: Bus>(&mut self, bus: &mut B) {
        let addr = self.fetch16(bus);
        let [lo, hi] = self.regs.sp.to_le_bytes();
        bus.write8(addr, lo);
        bus.write8(addr.wrapping_add(1), hi);
    }

    // LD HL, SP+e8
    pub(super) fn exec_ld_hl_sp_e8<B: Bus>(&mut self, bus: &mut B) {
        let offset = self.fetch_offset(bus);
        let value = self.sp_offset(offset);
        self.regs.set_hl(value);
        bus.idle();
    }

    // LD SP, HL
    pub(super) fn exec_ld_sp_hl<B: Bus>(&mut self, bus: &mut B) {
        self.regs.sp = self.regs.hl();
        bus.idle();
    }
}
