use crate::cpu::{Bus, Cpu};

impl Cpu {
    /// JR e8 (0x18) and JR cc, e8. A taken branch costs one extra idle.
    pub(super) fn exec_jr<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let offset = self.fetch_offset(bus);
        if opcode == 0x18 || self.condition(opcode) {
            self.regs.pc = self.regs.pc.wrapping_add(offset as i16 as u16);
            bus.idle();
        }
    }

    /// JP a16 (0xC3) and JP cc, a16.
    pub(super) fn exec_jp<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let target = self.fetch16(bus);
        if opcode == 0xC3 || self.condition(opcode) {
            self.regs.pc = target;
            bus.idle();
        }
    }

    // JP HL
    pub(super) fn exec_jp_hl(&mut self) {
        self.regs.pc = self.regs.hl();
    }

    /// CALL a16 (0xCD) and CALL cc, a16.
    pub(super) fn exec_call<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let target = self.fetch16(bus);
        if opcode == 0xCD || self.condition(opcode) {
            self.push_u16(bus, self.regs.pc);
            self.regs.pc = target;
        }
    }

    /// RET (0xC9), RETI (0xD9) and RET cc.
    ///
    /// All forms spend one idle up front; the pop only happens when taken.
    /// RETI sets IME before returning.
    pub(super) fn exec_ret<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        let taken = match opcode {
            0xC9 => true,
            0xD9 => {
                self.ime = true;
                true
            }
            _ => self.condition(opcode),
        };

        bus.idle();
        if taken {
            self.regs.pc = self.pop_u16(bus);
        }
    }

    // RST n
    pub(super) fn exec_rst<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        self.push_u16(bus, self.regs.pc);
        self.regs.pc = (opcode & 0x38) as u16;
    }
}
