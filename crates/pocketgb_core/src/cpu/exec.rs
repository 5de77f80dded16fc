mod alu;
mod control;
mod incdec;
mod ld;
mod stack;
mod system;

use super::{Bus, Cpu};

impl Cpu {
    /// Decode and execute a single primary opcode.
    ///
    /// Every one of the 256 byte values has an arm. Timing falls out of the
    /// bus accesses and idles each handler performs.
    pub(super) fn exec_opcode<B: Bus>(&mut self, bus: &mut B, opcode: u8) {
        match opcode {
            // NOP, STOP and the unused slots.
            0x00 | 0x10 => self.exec_nop(opcode),
            0xD3 | 0xDB | 0xDD | 0xE3 | 0xE4 | 0xEB | 0xEC | 0xED | 0xF4 | 0xFC | 0xFD => {
                self.exec_nop(opcode)
            }

            // 16-bit immediate loads.
            0x01 | 0x11 | 0x21 | 0x31 => self.exec_ld_rr_d16(bus, opcode),

            // LD (BC)/(DE)/(HL+)/(HL-), A and the reverse loads.
            0x02 | 0x12 | 0x22 | 0x32 | 0x0A | 0x1A | 0x2A | 0x3A => {
                self.exec_ld_indirect_a(bus, opcode)
            }

            // 16-bit INC rr / DEC rr
            0x03 | 0x13 | 0x23 | 0x33 | 0x0B | 0x1B | 0x2B | 0x3B => {
                self.exec_incdec16_rr(bus, opcode)
            }

            // 8-bit INC r / DEC r
            0x04 | 0x0C | 0x14 | 0x1C | 0x24 | 0x2C | 0x34 | 0x3C => self.exec_inc_r(bus, opcode),
            0x05 | 0x0D | 0x15 | 0x1D | 0x25 | 0x2D | 0x35 | 0x3D => self.exec_dec_r(bus, opcode),

            // LD r, d8 (and LD (HL), d8)
            0x06 | 0x0E | 0x16 | 0x1E | 0x26 | 0x2E | 0x36 | 0x3E => {
                self.exec_ld_r_d8(bus, opcode)
            }

            // RLCA, RRCA, RLA, RRA
            0x07 | 0x0F | 0x17 | 0x1F => self.exec_rotate_a(opcode),

            // LD (a16), SP
            0x08 => self.exec_ld_a16_sp(bus),

            // ADD HL, rr
            0x09 | 0x19 | 0x29 | 0x39 => self.exec_add_hl_rr(bus, opcode),

            // JR e8 / JR cc, e8
            0x18 | 0x20 | 0x28 | 0x30 | 0x38 => self.exec_jr(bus, opcode),

            // DAA, CPL, SCF, CCF
            0x27 | 0x2F | 0x37 | 0x3F => self.exec_accumulator_misc(opcode),

            // LD r, r' block, HALT in the (HL),(HL) slot.
            0x40..=0x7F => self.exec_ld_r_r(bus, opcode),

            // ALU A, r
            0x80..=0xBF => self.exec_alu_reg_group(bus, opcode),

            // RET cc / RET / RETI
            0xC0 | 0xC8 | 0xD0 | 0xD8 | 0xC9 | 0xD9 => self.exec_ret(bus, opcode),

            // POP rr / PUSH rr
            0xC1 | 0xD1 | 0xE1 | 0xF1 => self.exec_pop(bus, opcode),
            0xC5 | 0xD5 | 0xE5 | 0xF5 => self.exec_push(bus, opcode),

            // JP a16 / JP cc, a16 / JP HL
            0xC2 | 0xCA | 0xD2 | 0xDA | 0xC3 => self.exec_jp(bus, opcode),
            0xE9 => self.exec_jp_hl(),

            // CALL a16 / CALL cc, a16
            0xC4 | 0xCC | 0xD4 | 0xDC | 0xCD => self.exec_call(bus, opcode),

            // ALU A, d8
            0xC6 | 0xCE | 0xD6 | 0xDE | 0xE6 | 0xEE | 0xF6 | 0xFE => {
                self.exec_alu_imm(bus, opcode)
            }

            // RST n
            0xC7 | 0xCF | 0xD7 | 0xDF | 0xE7 | 0xEF | 0xF7 | 0xFF => self.exec_rst(bus, opcode),

            0xCB => self.step_cb(bus),

            // LDH (a8),A / LDH A,(a8) / LD (C),A / LD A,(C) / LD (a16),A / LD A,(a16)
            0xE0 | 0xF0 | 0xE2 | 0xF2 | 0xEA | 0xFA => self.exec_ld_high(bus, opcode),

            // ADD SP, e8
            0xE8 => self.exec_add_sp_e8(bus),

            // DI / EI
            0xF3 | 0xFB => self.exec_di_ei(opcode),

            // LD HL, SP+e8 / LD SP, HL
            0xF8 => self.exec_ld_hl_sp_e8(bus),
            0xF9 => self.exec_ld_sp_hl(bus),
        }
    }
}
