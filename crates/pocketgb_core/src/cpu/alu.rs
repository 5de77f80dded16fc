use super::{Cpu, Flag};

const KEEP_NONE: u8 = 0;
const KEEP_Z: u8 = Flag::Z.mask();
const KEEP_C: u8 = Flag::C.mask();

impl Cpu {
    /// Apply one of the eight accumulator operations selected by bits 3-5:
    /// ADD, ADC, SUB, SBC, AND, XOR, OR, CP.
    pub(super) fn alu_apply(&mut self, operation: u8, operand: u8) {
        let a = self.regs.a;
        let carry = self.regs.flag(Flag::C) as u8;

        match operation & 0x07 {
            // ADD / ADC
            op @ (0 | 1) => {
                let carry = if op == 1 { carry } else { 0 };
                let wide = a as u16 + operand as u16 + carry as u16;
                let result = wide as u8;
                let half = (a & 0x0F) + (operand & 0x0F) + carry > 0x0F;
                self.regs.a = result;
                self.regs
                    .set_flags(KEEP_NONE, result == 0, false, half, wide > 0xFF);
            }
            // SUB / SBC / CP: A + !operand + 1 - borrow
            op @ (2 | 3 | 7) => {
                let borrow = if op == 3 { carry } else { 0 };
                let wide = a as u16 + (!operand) as u16 + 1 - borrow as u16;
                let result = wide as u8;
                let half = (a & 0x0F) < (operand & 0x0F) + borrow;
                self.regs
                    .set_flags(KEEP_NONE, result == 0, true, half, wide <= 0xFF);
                if op != 7 {
                    self.regs.a = result;
                }
            }
            // AND
            4 => {
                self.regs.a = a & operand;
                self.regs
                    .set_flags(KEEP_NONE, self.regs.a == 0, false, true, false);
            }
            // XOR
            5 => {
                self.regs.a = a ^ operand;
                self.regs
                    .set_flags(KEEP_NONE, self.regs.a == 0, false, false, false);
            }
            // OR
            _ => {
                self.regs.a = a | operand;
                self.regs
                    .set_flags(KEEP_NONE, self.regs.a == 0, false, false, false);
            }
        }
    }

    /// Shared tail of the rotate and shift group.
    ///
    /// `row` is 0 RLC, 1 RRC, 2 RL, 3 RR, 4 SLA, 5 SRA, 6 SWAP, 7 SRL.
    /// When `force_z_clear` is set (the unprefixed accumulator rotates) Z is
    /// always cleared instead of reflecting the result.
    pub(super) fn rotate(&mut self, row: u8, value: u8, force_z_clear: bool) -> u8 {
        let carry_in = self.regs.flag(Flag::C);
        let (result, carry) = match row & 0x07 {
            0 => (value.rotate_left(1), value & 0x80 != 0),
            1 => (value.rotate_right(1), value & 0x01 != 0),
            2 => ((value << 1) | carry_in as u8, value & 0x80 != 0),
            3 => ((value >> 1) | (carry_in as u8) << 7, value & 0x01 != 0),
            4 => (value << 1, value & 0x80 != 0),
            5 => ((value >> 1) | (value & 0x80), value & 0x01 != 0),
            6 => (value.rotate_left(4), false),
            _ => (value >> 1, value & 0x01 != 0),
        };
        let z = !force_z_clear && result == 0;
        self.regs.set_flags(KEEP_NONE, z, false, false, carry);
        result
    }

    pub(super) fn inc8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_add(1);
        self.regs
            .set_flags(KEEP_C, result == 0, false, result & 0x0F == 0, false);
        result
    }

    pub(super) fn dec8(&mut self, value: u8) -> u8 {
        let result = value.wrapping_sub(1);
        self.regs
            .set_flags(KEEP_C, result == 0, true, result & 0x0F == 0x0F, false);
        result
    }

    /// ADD HL, rr. Z is preserved; H and C come from bits 11 and 15.
    pub(super) fn add_hl(&mut self, value: u16) {
        let hl = self.regs.hl();
        let wide = hl as u32 + value as u32;
        let half = (hl & 0x0FFF) + (value & 0x0FFF) > 0x0FFF;
        self.regs.set_hl(wide as u16);
        self.regs.set_flags(KEEP_Z, false, false, half, wide > 0xFFFF);
    }

    /// SP plus a signed offset, with flags computed on the low byte as an
    /// unsigned add. Shared by `ADD SP, e8` and `LD HL, SP+e8`.
    pub(super) fn sp_offset(&mut self, offset: i8) -> u16 {
        let sp = self.regs.sp;
        let operand = offset as u8 as u16;
        let half = (sp & 0x0F) + (operand & 0x0F) > 0x0F;
        let carry = (sp & 0xFF) + operand > 0xFF;
        self.regs.set_flags(KEEP_NONE, false, false, half, carry);
        sp.wrapping_add(offset as i16 as u16)
    }

    /// Decimal-adjust A after a BCD add or subtract.
    pub(super) fn daa(&mut self) {
        let a = self.regs.a;
        let n = self.regs.flag(Flag::N);
        let mut carry = false;
        let mut correction = 0u8;

        if self.regs.flag(Flag::H) || (!n && a & 0x0F > 0x09) {
            correction |= 0x06;
        }
        if self.regs.flag(Flag::C) || (!n && a > 0x99) {
            correction |= 0x60;
            carry = true;
        }

        let result = if n {
            a.wrapping_sub(correction)
        } else {
            a.wrapping_add(correction)
        };
        self.regs.a = result;
        self.regs
            .set_flags(Flag::N.mask(), result == 0, false, false, carry);
    }

    /// CPL: complement A, set N and H, keep Z and C.
    pub(super) fn cpl(&mut self) {
        self.regs.a = !self.regs.a;
        self.regs.set_flags(KEEP_Z | KEEP_C, false, true, true, false);
    }

    /// SCF (`complement == false`) and CCF (`complement == true`).
    pub(super) fn set_or_complement_carry(&mut self, complement: bool) {
        let carry = if complement {
            !self.regs.flag(Flag::C)
        } else {
            true
        };
        self.regs.set_flags(KEEP_Z, false, false, false, carry);
    }
}
