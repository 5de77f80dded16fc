/// Programmer-visible registers of the LR35902.
///
/// Each 8-bit register is its own field; the 16-bit pairs are composed on
/// demand rather than aliased in memory.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Registers {
    pub a: u8,
    pub f: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub h: u8,
    pub l: u8,
    pub sp: u16,
    pub pc: u16,
}

/// Flag bits in the F register.
///
/// Layout (bit index in the byte, from MSB to LSB):
/// - bit 7: Z (zero)
/// - bit 6: N (subtract)
/// - bit 5: H (half carry)
/// - bit 4: C (carry)
/// - bits 0–3 are always zero.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Flag {
    Z = 7,
    N = 6,
    H = 5,
    C = 4,
}

impl Flag {
    #[inline]
    pub const fn mask(self) -> u8 {
        1 << self as u8
    }
}

impl Registers {
    #[inline]
    pub fn af(&self) -> u16 {
        u16::from_be_bytes([self.a, self.f & 0xF0])
    }

    #[inline]
    pub fn set_af(&mut self, value: u16) {
        let [a, f] = value.to_be_bytes();
        self.a = a;
        // Lower 4 bits of F are always zero.
        self.f = f & 0xF0;
    }

    #[inline]
    pub fn bc(&self) -> u16 {
        u16::from_be_bytes([self.b, self.c])
    }

    #[inline]
    pub fn set_bc(&mut self, value: u16) {
        let [b, c] = value.to_be_bytes();
        self.b = b;
        self.c = c;
    }

    #[inline]
    pub fn de(&self) -> u16 {
        u16::from_be_bytes([self.d, self.e])
    }

    #[inline]
    pub fn set_de(&mut self, value: u16) {
        let [d, e] = value.to_be_bytes();
        self.d = d;
        self.e = e;
    }

    #[inline]
    pub fn hl(&self) -> u16 {
        u16::from_be_bytes([self.h, self.l])
    }

    #[inline]
    pub fn set_hl(&mut self, value: u16) {
        let [h, l] = value.to_be_bytes();
        self.h = h;
        self.l = l;
    }

    /// 8-bit register by opcode index: 0=B, 1=C, 2=D, 3=E, 4=H, 5=L, 6=F, 7=A.
    ///
    /// Index 6 names F here. Instruction operands never reach F this way;
    /// the CPU redirects slot 6 to memory at HL before asking.
    pub fn reg8(&self, index: u8) -> u8 {
        match index & 0x07 {
            0 => self.b,
            1 => self.c,
            2 => self.d,
            3 => self.e,
            4 => self.h,
            5 => self.l,
            6 => self.f & 0xF0,
            _ => self.a,
        }
    }

    pub fn set_reg8(&mut self, index: u8, value: u8) {
        match index & 0x07 {
            0 => self.b = value,
            1 => self.c = value,
            2 => self.d = value,
            3 => self.e = value,
            4 => self.h = value,
            5 => self.l = value,
            6 => self.f = value & 0xF0,
            _ => self.a = value,
        }
    }

    /// Register pair used by loads and 16-bit arithmetic: BC, DE, HL, SP.
    pub fn rp(&self, index: u8) -> u16 {
        match index & 0x03 {
            0 => self.bc(),
            1 => self.de(),
            2 => self.hl(),
            _ => self.sp,
        }
    }

    pub fn set_rp(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            0 => self.set_bc(value),
            1 => self.set_de(value),
            2 => self.set_hl(value),
            _ => self.sp = value,
        }
    }

    /// Register pair used by PUSH/POP: BC, DE, HL, AF.
    pub fn rp2(&self, index: u8) -> u16 {
        match index & 0x03 {
            3 => self.af(),
            rp => self.rp(rp),
        }
    }

    pub fn set_rp2(&mut self, index: u8, value: u16) {
        match index & 0x03 {
            3 => self.set_af(value),
            rp => self.set_rp(rp, value),
        }
    }

    #[inline]
    pub fn flag(&self, flag: Flag) -> bool {
        self.f & flag.mask() != 0
    }

    /// Rewrite all four flags at once.
    ///
    /// Bits set in `keep` retain their current value; every other flag bit
    /// takes the matching argument. The low nibble is always cleared.
    #[inline]
    pub fn set_flags(&mut self, keep: u8, z: bool, n: bool, h: bool, c: bool) {
        self.f = (self.f & keep & 0xF0)
            | (z as u8) << Flag::Z as u8
            | (n as u8) << Flag::N as u8
            | (h as u8) << Flag::H as u8
            | (c as u8) << Flag::C as u8;
    }
}
