use super::{Bus, Cpu, Flag};

impl Cpu {
    /// Handle CB-prefixed instructions (bit operations, shifts, and rotates).
    ///
    /// The second byte splits into a family (bits 6-7), a row or bit number
    /// (bits 3-5) and an operand slot (bits 0-2).
    pub(super) fn step_cb<B: Bus>(&mut self, bus: &mut B) {
        let cb = self.fetch8(bus);
        let x = cb >> 6;
        let y = (cb >> 3) & 0x07;
        let z = cb & 0x07;

        let value = self.read_reg8(bus, z);

        match x {
            // RLC, RRC, RL, RR, SLA, SRA, SWAP, SRL
            0 => {
                let result = self.rotate(y, value, false);
                self.write_reg8(bus, z, result);
            }
            // BIT b, r
            1 => {
                let clear = value & (1 << y) == 0;
                self.regs
                    .set_flags(Flag::C.mask(), clear, false, true, false);
            }
            // RES b, r
            2 => self.write_reg8(bus, z, value & !(1 << y)),
            // SET b, r
            _ => self.write_reg8(bus, z, value | (1 << y)),
        }
    }
}
