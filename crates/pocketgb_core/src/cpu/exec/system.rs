use crate::cpu::Cpu;

impl Cpu {
    /// NOP, STOP and the unused opcode slots. All are single-byte no-ops.
    pub(super) fn exec_nop(&mut self, opcode: u8) {
        if opcode != 0x00 {
            log::trace!(
                "opcode 0x{:02X} at 0x{:04X} treated as NOP",
                opcode,
                self.regs.pc.wrapping_sub(1)
            );
        }
    }

    /// DI (0xF3) and EI (0xFB). Both take effect immediately.
    pub(super) fn exec_di_ei(&mut self, opcode: u8) {
        self.ime = opcode == 0xFB;
    }
}
