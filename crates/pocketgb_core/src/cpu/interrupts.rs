use super::{Bus, Cpu};

/// IF/IE bit raised by the PPU at the start of vertical blank.
pub const INT_VBLANK: u8 = 0x01;

/// How a pending interrupt is turned into a jump.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum InterruptDispatch {
    /// Any pending, enabled request (all eight bits count) clears every IF
    /// bit and enters 0x0040.
    #[default]
    SingleVector,
    /// The lowest pending, enabled bit among the five sources is acknowledged
    /// alone and entered at `0x0040 + 8 * bit`.
    Vectored,
}

impl Cpu {
    /// Enter an interrupt handler if IME is set and a request is pending.
    ///
    /// Returns `true` when the step was consumed by the interrupt entry.
    pub(super) fn service_interrupt<B: Bus>(&mut self, bus: &mut B) -> bool {
        if !self.ime {
            return false;
        }
        let iflags = bus.interrupt_flag();
        let pending = iflags & bus.interrupt_enable();

        let vector = match self.dispatch {
            InterruptDispatch::SingleVector if pending != 0 => {
                bus.set_interrupt_flag(0);
                0x0040
            }
            // Only the five hardware sources have their own vector.
            InterruptDispatch::Vectored if pending & 0x1F != 0 => {
                let index = (pending & 0x1F).trailing_zeros() as u16;
                bus.set_interrupt_flag(iflags & !(1 << index));
                0x0040 + index * 8
            }
            _ => return false,
        };

        self.ime = false;
        self.halted = false;
        log::trace!(
            "interrupt: vector=0x{:04X} pc=0x{:04X} IF=0x{:02X}",
            vector,
            self.regs.pc,
            iflags
        );

        bus.idle();
        bus.idle();
        self.push_u16(bus, self.regs.pc);
        self.regs.pc = vector;
        true
    }
}
