mod alu;
mod bus;
mod cb;
mod exec;
mod helpers;
mod init;
mod interrupts;
mod regs;

pub use bus::Bus;
pub use interrupts::{InterruptDispatch, INT_VBLANK};
pub use regs::{Flag, Registers};

/// Sharp LR35902 execution engine.
///
/// The CPU never counts time itself: every memory access and internal delay
/// goes through the [`Bus`], which owns the cycle counter. [`Cpu::step`]
/// reports the delta so the caller can advance the rest of the machine.
#[derive(Clone, Debug)]
pub struct Cpu {
    pub regs: Registers,
    pub ime: bool,
    pub halted: bool,
    dispatch: InterruptDispatch,
}

impl Cpu {
    /// Execute one engine step (interrupt entry, one halted idle, or one
    /// instruction) and return the dot-clock units it consumed.
    pub fn step<B: Bus>(&mut self, bus: &mut B) -> u32 {
        let start = bus.cycles();

        if !self.service_interrupt(bus) {
            if self.halted {
                bus.idle();
            } else {
                let opcode = self.fetch8(bus);
                self.exec_opcode(bus, opcode);
            }
        }

        (bus.cycles() - start) as u32
    }

    pub fn dispatch(&self) -> InterruptDispatch {
        self.dispatch
    }
}

#[cfg(test)]
mod tests;
