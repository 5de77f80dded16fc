use typed_builder::TypedBuilder;

use crate::cpu::InterruptDispatch;

/// Machine-level options that do not come from the cartridge.
#[derive(Clone, Debug, TypedBuilder)]
pub struct MachineConfig {
    /// How pending interrupts are entered.
    #[builder(default)]
    pub interrupt_dispatch: InterruptDispatch,
    /// Flush dirty external RAM every this many frames during `run`.
    /// Zero disables the periodic flush; the shutdown flush still happens.
    #[builder(default = 600)]
    pub save_flush_frames: u32,
}

impl Default for MachineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
