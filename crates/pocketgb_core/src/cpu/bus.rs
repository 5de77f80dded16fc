/// Timed view of the address space as seen by the CPU.
///
/// Every `read8`/`write8` and every `idle` costs one machine cycle (four
/// dot-clock units) and the implementor is expected to add that to its
/// running counter. The CPU derives all instruction timing from these calls.
pub trait Bus {
    fn read8(&mut self, addr: u16) -> u8;
    fn write8(&mut self, addr: u16, value: u8);

    /// Internal CPU delay with no memory traffic.
    fn idle(&mut self);

    /// Total dot-clock units consumed so far.
    fn cycles(&self) -> u64;

    /// Interrupt request register (IF, 0xFF0F).
    ///
    /// These accessors are untimed: the interrupt controller inspects the
    /// registers directly rather than through a bus cycle.
    fn interrupt_flag(&self) -> u8;
    fn set_interrupt_flag(&mut self, value: u8);

    /// Interrupt enable register (IE, 0xFFFF).
    fn interrupt_enable(&self) -> u8;
}
