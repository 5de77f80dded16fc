use super::{GameBoyBus, REG_JOYP};

impl GameBoyBus {
    /// P1 as seen by software.
    ///
    /// Bit 4 clear selects the direction group, otherwise bit 5 clear selects
    /// the action group. The result is the complement of the group's select
    /// bit plus its pressed buttons, so a pressed button reads as 0.
    pub(super) fn read_joyp(&self) -> u8 {
        let select = self.io(REG_JOYP);
        if select & 0x10 == 0 {
            !(0x10 | self.buttons.directions())
        } else if select & 0x20 == 0 {
            !(0x20 | self.buttons.actions())
        } else {
            0xFF
        }
    }
}
