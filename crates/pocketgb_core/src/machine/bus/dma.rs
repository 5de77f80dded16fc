use crate::cpu::Bus;

use super::GameBoyBus;

impl GameBoyBus {
    /// OAM DMA: copy 160 bytes from `value << 8` into 0xFE00-0xFE9F.
    ///
    /// Each byte goes through the timed read path, so the transfer is paid
    /// for by the CPU instruction that triggered it.
    pub(super) fn do_oam_dma(&mut self, value: u8) {
        let base = (value as u16) << 8;
        log::trace!("OAM DMA from 0x{:04X}", base);
        for i in (0..0xA0u16).rev() {
            let byte = self.read8(base | i);
            self.io[i as usize] = byte;
        }
    }
}
