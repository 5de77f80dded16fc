mod save;

use anyhow::{bail, Result};

pub use save::{FileSave, MemorySave, SaveStorage, SAVE_SIZE};

const ROM_BANK_SIZE: usize = 0x4000;
const RAM_BANK_SIZE: usize = 0x2000;
const MIN_ROM_SIZE: usize = 2 * ROM_BANK_SIZE;
const RAM_BANKS: u8 = (SAVE_SIZE / RAM_BANK_SIZE) as u8;

/// Cartridge image plus its single ROM/RAM banking scheme.
///
/// Bank 0 is fixed at 0x0000-0x3FFF. A write to 0x2000-0x3FFF selects the
/// bank shown at 0x4000-0x7FFF (6 bits, 0 becomes 1) and a write to
/// 0x4000-0x5FFF selects one of four 8 KiB external RAM banks.
pub struct Cartridge {
    rom: Vec<u8>,
    rom_banks: usize,
    rom_bank: usize,
    ram_bank: u8,
    ram: Box<dyn SaveStorage>,
    title: String,
    kind: u8,
}

impl Cartridge {
    /// Reject images that cannot hold both fixed and switchable bank.
    pub fn validate_image(rom: &[u8]) -> Result<()> {
        if rom.len() < MIN_ROM_SIZE {
            bail!(
                "cartridge image is {} bytes, expected at least {} bytes",
                rom.len(),
                MIN_ROM_SIZE
            );
        }
        Ok(())
    }

    pub fn new(rom: Vec<u8>, ram: Box<dyn SaveStorage>) -> Result<Self> {
        Self::validate_image(&rom)?;

        let rom_banks = rom.len().div_ceil(ROM_BANK_SIZE);
        let title = parse_title(&rom[0x0134..=0x0143]);
        let kind = rom[0x0147];
        log::info!(
            "cartridge \"{}\": type 0x{:02X}, {} ROM banks ({} KiB)",
            title,
            kind,
            rom_banks,
            rom.len() / 1024
        );

        Ok(Self {
            rom,
            rom_banks,
            rom_bank: 1,
            ram_bank: 0,
            ram,
            title,
            kind,
        })
    }

    /// Header title (0x0134-0x0143) with trailing padding stripped.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Header cartridge type byte (0x0147).
    pub fn kind(&self) -> u8 {
        self.kind
    }

    pub fn rom_banks(&self) -> usize {
        self.rom_banks
    }

    /// Bank currently mapped at 0x4000-0x7FFF, before wrapping.
    pub fn rom_bank(&self) -> usize {
        self.rom_bank
    }

    pub fn ram_bank(&self) -> u8 {
        self.ram_bank
    }

    pub(crate) fn rom_read(&self, addr: u16) -> u8 {
        let index = if addr < 0x4000 {
            addr as usize
        } else {
            let bank = self.rom_bank % self.rom_banks;
            bank * ROM_BANK_SIZE + (addr as usize & (ROM_BANK_SIZE - 1))
        };
        self.rom.get(index).copied().unwrap_or(0xFF)
    }

    pub(crate) fn rom_write(&mut self, addr: u16, value: u8) {
        match addr {
            0x2000..=0x3FFF => {
                let bank = match value & 0x3F {
                    0 => 1,
                    bank => bank as usize,
                };
                if bank != self.rom_bank {
                    log::trace!("ROM bank {} -> {}", self.rom_bank, bank);
                }
                self.rom_bank = bank;
            }
            0x4000..=0x5FFF if value < RAM_BANKS => {
                if value != self.ram_bank {
                    log::trace!("RAM bank {} -> {}", self.ram_bank, value);
                }
                self.ram_bank = value;
            }
            // RAM enable, out-of-range RAM banks and the mode register are
            // not modelled.
            _ => {}
        }
    }

    pub(crate) fn ram_read(&self, addr: u16) -> u8 {
        self.ram.read(self.ram_offset(addr))
    }

    pub(crate) fn ram_write(&mut self, addr: u16, value: u8) {
        let offset = self.ram_offset(addr);
        self.ram.write(offset, value);
    }

    pub fn flush_save(&mut self) -> Result<()> {
        self.ram.flush()
    }

    #[inline]
    fn ram_offset(&self, addr: u16) -> usize {
        self.ram_bank as usize * RAM_BANK_SIZE + (addr as usize & (RAM_BANK_SIZE - 1))
    }
}

fn parse_title(bytes: &[u8]) -> String {
    let end = bytes
        .iter()
        .position(|&b| b == 0 || (!b.is_ascii_graphic() && b != b' '))
        .unwrap_or(bytes.len());
    String::from_utf8_lossy(&bytes[..end]).trim_end().to_string()
}
