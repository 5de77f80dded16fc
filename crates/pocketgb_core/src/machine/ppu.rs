use bitflags::bitflags;

use crate::cpu::{Bus, INT_VBLANK};
use crate::{SCREEN_HEIGHT, SCREEN_WIDTH};

use super::bus::{GameBoyBus, REG_LCDC, REG_LY};
use super::{DOTS_PER_LINE, LINES_PER_FRAME};

mod render;

bitflags! {
    /// LCDC (0xFF40) bits consulted by the compositor.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct Lcdc: u8 {
        const ENABLE = 1 << 7;
        const WINDOW_MAP_HIGH = 1 << 6;
        const WINDOW_ENABLE = 1 << 5;
        const TILE_DATA_UNSIGNED = 1 << 4;
        const BG_MAP_HIGH = 1 << 3;
        const OBJ_ENABLE = 1 << 1;
    }
}

bitflags! {
    /// Byte 3 of an OAM entry.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct SpriteAttributes: u8 {
        const BEHIND_BG = 1 << 7;
        const FLIP_Y = 1 << 6;
        const FLIP_X = 1 << 5;
        const OBP1 = 1 << 4;
    }
}

/// Scanline timing state machine and the frame it renders into.
pub struct Ppu {
    dot: u16,
    frame: Box<[u32]>,
}

impl Default for Ppu {
    fn default() -> Self {
        Self::new()
    }
}

impl Ppu {
    pub fn new() -> Self {
        Self {
            dot: 32,
            frame: vec![0; SCREEN_WIDTH * SCREEN_HEIGHT].into_boxed_slice(),
        }
    }

    /// Dot position within the current line.
    pub fn dot(&self) -> u16 {
        self.dot
    }

    /// The 160x144 frame, row-major, packed with `Color::to_u32`.
    pub fn frame(&self) -> &[u32] {
        &self.frame
    }

    /// Advance by `dots` dot-clock units. Returns `true` if a frame was
    /// completed along the way.
    pub fn step(&mut self, bus: &mut GameBoyBus, dots: u32) -> bool {
        let mut ready = false;
        for _ in 0..dots {
            ready |= self.tick(bus);
        }
        ready
    }

    /// Advance by a single dot.
    pub fn tick(&mut self, bus: &mut GameBoyBus) -> bool {
        let lcdc = Lcdc::from_bits_truncate(bus.io(REG_LCDC));
        if !lcdc.contains(Lcdc::ENABLE) {
            self.dot = 0;
            bus.set_io(REG_LY, 0);
            return false;
        }

        self.dot += 1;
        if self.dot < DOTS_PER_LINE {
            return false;
        }
        self.dot = 0;

        let ly = bus.io(REG_LY);
        if (ly as usize) < SCREEN_HEIGHT {
            render::render_line(bus, lcdc, ly, &mut self.frame);
        }

        let ready = ly as usize == SCREEN_HEIGHT - 1;
        if ready {
            bus.request_interrupt(INT_VBLANK);
            log::debug!("vblank at cycle {}", bus.cycles());
        }

        bus.set_io(REG_LY, ((ly as u16 + 1) % LINES_PER_FRAME as u16) as u8);
        ready
    }
}
