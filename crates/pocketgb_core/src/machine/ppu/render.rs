use pocketgb_common::Color;

use crate::machine::bus::{
    GameBoyBus, REG_BGP, REG_OBP0, REG_OBP1, REG_SCX, REG_SCY, REG_WX, REG_WY,
};
use crate::SCREEN_WIDTH;

use super::{Lcdc, SpriteAttributes};

/// Shades for the background, the window and OBP1 sprites.
const BG_SHADES: [Color; 4] = [
    Color::WHITE,
    Color::new_rgb(0x63, 0xA5, 0xFF),
    Color::BLUE,
    Color::BLACK,
];

/// Shades for OBP0 sprites.
const OBJ_SHADES: [Color; 4] = [
    Color::WHITE,
    Color::new_rgb(0xFF, 0x84, 0x84),
    Color::new_rgb(0x94, 0x3A, 0x3A),
    Color::BLACK,
];

const MAP_LOW: usize = 0x1800;
const MAP_HIGH: usize = 0x1C00;

/// Two-bit colour index of one pixel of a tile.
///
/// `tile` indexes 16-byte tiles from the start of VRAM. `bit` 7 is the
/// leftmost pixel.
#[inline]
pub(crate) fn tile_color(vram: &[u8], tile: usize, row: u8, bit: u8) -> u8 {
    let base = tile * 16 + row as usize * 2;
    let lo = vram[base];
    let hi = vram[base + 1];
    ((hi >> bit) & 1) << 1 | ((lo >> bit) & 1)
}

/// Render scanline `ly` into `frame`.
pub(super) fn render_line(bus: &GameBoyBus, lcdc: Lcdc, ly: u8, frame: &mut [u32]) {
    let vram = bus.vram();
    let oam = bus.oam();
    let (scx, scy) = (bus.io(REG_SCX), bus.io(REG_SCY));
    let (wx, wy) = (bus.io(REG_WX), bus.io(REG_WY));
    let row = &mut frame[ly as usize * SCREEN_WIDTH..][..SCREEN_WIDTH];

    for (x, pixel) in row.iter_mut().enumerate() {
        let x = x as u8;
        let in_window = lcdc.contains(Lcdc::WINDOW_ENABLE)
            && ly >= wy
            && (x as i16) >= (wx as i16) - 7;

        let (map_x, map_y, map_high) = if in_window {
            (
                x.wrapping_sub(wx).wrapping_add(7),
                ly.wrapping_sub(wy),
                lcdc.contains(Lcdc::WINDOW_MAP_HIGH),
            )
        } else {
            (
                x.wrapping_add(scx),
                ly.wrapping_add(scy),
                lcdc.contains(Lcdc::BG_MAP_HIGH),
            )
        };

        let map = if map_high { MAP_HIGH } else { MAP_LOW };
        let index = vram[map + (map_y as usize / 8) * 32 + map_x as usize / 8];
        let tile = if lcdc.contains(Lcdc::TILE_DATA_UNSIGNED) {
            index as usize
        } else {
            (256 + index as i8 as isize) as usize
        };
        let bg_color = tile_color(vram, tile, map_y & 7, 7 - (map_x & 7));

        let (color, palette, shades) = if lcdc.contains(Lcdc::OBJ_ENABLE) {
            match sprite_at(vram, oam, x, ly, bg_color) {
                Some((color, attrs)) if attrs.contains(SpriteAttributes::OBP1) => {
                    (color, bus.io(REG_OBP1), &BG_SHADES)
                }
                Some((color, _)) => (color, bus.io(REG_OBP0), &OBJ_SHADES),
                None => (bg_color, bus.io(REG_BGP), &BG_SHADES),
            }
        } else {
            (bg_color, bus.io(REG_BGP), &BG_SHADES)
        };

        let shade = (palette >> (2 * color)) & 0x03;
        *pixel = shades[shade as usize].to_u32();
    }
}

/// First sprite in OAM order with an opaque, visible pixel at (x, ly).
fn sprite_at(
    vram: &[u8],
    oam: &[u8],
    x: u8,
    ly: u8,
    bg_color: u8,
) -> Option<(u8, SpriteAttributes)> {
    oam.chunks_exact(4).find_map(|sprite| {
        let sx = x.wrapping_sub(sprite[1]).wrapping_add(8);
        let sy = ly.wrapping_sub(sprite[0]).wrapping_add(16);
        if sx >= 8 || sy >= 8 {
            return None;
        }

        let attrs = SpriteAttributes::from_bits_truncate(sprite[3]);
        let row = if attrs.contains(SpriteAttributes::FLIP_Y) {
            sy ^ 7
        } else {
            sy
        };
        let bit = if attrs.contains(SpriteAttributes::FLIP_X) {
            sx
        } else {
            sx ^ 7
        };
        let color = tile_color(vram, sprite[2] as usize, row, bit);

        if color == 0 || (attrs.contains(SpriteAttributes::BEHIND_BG) && bg_color != 0) {
            return None;
        }
        Some((color, attrs))
    })
}
