use std::collections::HashSet;

use anyhow::{Context, Error, Result};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Texture, WindowCanvas};
use typed_builder::TypedBuilder;

use pocketgb_common::key::Key;
use pocketgb_common::{Button, FrameSink, InputSource, Poll};
pub use sdl2;

#[derive(TypedBuilder)]
pub struct SdlInitInfo {
    pub width: u32,
    pub height: u32,
    #[builder(default = 4)]
    pub scale: u32,
    pub title: String,
}

/// One SDL session, split into its output and input halves so both can be
/// borrowed mutably at the same time.
pub struct SdlContext {
    pub display: SdlDisplay,
    pub input: SdlInput,
    _sdl_context: sdl2::Sdl,
}

/// Window plus the streaming texture frames are uploaded into.
///
/// Frames are uploaded as `RGBA32`, which matches the byte order of
/// `Color::to_u32` on every host.
pub struct SdlDisplay {
    canvas: WindowCanvas,
    texture: Texture,
    width: u32,
    pixels: Vec<u8>,
}

/// Event pump and the set of keys currently held.
pub struct SdlInput {
    event_pump: sdl2::EventPump,
    keys: HashSet<Key>,
}

impl SdlContext {
    pub fn new(sdl_init_info: SdlInitInfo) -> Result<Self> {
        let SdlInitInfo {
            width,
            height,
            scale,
            title,
        } = sdl_init_info;

        let sdl_context = sdl2::init().map_err(Error::msg).context("SDL init")?;
        let video_subsystem = sdl_context
            .video()
            .map_err(Error::msg)
            .context("SDL video subsystem")?;
        let window = video_subsystem
            .window(&title, width * scale, height * scale)
            .position_centered()
            .build()?;
        let canvas = window.into_canvas().present_vsync().build()?;
        let creator = canvas.texture_creator();
        // With `unsafe_textures` the texture carries no creator lifetime.
        let texture = creator.create_texture_streaming(PixelFormatEnum::RGBA32, width, height)?;
        let event_pump = sdl_context
            .event_pump()
            .map_err(Error::msg)
            .context("SDL event pump")?;

        log::info!(
            "opened {}x{} window \"{}\"",
            width * scale,
            height * scale,
            title
        );

        Ok(Self {
            display: SdlDisplay {
                canvas,
                texture,
                width,
                pixels: vec![0; (width * height * 4) as usize],
            },
            input: SdlInput {
                event_pump,
                keys: HashSet::new(),
            },
            _sdl_context: sdl_context,
        })
    }
}

impl FrameSink for SdlDisplay {
    fn present(&mut self, frame: &[u32]) -> Result<()> {
        for (dst, &pixel) in self.pixels.chunks_exact_mut(4).zip(frame) {
            dst.copy_from_slice(&pixel.to_le_bytes());
        }
        self.texture
            .update(None, &self.pixels, (self.width * 4) as usize)
            .context("texture upload")?;
        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, None)
            .map_err(Error::msg)?;
        self.canvas.present();
        Ok(())
    }
}

impl InputSource for SdlInput {
    fn poll(&mut self) -> Result<Poll> {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return Ok(Poll::Quit),
                Event::KeyDown {
                    keycode: Some(keycode),
                    ..
                } => {
                    self.keys.insert(map_keycode(keycode));
                }
                Event::KeyUp {
                    keycode: Some(keycode),
                    ..
                } => {
                    self.keys.remove(&map_keycode(keycode));
                }
                _ => {}
            }
        }
        Ok(Poll::Continue)
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.keys
            .iter()
            .any(|&key| Button::from_key(key) == Some(button))
    }
}

pub fn map_keycode(keycode: Keycode) -> Key {
    match keycode {
        Keycode::Up => Key::Up,
        Keycode::Down => Key::Down,
        Keycode::Left => Key::Left,
        Keycode::Right => Key::Right,
        Keycode::Z => Key::Z,
        Keycode::X => Key::X,
        Keycode::Return => Key::Return,
        Keycode::Tab => Key::Tab,
        Keycode::Escape => Key::Escape,
        _ => Key::None,
    }
}
