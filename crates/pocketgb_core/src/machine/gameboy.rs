use anyhow::{Context, Result};
use pocketgb_common::{Buttons, FrameSink, InputSource, Poll};

use crate::cpu::{Bus, Cpu};

use super::bus::REG_LCDC;
use super::ppu::{Lcdc, Ppu};
use super::{Cartridge, GameBoyBus, MachineConfig, DOTS_PER_FRAME};

/// High-level DMG machine: CPU, bus and PPU driven in lockstep.
///
/// The CPU reports how many dot-clock units each step consumed; the machine
/// feeds exactly that many to the divider and the PPU.
pub struct GameBoy {
    pub cpu: Cpu,
    bus: GameBoyBus,
    ppu: Ppu,
    config: MachineConfig,
    frames: u64,
}

impl GameBoy {
    pub fn new(cartridge: Cartridge, config: MachineConfig) -> Self {
        log::info!(
            "machine: dispatch={:?} save_flush_frames={}",
            config.interrupt_dispatch,
            config.save_flush_frames
        );
        Self {
            cpu: Cpu::new(config.interrupt_dispatch),
            bus: GameBoyBus::new(cartridge),
            ppu: Ppu::new(),
            config,
            frames: 0,
        }
    }

    /// One CPU step followed by the matching divider and PPU advance.
    ///
    /// Returns `true` if the PPU finished a frame during this step.
    pub fn step(&mut self) -> bool {
        let dots = self.cpu.step(&mut self.bus);
        self.bus.advance_divider(dots);
        let ready = self.ppu.step(&mut self.bus, dots);
        if ready {
            self.frames += 1;
        }
        ready
    }

    /// Step until a frame completes.
    ///
    /// With the LCD switched off no frame ever completes, so this gives up
    /// after one frame's worth of dots and returns `false`.
    pub fn step_frame(&mut self) -> bool {
        let start = self.bus.cycles();
        loop {
            if self.step() {
                return true;
            }
            let lcd_on =
                Lcdc::from_bits_truncate(self.bus.io(REG_LCDC)).contains(Lcdc::ENABLE);
            if !lcd_on && self.bus.cycles() - start >= DOTS_PER_FRAME as u64 {
                return false;
            }
        }
    }

    /// Run until the input source asks to quit.
    ///
    /// Each completed frame is handed to `sink`. After every frame (or every
    /// frame-length timeout while the LCD is off) `input` is polled and
    /// its buttons latched for the next frame. Dirty save data is flushed
    /// every `save_flush_frames` frames and once more on exit.
    pub fn run<S, I>(&mut self, sink: &mut S, input: &mut I) -> Result<()>
    where
        S: FrameSink + ?Sized,
        I: InputSource + ?Sized,
    {
        log::info!("starting emulation of \"{}\"", self.bus.cartridge().title());
        loop {
            // With the LCD off no frame completes; keep polling so quit
            // still works, but never hand out a partial buffer.
            let completed = self.step_frame();
            if completed {
                sink.present(self.ppu.frame())
                    .context("failed to present frame")?;
            }

            if input.poll()? == Poll::Quit {
                break;
            }
            self.set_buttons(Buttons::sample(&*input));

            let interval = self.config.save_flush_frames as u64;
            if completed && interval != 0 && self.frames % interval == 0 {
                if let Err(err) = self.flush_save() {
                    log::warn!("periodic save flush failed: {err:#}");
                }
            }
            if completed && self.frames % 60 == 0 {
                log::debug!(
                    "frame {}: pc=0x{:04X} cycles={}",
                    self.frames,
                    self.cpu.regs.pc,
                    self.bus.cycles()
                );
            }
        }

        log::info!("shutting down after {} frames", self.frames);
        self.flush_save()
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &[u32] {
        self.ppu.frame()
    }

    /// Frames completed since power-on.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Total dot-clock units consumed since power-on.
    pub fn cycles(&self) -> u64 {
        self.bus.cycles()
    }

    pub fn set_buttons(&mut self, buttons: Buttons) {
        self.bus.set_buttons(buttons);
    }

    pub fn flush_save(&mut self) -> Result<()> {
        self.bus.cartridge_mut().flush_save()
    }

    pub fn bus(&self) -> &GameBoyBus {
        &self.bus
    }

    pub fn bus_mut(&mut self) -> &mut GameBoyBus {
        &mut self.bus
    }

    pub fn ppu(&self) -> &Ppu {
        &self.ppu
    }

    pub fn config(&self) -> &MachineConfig {
        &self.config
    }
}
