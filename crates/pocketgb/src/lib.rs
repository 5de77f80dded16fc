use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pocketgb_core::{
    Cartridge, FileSave, GameBoy, InterruptDispatch, MachineConfig, SCREEN_HEIGHT, SCREEN_WIDTH,
};
use pocketgb_sdl2::{SdlContext, SdlInitInfo};

/// Everything the launcher needs to start a session.
#[derive(Clone, Debug)]
pub struct Options {
    pub rom: PathBuf,
    /// Defaults to the ROM path with a `.sav` extension.
    pub save: Option<PathBuf>,
    pub scale: u32,
    pub vectored_interrupts: bool,
    pub save_flush_frames: u32,
    /// Run this many frames without a window, then exit.
    pub frames: Option<u64>,
    /// Write the last headless frame here as raw RGBA bytes.
    pub dump: Option<PathBuf>,
}

impl Options {
    pub fn save_path(&self) -> PathBuf {
        self.save
            .clone()
            .unwrap_or_else(|| self.rom.with_extension("sav"))
    }

    pub fn machine_config(&self) -> MachineConfig {
        let dispatch = if self.vectored_interrupts {
            InterruptDispatch::Vectored
        } else {
            InterruptDispatch::SingleVector
        };
        MachineConfig::builder()
            .interrupt_dispatch(dispatch)
            .save_flush_frames(self.save_flush_frames)
            .build()
    }
}

pub fn load_gameboy(options: &Options) -> Result<GameBoy> {
    let rom = fs::read(&options.rom)
        .with_context(|| format!("failed to read ROM {}", options.rom.display()))?;
    // Validate before the save file is created.
    Cartridge::validate_image(&rom)
        .with_context(|| format!("failed to load cartridge {}", options.rom.display()))?;
    let save = FileSave::open(options.save_path())?;
    let cartridge = Cartridge::new(rom, Box::new(save))
        .with_context(|| format!("failed to load cartridge {}", options.rom.display()))?;
    Ok(GameBoy::new(cartridge, options.machine_config()))
}

pub fn run(options: &Options) -> Result<()> {
    let mut gb = load_gameboy(options)?;
    match options.frames {
        Some(frames) => run_headless(&mut gb, frames, options.dump.as_deref()),
        None => run_gameboy(&mut gb, options.scale),
    }
}

pub fn run_gameboy(gb: &mut GameBoy, scale: u32) -> Result<()> {
    let title = match gb.bus().cartridge().title() {
        "" => "pocketgb".to_string(),
        name => format!("pocketgb - {name}"),
    };
    let init_info = SdlInitInfo::builder()
        .width(SCREEN_WIDTH as u32)
        .height(SCREEN_HEIGHT as u32)
        .scale(scale)
        .title(title)
        .build();
    let mut sdl = SdlContext::new(init_info)?;
    gb.run(&mut sdl.display, &mut sdl.input)
}

/// Run `frames` frames without a window, optionally dumping the last one
/// as raw RGBA bytes (160 x 144 x 4).
pub fn run_headless(gb: &mut GameBoy, frames: u64, dump: Option<&Path>) -> Result<()> {
    log::info!("running {} frames headless", frames);
    for _ in 0..frames {
        gb.step_frame();
    }
    gb.flush_save()?;

    if let Some(path) = dump {
        let bytes: Vec<u8> = gb.frame().iter().flat_map(|p| p.to_le_bytes()).collect();
        fs::write(path, &bytes)
            .with_context(|| format!("failed to write frame dump {}", path.display()))?;
        log::info!(
            "wrote {} bytes ({}x{} rgba) to {}",
            bytes.len(),
            SCREEN_WIDTH,
            SCREEN_HEIGHT,
            path.display()
        );
    }

    println!(
        "completed {} frames ({} dots), pc=0x{:04X}",
        gb.frames(),
        gb.cycles(),
        gb.cpu.regs.pc
    );
    Ok(())
}
