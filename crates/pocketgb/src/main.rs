use std::path::PathBuf;

use clap::Parser;
use pocketgb::Options;

/// DMG Game Boy emulator
#[derive(Parser, Debug)]
#[command(name = "pocketgb", version)]
#[command(about = "A cycle-counted DMG Game Boy emulator", long_about = None)]
struct Args {
    /// Path to the cartridge image
    rom: PathBuf,

    /// Battery save file (defaults to the ROM path with a .sav extension)
    #[arg(short, long)]
    save: Option<PathBuf>,

    /// Integer window scale
    #[arg(long, default_value_t = pocketgb_core::SCREEN_SCALE)]
    scale: u32,

    /// Enter each interrupt at its own vector instead of 0x0040
    #[arg(long)]
    vectored_interrupts: bool,

    /// Flush dirty save data every N frames (0 = only on exit)
    #[arg(long, default_value_t = 600)]
    save_flush_frames: u32,

    /// Run N frames without opening a window, then exit
    #[arg(short, long)]
    frames: Option<u64>,

    /// With --frames, write the final frame as raw RGBA to this path
    #[arg(long, requires = "frames")]
    dump: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let options = Options {
        rom: args.rom,
        save: args.save,
        scale: args.scale,
        vectored_interrupts: args.vectored_interrupts,
        save_flush_frames: args.save_flush_frames,
        frames: args.frames,
        dump: args.dump,
    };

    if let Err(err) = pocketgb::run(&options) {
        log::error!("{err:#}");
        eprintln!("pocketgb: {err:#}");
        std::process::exit(1);
    }
}
