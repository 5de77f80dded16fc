#![allow(dead_code)]

use anyhow::Result;
use pocketgb_common::{Button, FrameSink, InputSource, Poll};
use pocketgb_core::{Cartridge, GameBoy, MachineConfig, MemorySave};

/// 32 KiB image with `program` placed at the 0x0100 entry point.
pub fn rom_with_entry(program: &[u8]) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000];
    rom[0x0100..0x0100 + program.len()].copy_from_slice(program);
    rom
}

pub fn machine(rom: Vec<u8>, config: MachineConfig) -> GameBoy {
    let cartridge = Cartridge::new(rom, Box::new(MemorySave::new())).expect("valid cartridge");
    GameBoy::new(cartridge, config)
}

/// Keeps a copy of every presented frame.
#[derive(Default)]
pub struct CollectingSink {
    pub frames: Vec<Vec<u32>>,
}

impl FrameSink for CollectingSink {
    fn present(&mut self, frame: &[u32]) -> Result<()> {
        self.frames.push(frame.to_vec());
        Ok(())
    }
}

/// Holds a fixed set of buttons and asks to quit on the `polls`-th poll.
pub struct ScriptedInput {
    pub held: Vec<Button>,
    pub polls: usize,
    pub seen: usize,
}

impl ScriptedInput {
    pub fn quit_after(polls: usize) -> Self {
        Self {
            held: Vec::new(),
            polls,
            seen: 0,
        }
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Result<Poll> {
        self.seen += 1;
        Ok(if self.seen >= self.polls {
            Poll::Quit
        } else {
            Poll::Continue
        })
    }

    fn is_pressed(&self, button: Button) -> bool {
        self.held.contains(&button)
    }
}
