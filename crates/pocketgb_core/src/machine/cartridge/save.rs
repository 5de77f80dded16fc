use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Size of the persisted external RAM: four 8 KiB banks.
pub const SAVE_SIZE: usize = 0x8000;

/// Byte-addressable backing store for cartridge RAM.
///
/// Offsets are always below [`SAVE_SIZE`].
pub trait SaveStorage {
    fn read(&self, offset: usize) -> u8;
    fn write(&mut self, offset: usize, value: u8);
    /// Persist outstanding writes. A no-op for volatile storage.
    fn flush(&mut self) -> Result<()>;
}

/// Volatile external RAM, zero-filled.
pub struct MemorySave {
    data: Box<[u8]>,
}

impl Default for MemorySave {
    fn default() -> Self {
        Self::new()
    }
}

impl MemorySave {
    pub fn new() -> Self {
        Self {
            data: vec![0; SAVE_SIZE].into_boxed_slice(),
        }
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl SaveStorage for MemorySave {
    fn read(&self, offset: usize) -> u8 {
        self.data[offset]
    }

    fn write(&mut self, offset: usize, value: u8) {
        self.data[offset] = value;
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

/// External RAM mirrored in memory and written back to a file.
///
/// The file is created zero-filled when missing and zero-extended when
/// shorter than [`SAVE_SIZE`]. Writes only mark the buffer dirty; `flush`
/// (and drop) write it back.
pub struct FileSave {
    path: PathBuf,
    data: Vec<u8>,
    dirty: bool,
}

impl FileSave {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let mut data = match fs::read(&path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!("creating save file {}", path.display());
                Vec::new()
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("failed to read save file {}", path.display()))
            }
        };

        let resized = data.len() != SAVE_SIZE;
        if !data.is_empty() && data.len() < SAVE_SIZE {
            log::warn!(
                "save file {} is {} bytes, zero-extending to {}",
                path.display(),
                data.len(),
                SAVE_SIZE
            );
        } else if data.len() > SAVE_SIZE {
            log::warn!(
                "save file {} is {} bytes, only the first {} are used",
                path.display(),
                data.len(),
                SAVE_SIZE
            );
        }
        data.resize(SAVE_SIZE, 0);

        let mut save = Self {
            path,
            data,
            dirty: resized,
        };
        // Make sure the file exists at its full size from the start.
        save.flush()?;
        log::info!("save storage: {}", save.path.display());
        Ok(save)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }
}

impl SaveStorage for FileSave {
    fn read(&self, offset: usize) -> u8 {
        self.data[offset]
    }

    fn write(&mut self, offset: usize, value: u8) {
        if self.data[offset] != value {
            self.data[offset] = value;
            self.dirty = true;
        }
    }

    fn flush(&mut self) -> Result<()> {
        if !self.dirty {
            return Ok(());
        }
        fs::write(&self.path, &self.data)
            .with_context(|| format!("failed to write save file {}", self.path.display()))?;
        self.dirty = false;
        log::debug!("flushed save file {}", self.path.display());
        Ok(())
    }
}

impl Drop for FileSave {
    fn drop(&mut self) {
        if let Err(err) = self.flush() {
            log::warn!("{err:#}");
        }
    }
}
