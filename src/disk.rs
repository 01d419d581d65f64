//! Optional on-disk mirror of the emulated device.
//!
//! The mirror is a plain file laid out block after block, updated after
//! every prog and erase so the device can be inspected with external tools
//! while a test runs. It is write-only from the device's point of view;
//! the in-memory block store is always authoritative.

use std::cell::RefCell;
use std::fs::{File, OpenOptions};
use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::bd::BlockAddr;
use crate::Result;

#[derive(Debug)]
pub struct DiskMirror {
    path: PathBuf,
    block_size: usize,
    file: RefCell<File>,
}

impl DiskMirror {
    /// Create (or truncate) the mirror file and fill it with what an
    /// unallocated device reads as.
    pub fn create(
        path: impl AsRef<Path>,
        block_size: usize,
        block_count: BlockAddr,
        fill: u8,
    ) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!("Creating disk mirror at {path:?}");
        let mut file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;
        let block = vec![fill; block_size];
        for _ in 0..block_count {
            file.write_all(&block)?;
        }
        file.flush()?;
        Ok(DiskMirror {
            path,
            block_size,
            file: RefCell::new(file),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write `data` at `off` within `block`.
    pub fn write(&self, block: BlockAddr, off: usize, data: &[u8]) -> Result<()> {
        let pos = block as u64 * self.block_size as u64 + off as u64;
        let mut file = self.file.borrow_mut();
        file.seek(SeekFrom::Start(pos))?;
        file.write_all(data)?;
        Ok(())
    }
}
