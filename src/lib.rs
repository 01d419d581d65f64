//! Emulated block device with bad-block and power-loss fault injection,
//! plus a scenario runner that drives a filesystem under test through
//! simulated crashes.
//!
//! The device ([`emubd::EmuBd`]) keeps its blocks copy-on-write, so the
//! runner can fork the whole device at every crash point for next to
//! nothing and explore what the filesystem sees after each one.

pub mod bd;
mod block;
pub mod disk;
pub mod emubd;
pub mod prng;
pub mod runner;

use thiserror::Error;

pub use bd::{BlockAddr, BlockDevice};
pub use emubd::{BadBlockBehavior, EmuBd, EmuConfig, Geometry, PowerLossBehavior, Resume};
pub use runner::{PowerLossAware, Report, Runner, Strategy};

/// Errors returned by the emulated device.
///
/// Misuse of the device (misaligned or out of range accesses, programming
/// a region that was never erased) is not an error, it panics.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A simulated hardware fault from the bad-block model.
    #[error("block {block} is corrupt")]
    Corrupt { block: BlockAddr },
    /// Growing a block table or cloning a block failed to allocate.
    #[error("out of memory")]
    NoMemory,
    /// The disk mirror could not be written.
    #[error("disk mirror I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Power was cut in the middle of a prog or erase.
    ///
    /// Not a fault: the operation never returns to its caller on real
    /// hardware. The filesystem under test passes this up untouched and the
    /// [`Runner`] resumes from a fresh mount.
    #[error("power lost")]
    PowerLoss,
}

impl Error {
    /// Negative error code in the convention of C block-device drivers.
    pub fn errno(&self) -> i32 {
        match self {
            Error::Corrupt { .. } => -84,
            Error::NoMemory => -12,
            Error::Io(_) => -5,
            Error::PowerLoss => -4,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
