// Block device interface consumed by the filesystem under test.

use crate::Result;

// Blocks are indexed, starting at 0.
pub type BlockAddr = u32;

/// Each block device the filesystem runs on must be represented by a
/// structure that implements this trait. Geometry is fixed for the
/// lifetime of the device.
pub trait BlockDevice {
    /// Minimum read granularity in bytes. Read offsets and lengths are
    /// multiples of this.
    fn read_size(&self) -> usize;

    /// Minimum program granularity in bytes. Program offsets and lengths
    /// are multiples of this.
    fn prog_size(&self) -> usize;

    /// Size of an erasable block in bytes.
    fn block_size(&self) -> usize;

    /// Total number of blocks.
    fn block_count(&self) -> BlockAddr;

    /// Read `buf.len()` bytes starting at `off` within `block`.
    /// A worn out block may return `Err(Corrupt)`.
    fn read(&mut self, block: BlockAddr, off: usize, buf: &mut [u8]) -> Result<()>;

    /// Program `data` at `off` within `block`. The region must have been
    /// erased since it was last programmed.
    fn prog(&mut self, block: BlockAddr, off: usize, data: &[u8]) -> Result<()>;

    /// Erase `block`, making it programmable again.
    fn erase(&mut self, block: BlockAddr) -> Result<()>;

    /// Make every prior prog and erase durable.
    fn sync(&mut self) -> Result<()>;
}
