// A single emulated erase block and its fault bookkeeping.

use crate::{Error, Result};

/// Set in `bad_bit` when a test pinned the position, in which case erases
/// leave it alone instead of drawing a new one.
pub(crate) const BAD_BIT_PINNED: u32 = 0x8000_0000;

#[derive(Clone, Debug)]
pub(crate) struct Block {
    // Erase cycles consumed so far.
    pub wear: u32,
    // Reads covering the bad bit may flip it.
    pub metastable: bool,
    // Bit index within the block, optionally tagged with BAD_BIT_PINNED.
    pub bad_bit: u32,
    pub data: Vec<u8>,
}

impl Block {
    pub fn try_new(size: usize, fill: u8, bad_bit: u32) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(size).map_err(|_| Error::NoMemory)?;
        data.resize(size, fill);
        Ok(Block {
            wear: 0,
            metastable: false,
            bad_bit,
            data,
        })
    }

    /// Clone, reporting allocation failure instead of aborting.
    pub fn try_clone(&self) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(self.data.len())
            .map_err(|_| Error::NoMemory)?;
        data.extend_from_slice(&self.data);
        Ok(Block {
            wear: self.wear,
            metastable: self.metastable,
            bad_bit: self.bad_bit,
            data,
        })
    }

    pub fn bad_bit_pinned(&self) -> bool {
        self.bad_bit & BAD_BIT_PINNED != 0
    }

    /// Bit index of the bad bit within the block.
    pub fn bad_bit_pos(&self) -> usize {
        (self.bad_bit & !BAD_BIT_PINNED) as usize % (self.data.len() * 8)
    }

    /// Does the byte range `[off, off+len)` contain the bad bit?
    pub fn covers_bad_bit(&self, off: usize, len: usize) -> bool {
        let byte = self.bad_bit_pos() / 8;
        byte >= off && byte < off + len
    }

    pub fn flip_bit(&mut self, bit: usize) {
        self.data[bit / 8] ^= 1 << (bit % 8);
    }
}
