//! Fault-injecting emulated block device.
//!
//! Blocks are allocated lazily and shared copy-on-write between a device
//! and its copies, so forking the whole device at a crash point costs one
//! reference per allocated block. On top of the store sit two fault
//! models: worn out ("bad") blocks, and power loss in the middle of a
//! prog or erase.

use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use tracing::{debug, trace};

use crate::bd::{BlockAddr, BlockDevice};
use crate::block::{Block, BAD_BIT_PINNED};
use crate::disk::DiskMirror;
use crate::prng::Prng;
use crate::{Error, Result};

/// Device geometry, fixed at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Geometry {
    pub read_size: usize,
    pub prog_size: usize,
    pub block_size: usize,
    pub block_count: BlockAddr,
}

/// How a block misbehaves once its wear exceeds `erase_cycles`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadBlockBehavior {
    /// Prog returns `Err(Corrupt)`.
    #[default]
    ProgError,
    /// Erase returns `Err(Corrupt)`.
    EraseError,
    /// Read returns `Err(Corrupt)`.
    ReadError,
    /// Prog silently does nothing.
    ProgNoop,
    /// Erase silently does nothing.
    EraseNoop,
    /// Prog lands, but the bad bit comes out flipped.
    ProgFlip,
    /// Prog lands, but reads of the bad bit flip half the time.
    ReadFlip,
}

/// What an interrupted prog or erase leaves behind.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerLossBehavior {
    /// Operations are atomic; the interrupted one never happened.
    #[default]
    Noop,
    /// A single bit of the operation made it.
    SomeBits,
    /// All but one bit of the operation made it.
    MostBits,
    /// The block being written is kept, every other block rolls back to
    /// the last sync.
    OutOfOrder,
    /// The operation made it, but one of its bits is metastable and reads
    /// back flipped half the time.
    Metastable,
}

/// Construction-time configuration.
///
/// Only the geometry is required, [`EmuConfig::new`] fills in the rest
/// with every fault model disabled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmuConfig {
    pub geometry: Geometry,
    /// What erased (and never written) blocks read as. `None` disables
    /// erase simulation: erase leaves bytes alone, unallocated blocks read
    /// as zero and prog does not check for a prior erase.
    pub erase_value: Option<u8>,
    /// Erase cycles a block survives before going bad. 0 disables the
    /// bad-block model.
    pub erase_cycles: u32,
    pub badblock_behavior: BadBlockBehavior,
    /// Progs and erases until power is lost. 0 disables power loss.
    pub power_cycles: u32,
    pub powerloss_behavior: PowerLossBehavior,
    pub seed: u32,
    /// Mirror the device to this file.
    pub disk_path: Option<PathBuf>,
    pub read_sleep: Option<Duration>,
    pub prog_sleep: Option<Duration>,
    pub erase_sleep: Option<Duration>,
}

impl EmuConfig {
    pub fn new(geometry: Geometry) -> Self {
        EmuConfig {
            geometry,
            erase_value: None,
            erase_cycles: 0,
            badblock_behavior: BadBlockBehavior::default(),
            power_cycles: 0,
            powerloss_behavior: PowerLossBehavior::default(),
            seed: 0,
            disk_path: None,
            read_sleep: None,
            prog_sleep: None,
            erase_sleep: None,
        }
    }

    // Has this block worn out?
    fn is_bad(&self, b: &Block) -> bool {
        self.erase_cycles > 0 && b.wear > self.erase_cycles
    }

    fn fill(&self) -> u8 {
        self.erase_value.unwrap_or(0)
    }
}

/// Returned by the power-loss callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resume {
    /// Finish the interrupted operation as if power had never been lost.
    Continue,
    /// Leave the device in its crashed state; the operation returns
    /// `Err(PowerLoss)`.
    Abort,
}

/// Called when the power-cycle countdown reaches zero, after the partial
/// effect of the interrupted operation is in place.
pub type PowerLossCb = Rc<dyn Fn(&mut EmuBd) -> Result<Resume>>;

type Slot = Option<Rc<Block>>;

// The operation power was lost during.
#[derive(Clone, Copy)]
enum InFlight<'a> {
    Prog { off: usize, data: &'a [u8] },
    Erase,
}

pub struct EmuBd {
    cfg: Rc<EmuConfig>,
    blocks: Vec<Slot>,
    // Blocks as of the last sync, only tracked for out-of-order power loss.
    ooo_before: Option<Vec<Slot>>,
    readed: u64,
    proged: u64,
    erased: u64,
    prng: Prng,
    power_cycles: u32,
    powerloss_cb: Option<PowerLossCb>,
    disk: Option<Rc<DiskMirror>>,
}

// ///////////////////////////////////////////////////////////////////////
// Public interface
// ///////////////////////////////////////////////////////////////////////
//
impl EmuBd {
    /// Create a device. No blocks are allocated until they are first
    /// written.
    pub fn new(cfg: EmuConfig) -> Result<Self> {
        let g = cfg.geometry;
        assert!(
            g.read_size > 0 && g.prog_size > 0,
            "emubd: read_size and prog_size must be non-zero"
        );
        assert!(
            g.block_size > 0 && g.block_size % g.read_size == 0 && g.block_size % g.prog_size == 0,
            "emubd: block_size {} must be a multiple of read_size {} and prog_size {}",
            g.block_size,
            g.read_size,
            g.prog_size
        );
        assert!(g.block_count > 0, "emubd: block_count must be non-zero");

        let blocks = empty_slots(g.block_count)?;
        let ooo_before = match cfg.powerloss_behavior {
            PowerLossBehavior::OutOfOrder => Some(empty_slots(g.block_count)?),
            _ => None,
        };
        let disk = match &cfg.disk_path {
            Some(path) => Some(Rc::new(DiskMirror::create(
                path,
                g.block_size,
                g.block_count,
                cfg.fill(),
            )?)),
            None => None,
        };

        debug!(
            "Created emulated device: {} blocks of {} bytes, erase_cycles {}, power_cycles {}, {:?}",
            g.block_count, g.block_size, cfg.erase_cycles, cfg.power_cycles, cfg.powerloss_behavior
        );

        Ok(EmuBd {
            prng: Prng::new(cfg.seed),
            power_cycles: cfg.power_cycles,
            cfg: Rc::new(cfg),
            blocks,
            ooo_before,
            readed: 0,
            proged: 0,
            erased: 0,
            powerloss_cb: None,
            disk,
        })
    }

    pub fn config(&self) -> &EmuConfig {
        &self.cfg
    }

    /// Install the power-loss callback. Without one, power loss aborts the
    /// interrupted operation with `Err(PowerLoss)`.
    pub fn set_powerloss_cb<F>(&mut self, cb: F)
    where
        F: Fn(&mut EmuBd) -> Result<Resume> + 'static,
    {
        self.powerloss_cb = Some(Rc::new(cb));
    }

    pub fn clear_powerloss_cb(&mut self) {
        self.powerloss_cb = None;
    }

    /// Fork the device. The copy shares every block with `self` until one
    /// side writes to it, and shares the disk mirror. The power-loss
    /// callback is not copied.
    pub fn copy(&self) -> Result<EmuBd> {
        let blocks = clone_slots(&self.blocks)?;
        let ooo_before = match &self.ooo_before {
            Some(before) => Some(clone_slots(before)?),
            None => None,
        };
        trace!("copy");
        Ok(EmuBd {
            cfg: Rc::clone(&self.cfg),
            blocks,
            ooo_before,
            readed: self.readed,
            proged: self.proged,
            erased: self.erased,
            prng: self.prng,
            power_cycles: self.power_cycles,
            powerloss_cb: None,
            disk: self.disk.clone(),
        })
    }

    // Cumulative byte counters.
    pub fn readed(&self) -> u64 {self.readed}
    pub fn proged(&self) -> u64 {self.proged}
    pub fn erased(&self) -> u64 {self.erased}
    pub fn set_readed(&mut self, v: u64) {self.readed = v;}
    pub fn set_proged(&mut self, v: u64) {self.proged = v;}
    pub fn set_erased(&mut self, v: u64) {self.erased = v;}

    /// Progs and erases left before power is lost, 0 if disabled.
    pub fn power_cycles(&self) -> u32 {
        self.power_cycles
    }

    pub fn set_power_cycles(&mut self, power_cycles: u32) {
        self.power_cycles = power_cycles;
    }

    /// Erase cycles consumed by `block`.
    pub fn wear(&self, block: BlockAddr) -> u32 {
        self.check_block("wear", block);
        self.slot(block).map_or(0, |b| b.wear)
    }

    pub fn set_wear(&mut self, block: BlockAddr, wear: u32) -> Result<()> {
        self.check_block("set_wear", block);
        self.block_mut(block)?.wear = wear;
        Ok(())
    }

    pub fn is_bad(&self, block: BlockAddr) -> bool {
        self.check_block("is_bad", block);
        self.slot(block).map_or(false, |b| self.cfg.is_bad(b))
    }

    /// Wear `block` out. Has no effect on behavior while the bad-block
    /// model is disabled.
    pub fn mark_bad(&mut self, block: BlockAddr) -> Result<()> {
        let wear = self.cfg.erase_cycles.saturating_add(1);
        self.set_wear(block, wear)
    }

    pub fn mark_good(&mut self, block: BlockAddr) -> Result<()> {
        self.set_wear(block, 0)
    }

    /// Bit index of the bad bit in `block`, `None` if the block was never
    /// written.
    pub fn bad_bit(&self, block: BlockAddr) -> Option<usize> {
        self.check_block("bad_bit", block);
        self.slot(block).map(|b| b.bad_bit_pos())
    }

    /// Pin the bad bit of `block`. Pinned bits survive erases.
    pub fn set_bad_bit(&mut self, block: BlockAddr, bit: usize) -> Result<()> {
        self.check_block("set_bad_bit", block);
        assert!(
            bit < self.cfg.geometry.block_size * 8,
            "emubd: bad bit {bit} outside of block"
        );
        self.block_mut(block)?.bad_bit = BAD_BIT_PINNED | bit as u32;
        Ok(())
    }

    /// Unpin the bad bit of `block` and draw a new one.
    pub fn randomize_bad_bit(&mut self, block: BlockAddr) -> Result<()> {
        self.check_block("randomize_bad_bit", block);
        let bit = self.prng.below(self.cfg.geometry.block_size * 8) as u32;
        self.block_mut(block)?.bad_bit = bit;
        Ok(())
    }

    /// Is a bit of `block` currently metastable?
    pub fn is_metastable(&self, block: BlockAddr) -> bool {
        self.check_block("is_metastable", block);
        self.slot(block).map_or(false, |b| b.metastable)
    }

    /// Invert one stored bit.
    pub fn flip_bit(&mut self, block: BlockAddr, bit: usize) -> Result<()> {
        self.check_block("flip_bit", block);
        let block_size = self.cfg.geometry.block_size;
        assert!(bit < block_size * 8, "emubd: flip_bit of bit {bit} outside of block");
        self.block_mut(block)?.flip_bit(bit);
        self.mirror(block, bit / 8, 1)
    }

    /// Draw bytes from the device's generator.
    pub fn prng(&mut self, buf: &mut [u8]) {
        self.prng.fill(buf);
    }

    /// Number of live references to the block stored at `block`, 0 when
    /// nothing was ever written there.
    pub fn block_refs(&self, block: BlockAddr) -> usize {
        self.check_block("block_refs", block);
        self.blocks[block as usize].as_ref().map_or(0, Rc::strong_count)
    }

    /// CRC32C of the contents of `block`.
    pub fn crc(&self, block: BlockAddr) -> u32 {
        self.check_block("crc", block);
        match self.slot(block) {
            Some(b) => crc32c::crc32c(&b.data),
            None => crc32c::crc32c(&vec![self.cfg.fill(); self.cfg.geometry.block_size]),
        }
    }

    /// CRC32C over every block's CRC, a cheap fingerprint of the whole
    /// device.
    pub fn bd_crc(&self) -> u32 {
        let mut crc = 0;
        for block in 0..self.cfg.geometry.block_count {
            crc = crc32c::crc32c_append(crc, &self.crc(block).to_le_bytes());
        }
        crc
    }
}

// ///////////////////////////////////////////////////////////////////////
// Private methods
// ///////////////////////////////////////////////////////////////////////
//
impl EmuBd {
    fn check_block(&self, op: &str, block: BlockAddr) {
        assert!(
            block < self.cfg.geometry.block_count,
            "emubd: {op} called on invalid block {block}"
        );
    }

    fn check_range(&self, op: &str, block: BlockAddr, off: usize, len: usize, align: usize) {
        self.check_block(op, block);
        assert!(
            off % align == 0 && len % align == 0,
            "emubd: {op} misaligned: off = {off}, len = {len}, granularity = {align}"
        );
        let block_size = self.cfg.geometry.block_size;
        assert!(
            off <= block_size && len <= block_size - off,
            "emubd: {op} called on invalid range: off = {off}, len = {len}"
        );
    }

    fn slot(&self, block: BlockAddr) -> Option<&Block> {
        self.blocks[block as usize].as_deref()
    }

    // Get a block we are allowed to mutate, allocating it if it doesn't
    // exist yet and cloning it if it is shared.
    fn block_mut(&mut self, block: BlockAddr) -> Result<&mut Block> {
        let idx = block as usize;
        let fresh = match &self.blocks[idx] {
            Some(b) if Rc::strong_count(b) == 1 => None,
            Some(b) => Some(b.try_clone()?),
            None => {
                let block_size = self.cfg.geometry.block_size;
                let bad_bit = self.prng.below(block_size * 8) as u32;
                Some(Block::try_new(block_size, self.cfg.fill(), bad_bit)?)
            }
        };
        if let Some(b) = fresh {
            self.blocks[idx] = Some(Rc::new(b));
        }
        match self.blocks[idx].as_mut() {
            // Unique at this point, so this never clones.
            Some(rc) => Ok(Rc::make_mut(rc)),
            None => unreachable!("emubd: block {block} vanished after allocation"),
        }
    }

    // Copy a region of a block out to the disk mirror, if there is one.
    fn mirror(&self, block: BlockAddr, off: usize, len: usize) -> Result<()> {
        let disk = match &self.disk {
            Some(disk) => disk,
            None => return Ok(()),
        };
        match self.slot(block) {
            Some(b) => disk.write(block, off, &b.data[off..off + len]),
            None => disk.write(block, off, &vec![self.cfg.fill(); len]),
        }
    }

    fn mirror_all(&self) -> Result<()> {
        if self.disk.is_some() {
            for block in 0..self.cfg.geometry.block_count {
                self.mirror(block, 0, self.cfg.geometry.block_size)?;
            }
        }
        Ok(())
    }

    // Count down one prog/erase. True when power runs out on this one.
    fn tick_power_cycles(&mut self) -> bool {
        if self.power_cycles > 0 {
            self.power_cycles -= 1;
            return self.power_cycles == 0;
        }
        false
    }

    fn power_loss(&mut self, block: BlockAddr, op: InFlight<'_>) -> Result<()> {
        let behavior = self.cfg.powerloss_behavior;
        debug!("Power loss during {} of block {block} ({behavior:?})", op.name());

        // Remember where we were so a resumed operation carries on as if
        // nothing happened. Without a callback nothing ever resumes.
        let resume_from = match self.powerloss_cb {
            Some(_) => Some((clone_slots(&self.blocks)?, self.prng)),
            None => None,
        };

        self.partial(block, op)?;

        if let Some(before) = &self.ooo_before {
            for (i, slot) in self.blocks.iter_mut().enumerate() {
                if i != block as usize {
                    *slot = before[i].clone();
                }
            }
            self.mirror_all()?;
        } else {
            self.mirror(block, 0, self.cfg.geometry.block_size)?;
        }

        let resume = match self.powerloss_cb.clone() {
            Some(cb) => cb(self)?,
            None => Resume::Abort,
        };

        match resume {
            Resume::Abort => Err(Error::PowerLoss),
            Resume::Continue => {
                // Slots and generator both, so partial writes and the
                // draws that placed them leave no trace.
                if let Some((blocks, prng)) = resume_from {
                    self.blocks = blocks;
                    self.prng = prng;
                    self.mirror_all()?;
                }
                Ok(())
            }
        }
    }

    // Leave the interrupted operation's partial effect on the block.
    fn partial(&mut self, block: BlockAddr, op: InFlight<'_>) -> Result<()> {
        let fill = self.cfg.erase_value;
        let (off, len) = match op {
            InFlight::Prog { off, data } => (off, data.len()),
            InFlight::Erase => (0, self.cfg.geometry.block_size),
        };
        if len == 0 {
            return Ok(());
        }
        // What byte i of the region will hold once the operation is done.
        let want = move |i: usize, cur: u8| match op {
            InFlight::Prog { data, .. } => data[i],
            InFlight::Erase => fill.unwrap_or(cur),
        };

        match self.cfg.powerloss_behavior {
            PowerLossBehavior::Noop => {}
            PowerLossBehavior::SomeBits => {
                let b = self.block_mut(block)?;
                let count = changed_bits(&b.data[off..off + len], &want).count();
                if count > 0 {
                    let n = self.prng.below(count);
                    let b = self.block_mut(block)?;
                    let bit = changed_bits(&b.data[off..off + len], &want).nth(n);
                    if let Some(bit) = bit {
                        b.flip_bit(off * 8 + bit);
                    }
                }
            }
            PowerLossBehavior::MostBits => {
                let bit = self.prng.below(len * 8);
                let b = self.block_mut(block)?;
                land(b, off, len, &want);
                b.flip_bit(off * 8 + bit);
            }
            PowerLossBehavior::OutOfOrder => {
                let b = self.block_mut(block)?;
                land(b, off, len, &want);
            }
            PowerLossBehavior::Metastable => {
                let bit = self.prng.below(len * 8);
                let b = self.block_mut(block)?;
                land(b, off, len, &want);
                if !b.bad_bit_pinned() {
                    b.bad_bit = (off * 8 + bit) as u32;
                }
                b.metastable = true;
            }
        }
        Ok(())
    }
}

impl BlockDevice for EmuBd {
    fn read_size(&self) -> usize {self.cfg.geometry.read_size}
    fn prog_size(&self) -> usize {self.cfg.geometry.prog_size}
    fn block_size(&self) -> usize {self.cfg.geometry.block_size}
    fn block_count(&self) -> BlockAddr {self.cfg.geometry.block_count}

    fn read(&mut self, block: BlockAddr, off: usize, buf: &mut [u8]) -> Result<()> {
        let len = buf.len();
        self.check_range("read", block, off, len, self.cfg.geometry.read_size);
        trace!(block, off, len, "read");

        match self.blocks[block as usize].as_deref() {
            None => buf.fill(self.cfg.fill()),
            Some(b) => {
                if self.cfg.is_bad(b) && self.cfg.badblock_behavior == BadBlockBehavior::ReadError {
                    return Err(Error::Corrupt { block });
                }
                buf.copy_from_slice(&b.data[off..off + len]);

                // Metastable bits read back as a coin toss.
                if b.metastable && b.covers_bad_bit(off, len) && self.prng.next_u32() & 1 == 1 {
                    let bit = b.bad_bit_pos() - off * 8;
                    buf[bit / 8] ^= 1 << (bit % 8);
                }
            }
        }

        self.readed += len as u64;
        pace(self.cfg.read_sleep);
        Ok(())
    }

    fn prog(&mut self, block: BlockAddr, off: usize, data: &[u8]) -> Result<()> {
        let len = data.len();
        self.check_range("prog", block, off, len, self.cfg.geometry.prog_size);
        trace!(block, off, len, "prog");

        let bad = self.is_bad(block);
        if bad {
            match self.cfg.badblock_behavior {
                BadBlockBehavior::ProgError => return Err(Error::Corrupt { block }),
                BadBlockBehavior::ProgNoop => return Ok(()),
                _ => {}
            }
        }

        // Flash can only be programmed after an erase. Bad blocks are
        // allowed to hold garbage.
        if let (Some(erase_value), false) = (self.cfg.erase_value, bad) {
            if let Some(b) = self.slot(block) {
                assert!(
                    b.data[off..off + len].iter().all(|&x| x == erase_value),
                    "emubd: prog of block {block} at off {off} without a prior erase"
                );
            }
        }

        if self.tick_power_cycles() {
            self.power_loss(block, InFlight::Prog { off, data })?;
        }

        let behavior = self.cfg.badblock_behavior;
        let b = self.block_mut(block)?;
        b.data[off..off + len].copy_from_slice(data);
        b.metastable = false;
        if bad {
            match behavior {
                BadBlockBehavior::ProgFlip if b.covers_bad_bit(off, len) => {
                    let bit = b.bad_bit_pos();
                    b.flip_bit(bit);
                }
                BadBlockBehavior::ReadFlip => b.metastable = true,
                _ => {}
            }
        }
        self.mirror(block, off, len)?;

        self.proged += len as u64;
        pace(self.cfg.prog_sleep);
        Ok(())
    }

    fn erase(&mut self, block: BlockAddr) -> Result<()> {
        self.check_block("erase", block);
        trace!(block, "erase");

        if self.is_bad(block) {
            match self.cfg.badblock_behavior {
                BadBlockBehavior::EraseError => return Err(Error::Corrupt { block }),
                BadBlockBehavior::EraseNoop => return Ok(()),
                _ => {}
            }
        }

        if self.tick_power_cycles() {
            self.power_loss(block, InFlight::Erase)?;
        }

        let block_size = self.cfg.geometry.block_size;
        let erase_value = self.cfg.erase_value;
        let pinned = self.slot(block).map_or(false, |b| b.bad_bit_pinned());
        let bad_bit = if pinned {
            None
        } else {
            Some(self.prng.below(block_size * 8) as u32)
        };

        let b = self.block_mut(block)?;
        b.wear = b.wear.saturating_add(1);
        if let Some(bit) = bad_bit {
            b.bad_bit = bit;
        }
        if let Some(erase_value) = erase_value {
            b.data.fill(erase_value);
        }
        b.metastable = false;
        self.mirror(block, 0, block_size)?;

        self.erased += block_size as u64;
        pace(self.cfg.erase_sleep);
        Ok(())
    }

    fn sync(&mut self) -> Result<()> {
        trace!("sync");
        if self.ooo_before.is_some() {
            self.ooo_before = Some(clone_slots(&self.blocks)?);
        }
        Ok(())
    }
}

impl fmt::Debug for EmuBd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmuBd")
            .field("geometry", &self.cfg.geometry)
            .field("allocated", &self.blocks.iter().filter(|b| b.is_some()).count())
            .field("readed", &self.readed)
            .field("proged", &self.proged)
            .field("erased", &self.erased)
            .field("power_cycles", &self.power_cycles)
            .field("prng", &self.prng)
            .finish_non_exhaustive()
    }
}

impl InFlight<'_> {
    fn name(&self) -> &'static str {
        match self {
            InFlight::Prog { .. } => "prog",
            InFlight::Erase => "erase",
        }
    }
}

fn empty_slots(count: BlockAddr) -> Result<Vec<Slot>> {
    let mut slots = Vec::new();
    slots
        .try_reserve_exact(count as usize)
        .map_err(|_| Error::NoMemory)?;
    slots.resize(count as usize, None);
    Ok(slots)
}

fn clone_slots(slots: &[Slot]) -> Result<Vec<Slot>> {
    let mut copy = Vec::new();
    copy.try_reserve_exact(slots.len())
        .map_err(|_| Error::NoMemory)?;
    copy.extend_from_slice(slots);
    Ok(copy)
}

// Bit indices (relative to the start of `cur`) that differ from what the
// operation will write.
fn changed_bits<'a>(
    cur: &'a [u8],
    want: impl Fn(usize, u8) -> u8 + 'a,
) -> impl Iterator<Item = usize> + 'a {
    cur.iter().enumerate().flat_map(move |(i, &c)| {
        let diff = c ^ want(i, c);
        (0..8).filter(move |j| diff & (1 << j) != 0).map(move |j| i * 8 + j)
    })
}

// Apply the whole operation to the region.
fn land(b: &mut Block, off: usize, len: usize, want: impl Fn(usize, u8) -> u8) {
    for (i, byte) in b.data[off..off + len].iter_mut().enumerate() {
        *byte = want(i, *byte);
    }
}

fn pace(delay: Option<Duration>) {
    if let Some(delay) = delay {
        std::thread::sleep(delay);
    }
}
