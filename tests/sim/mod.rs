// Helpers shared by the integration tests: geometry, seeded data and a toy
// filesystem to put under power loss.
#![allow(dead_code)]

use emubd::{BlockAddr, BlockDevice, EmuBd, EmuConfig, Error, Geometry};

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use std::iter::zip;
use tracing_subscriber::EnvFilter;

pub const READ_SIZE: usize = 16;
pub const PROG_SIZE: usize = 16;
pub const BLOCK_SIZE: usize = 512;
pub const BLOCK_COUNT: BlockAddr = 16;

pub fn geometry() -> Geometry {
    Geometry {
        read_size: READ_SIZE,
        prog_size: PROG_SIZE,
        block_size: BLOCK_SIZE,
        block_count: BLOCK_COUNT,
    }
}

/// Default test configuration, erased flash reads as 0xff.
pub fn config() -> EmuConfig {
    EmuConfig {
        erase_value: Some(0xff),
        ..EmuConfig::new(geometry())
    }
}

/// Route tracing output through the test harness. `RUST_LOG=emubd=trace`
/// shows every device operation.
pub fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn seq_gen(seed: u64, buf: &mut [u8]) {
    let mut small_rng = SmallRng::seed_from_u64(seed);
    small_rng.fill_bytes(buf);
}

pub fn seq_assert(seed: u64, buf: &[u8]) {
    let mut small_rng = SmallRng::seed_from_u64(seed);
    let mut expected = vec![0u8; buf.len()];
    small_rng.fill_bytes(&mut expected[..]);

    for (&element, expect) in zip(buf, expected) {
        assert_eq!(element, expect, "seq_assert: mismatch in sequences.");
    }
}

/// Number of bits that differ between two equally long buffers.
pub fn bit_diff(a: &[u8], b: &[u8]) -> u32 {
    assert_eq!(a.len(), b.len());
    zip(a, b).map(|(x, y)| (x ^ y).count_ones()).sum()
}

pub fn read_block(bd: &mut EmuBd, block: BlockAddr) -> Vec<u8> {
    let mut buf = vec![0u8; BLOCK_SIZE];
    bd.read(block, 0, &mut buf).expect("read");
    buf
}

// ///////////////////////////////////////////////////////////////////////
// Ping-pong: the smallest filesystem that survives power loss.
//
// Two blocks hold alternating copies of a 16-byte record
//     magic | revision | value | checksum
// Committing erases the older copy and writes the new one over it, so the
// newer copy is never touched while it is the only good one.
// ///////////////////////////////////////////////////////////////////////

const PP_MAGIC: u32 = 0x504f_4e47;
pub const PP_RECORD: usize = 16;

pub struct PingPong<'a> {
    bd: &'a mut EmuBd,
    rev: u32,
    value: u32,
}

fn pp_checksum(rev: u32, value: u32) -> u32 {
    PP_MAGIC ^ rev.rotate_left(7) ^ value.rotate_left(19) ^ 0x9e37_79b9
}

pub fn pp_encode(rev: u32, value: u32) -> [u8; PP_RECORD] {
    let mut rec = [0u8; PP_RECORD];
    rec[0..4].copy_from_slice(&PP_MAGIC.to_le_bytes());
    rec[4..8].copy_from_slice(&rev.to_le_bytes());
    rec[8..12].copy_from_slice(&value.to_le_bytes());
    rec[12..16].copy_from_slice(&pp_checksum(rev, value).to_le_bytes());
    rec
}

pub fn pp_decode(rec: &[u8]) -> Option<(u32, u32)> {
    let word = |i: usize| u32::from_le_bytes([rec[i], rec[i + 1], rec[i + 2], rec[i + 3]]);
    let (magic, rev, value, csum) = (word(0), word(4), word(8), word(12));
    if magic != PP_MAGIC || csum != pp_checksum(rev, value) {
        return None;
    }
    Some((rev, value))
}

impl<'a> PingPong<'a> {
    /// Find the newest intact record. An unformatted device mounts empty.
    pub fn mount(bd: &'a mut EmuBd) -> Result<Self, Error> {
        let mut best: Option<(u32, u32)> = None;
        for block in 0..2 {
            let mut rec = [0u8; PP_RECORD];
            bd.read(block, 0, &mut rec)?;
            if let Some((rev, value)) = pp_decode(&rec) {
                if best.map_or(true, |(r, _)| rev > r) {
                    best = Some((rev, value));
                }
            }
        }
        let (rev, value) = best.unwrap_or((0, 0));
        Ok(PingPong { bd, rev, value })
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn commit(&mut self, value: u32) -> Result<(), Error> {
        let rev = self.rev + 1;
        let block = (rev % 2) as BlockAddr;
        self.bd.erase(block)?;
        self.bd.prog(block, 0, &pp_encode(rev, value))?;
        self.bd.sync()?;
        self.rev = rev;
        self.value = value;
        Ok(())
    }
}

/// Test body: count up to `target` one commit at a time, resuming from
/// whatever survived, then check the result from a fresh mount.
pub fn count_to(bd: &mut EmuBd, target: u32) -> Result<(), Error> {
    let mut fs = PingPong::mount(bd)?;
    assert!(fs.value() <= target, "counted past {target}: {}", fs.value());
    while fs.value() < target {
        let next = fs.value() + 1;
        fs.commit(next)?;
    }

    let fs = PingPong::mount(bd)?;
    assert_eq!(fs.value(), target);
    Ok(())
}
