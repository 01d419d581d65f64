// Tiny reproducible generator behind every randomized fault decision.

/// 32-bit xorshift (13/17/5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Prng {
    state: u32,
}

impl Prng {
    pub fn new(seed: u32) -> Self {
        Prng { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    /// Step the generator. A zero state is a fixed point of xorshift, so
    /// it is remapped to all ones first. This also keeps seed 0 distinct
    /// from seed 1.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        if x == 0 {
            x = 0xffff_ffff;
        }
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform-ish value in `0..n`. `n` must be non-zero.
    pub fn below(&mut self, n: usize) -> usize {
        assert!(n > 0, "prng: below called with an empty range");
        self.next_u32() as usize % n
    }

    /// Fill `buf` with little-endian words from the generator.
    pub fn fill(&mut self, buf: &mut [u8]) {
        for chunk in buf.chunks_mut(4) {
            let word = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }
}
