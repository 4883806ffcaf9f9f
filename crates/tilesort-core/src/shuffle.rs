#![forbid(unsafe_code)]

//! Deterministic shuffling.
//!
//! A small xorshift64 generator is enough for scrambling a row of tiles and
//! keeps runs reproducible from a seed.

use crate::sequence::Sequence;

const DEFAULT_SEED: u64 = 0x9E37_79B9_7F4A_7C15;

/// Xorshift64 PRNG.
#[derive(Debug, Clone)]
pub struct Xorshift64 {
    state: u64,
}

impl Xorshift64 {
    /// Seeded generator. A zero seed (the one fixed point of xorshift) is
    /// replaced by a fixed non-zero constant.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { DEFAULT_SEED } else { seed },
        }
    }

    /// Next raw value; never zero.
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    /// Uniform value in `0..bound` (rejection sampling, no modulo bias).
    ///
    /// # Panics
    ///
    /// Panics if `bound` is zero.
    pub fn below(&mut self, bound: u64) -> u64 {
        assert!(bound > 0, "below() requires a non-zero bound");
        let zone = u64::MAX - (u64::MAX % bound);
        loop {
            let v = self.next_u64();
            if v < zone {
                return v % bound;
            }
        }
    }

    /// Fisher-Yates shuffle of the whole sequence, using swaps only.
    pub fn shuffle(&mut self, seq: &mut Sequence) {
        for i in (1..seq.len()).rev() {
            let j = self.below(i as u64 + 1) as usize;
            seq.swap(i, j);
        }
    }
}

impl Default for Xorshift64 {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
