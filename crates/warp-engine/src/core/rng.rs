//! Seeded xorshift64* generator.
//!
//! Every stochastic choice in the engine (star orbits, particle limits,
//! spawn positions) draws from one of these, so a fixed seed replays the
//! exact same animation.

const MULTIPLIER: u64 = 0x2545_F491_4F6C_DD1D;

#[derive(Debug, Clone)]
pub struct Rng {
    state: u64,
}

impl Rng {
    /// The seed goes through a SplitMix64 round first, so seeds 1 and 2
    /// produce unrelated streams.
    pub fn new(seed: u64) -> Self {
        let mut z = seed.wrapping_add(0x9E37_79B9_7F4A_7C15);
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        // xorshift never leaves the zero state
        Self { state: if z == 0 { MULTIPLIER } else { z } }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(MULTIPLIER)
    }

    /// Uniform float in [0, 1).
    pub fn next_f32(&mut self) -> f32 {
        // Top 24 bits fill the f32 mantissa exactly.
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    /// Uniform float in [lo, hi). Returns `lo` for an empty or inverted range.
    pub fn range(&mut self, lo: f32, hi: f32) -> f32 {
        if !(hi > lo) {
            return lo;
        }
        let v = lo + self.next_f32() * (hi - lo);
        // Rounding can land exactly on `hi` for wide ranges.
        if v >= hi { lo } else { v }
    }
}
