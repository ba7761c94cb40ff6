//! RNG module - uniform random piece drawing
//!
//! Pieces are drawn uniformly from the catalog with replacement: repeats are
//! allowed and there is no bag. The generator is a small seeded LCG so a game
//! can be replayed exactly from its seed.

use crate::pieces::CATALOG;
use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate a uniformly distributed value in [0, max)
    ///
    /// Multiply-shift keeps the LCG's stronger high bits; the rejection loop
    /// removes the remaining bias. Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        let mut m = self.next_u32() as u64 * max as u64;
        let mut low = m as u32;
        if low < max {
            let threshold = max.wrapping_neg() % max;
            while low < threshold {
                m = self.next_u32() as u64 * max as u64;
                low = m as u32;
            }
        }
        (m >> 32) as u32
    }
}

/// Uniform draws from the fixed catalog
#[derive(Debug, Clone)]
pub struct PieceDrawer {
    rng: SimpleRng,
}

impl PieceDrawer {
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }

    /// Draw one piece, every catalog entry equally likely
    pub fn draw(&mut self) -> PieceKind {
        let idx = self.rng.next_range(CATALOG.len() as u32) as usize;
        CATALOG[idx]
    }
}

impl Default for PieceDrawer {
    fn default() -> Self {
        Self::new(1)
    }
}
