//! RNG module - uniform random piece selection
//!
//! Each new "next piece" is drawn uniformly from the seven kinds with no bag or
//! history. A small LCG keeps the sequence deterministic for a given seed, so a
//! session can be replayed and tests can pin the piece order.

use crate::types::{PieceKind, PIECE_COUNT};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce a degenerate first value
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

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        (self.next_u32() >> 16) % max
    }

    /// Draw a piece kind uniformly over all seven
    pub fn next_piece(&mut self) -> PieceKind {
        let index = self.next_range(PIECE_COUNT as u32) as usize;
        PieceKind::ALL[index]
    }
}
