//! RNG module - injected randomness for spawning rows
//!
//! The engine never owns a process-global generator. Callers hand it a [`RandomSource`] at
//! construction, and every spawned cell is drawn from that same source, so a seeded source
//! replays the exact same game.
//!
//! [`SimpleRng`] is the stock source: a small LCG that is fast and fully deterministic.

use crate::types::{Cell, Color, COLOR_COUNT, DEFAULT_SEED};

/// A source of uniformly distributed random numbers
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

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

    /// Current internal state (seed a new RNG with it to replay from here)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    fn next_range(&mut self, max: u32) -> u32 {
        // The low bits of a power-of-two LCG have short periods; scale by the high bits instead.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

/// Draw a uniformly random colored cell. Never returns the empty cell.
pub fn random_cell<R: RandomSource + ?Sized>(rng: &mut R) -> Cell {
    let idx = rng.next_range(COLOR_COUNT as u32) as usize;
    Some(Color::ALL[idx])
}
