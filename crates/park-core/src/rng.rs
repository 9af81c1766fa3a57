//! Injectable randomness.
//!
//! Every stochastic decision in the simulator (spawn draws, destination
//! choice, dwell seeding, departure checks) goes through [`RandomSource`].
//! Production runs use [`SimRng`], a seeded `SmallRng`; tests and replays use
//! [`SequenceRng`], which plays back a fixed list of unit draws so exact
//! outcomes can be asserted.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

// ── RandomSource ──────────────────────────────────────────────────────────────

/// The draws the simulator needs.
///
/// Callers uphold the preconditions documented on each method; violating
/// them may panic.
pub trait RandomSource {
    /// A uniform draw in `[0, 1)`.
    fn unit(&mut self) -> f64;

    /// A uniform integer in `[lo, hi]`.  Requires `lo <= hi`.
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32;

    /// A uniform index in `[0, len)`.  Requires `len > 0`.
    fn index(&mut self, len: usize) -> usize;

    /// `true` with probability `p`.  `p <= 0` never fires; `p >= 1` always
    /// fires.  Consumes exactly one unit draw.
    #[inline]
    fn bernoulli(&mut self, p: f64) -> bool {
        self.unit() < p
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Seeded simulation RNG.
///
/// Used only in the single-threaded tick loop.  Derive independent streams
/// with [`child`](Self::child) rather than sharing one instance.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Derive a child `SimRng` with a different seed offset.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng(SmallRng::seed_from_u64(child_seed))
    }
}

impl RandomSource for SimRng {
    #[inline]
    fn unit(&mut self) -> f64 {
        self.0.r#gen::<f64>()
    }

    #[inline]
    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        self.0.gen_range(lo..=hi)
    }

    #[inline]
    fn index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

// ── SequenceRng ───────────────────────────────────────────────────────────────

/// Deterministic [`RandomSource`] that cycles through a fixed list of unit
/// draws.
///
/// Integer draws are derived from the next unit value `u` by scaling:
/// `range_inclusive(lo, hi) = lo + floor(u * (hi - lo + 1))` and
/// `index(len) = floor(u * len)`.  So `SequenceRng::constant(0.0)` always
/// picks the lowest value and `constant(0.99)` the highest.
#[derive(Clone, Debug)]
pub struct SequenceRng {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRng {
    /// Play back `values` in order, wrapping around at the end.  Each value
    /// is clamped into `[0, 1)`.  An empty list behaves like `constant(0.0)`.
    pub fn new<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut values: Vec<f64> = values
            .into_iter()
            .map(|v| if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0 - f64::EPSILON) })
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }

    /// Every draw returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new([value])
    }

    /// Number of unit draws consumed so far.
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRng {
    fn unit(&mut self) -> f64 {
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v
    }

    fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        let span = (hi - lo) as u64 + 1;
        let offset = ((self.unit() * span as f64) as u64).min(span - 1);
        lo + offset as u32
    }

    fn index(&mut self, len: usize) -> usize {
        ((self.unit() * len as f64) as usize).min(len - 1)
    }
}
