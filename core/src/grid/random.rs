use std::time::{SystemTime, UNIX_EPOCH};

use rand::{rngs::ThreadRng, Rng};

/// Seed used for the live preview while a student is still sorting, so the
/// picture doesn't jump around on every change.
pub const PREVIEW_SEED: u64 = 42;

const LCG_MULTIPLIER: u64 = 1_103_515_245;
const LCG_INCREMENT: u64 = 12_345;
const LCG_MODULUS: u64 = 1 << 31;

/// A source of uniformly distributed values in `[0, 1)`.
pub trait UnitRandom {
  fn next_unit(&mut self) -> f64;

  /// Uniform index into a collection of `len` elements. `len` must be > 0.
  fn next_index(&mut self, len: usize) -> usize {
    assert!(len > 0, "cannot pick an index from an empty collection");
    let index = (self.next_unit() * len as f64).floor() as usize;
    index.min(len - 1)
  }
}

/// Linear congruential generator: `state = (state * 1103515245 + 12345) mod 2^31`.
///
/// The same seed yields the same sequence on every platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lcg {
  state: u64,
}

impl Lcg {
  pub fn new(seed: u64) -> Lcg {
    // the recurrence only depends on the seed modulo 2^31
    Lcg {
      state: seed % LCG_MODULUS,
    }
  }

  pub fn next_state(&mut self) -> u64 {
    self.state = (self.state * LCG_MULTIPLIER + LCG_INCREMENT) % LCG_MODULUS;
    self.state
  }
}

impl UnitRandom for Lcg {
  fn next_unit(&mut self) -> f64 {
    self.next_state() as f64 / LCG_MODULUS as f64
  }
}

/// Non-deterministic source for unseeded layouts.
pub struct EntropySource(ThreadRng);

impl EntropySource {
  pub fn new() -> EntropySource {
    EntropySource(rand::thread_rng())
  }
}

impl Default for EntropySource {
  fn default() -> Self {
    Self::new()
  }
}

impl UnitRandom for EntropySource {
  fn next_unit(&mut self) -> f64 {
    self.0.gen::<f64>()
  }
}

/// A fresh seed for the "reshuffle" action: the current time in milliseconds.
pub fn reshuffle_seed() -> u64 {
  SystemTime::now()
    .duration_since(UNIX_EPOCH)
    .map(|d| d.as_millis() as u64)
    .unwrap_or_else(|_| rand::random())
}
