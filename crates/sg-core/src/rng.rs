//! Injectable randomness for destination selection.
//!
//! # Determinism strategy
//!
//! The relocation engine never touches ambient global randomness.  It asks a
//! [`CellChooser`] for an index into the current candidate list, so the rest
//! of the engine stays a deterministic function of the grid and the chooser:
//!
//! - [`SimRng`] wraps a seeded `SmallRng`; the same seed replays a run
//!   exactly.
//! - [`ScriptedChooser`] replays a fixed index sequence, for tests that need
//!   to pin every destination.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── CellChooser ───────────────────────────────────────────────────────────────

/// Uniformly select one element of a non-empty ordered candidate set.
pub trait CellChooser {
    /// Return an index in `0..len`.  Callers guarantee `len > 0`.
    fn choose_index(&mut self, len: usize) -> usize;

    /// Choose an element of `candidates`.  Returns `None` if it is empty.
    fn choose<'a, T>(&mut self, candidates: &'a [T]) -> Option<&'a T>
    where
        Self: Sized,
    {
        if candidates.is_empty() {
            return None;
        }
        candidates.get(self.choose_index(candidates.len()))
    }
}

impl<C: CellChooser + ?Sized> CellChooser for &mut C {
    #[inline]
    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Simulation-level RNG.
///
/// Used only in single-threaded contexts; the driver owns exactly one.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed from operating-system entropy (non-reproducible runs).
    pub fn from_entropy() -> Self {
        SimRng(SmallRng::from_entropy())
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}

impl CellChooser for SimRng {
    #[inline]
    fn choose_index(&mut self, len: usize) -> usize {
        self.0.gen_range(0..len)
    }
}

// ── ScriptedChooser ───────────────────────────────────────────────────────────

/// Deterministic chooser that replays `script` in a loop.
///
/// Each scripted value is reduced modulo the candidate count, so any script
/// is valid for any candidate list.  An empty script always picks index 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedChooser {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedChooser {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Always choose the first candidate.
    pub fn first() -> Self {
        Self::default()
    }

    /// How many choices have been made so far.
    pub fn calls(&self) -> usize {
        self.cursor
    }
}

impl CellChooser for ScriptedChooser {
    fn choose_index(&mut self, len: usize) -> usize {
        let pick = if self.script.is_empty() {
            0
        } else {
            self.script[self.cursor % self.script.len()]
        };
        self.cursor += 1;
        pick % len
    }
}
