//! Test RNG: deterministic `DeterministicRng` implementations for tests.

use moviequiz_core::rng::DeterministicRng;

/// A no-op RNG that always returns `min` for `next_u32_range` and `0` for
/// `next_index`. Suitable for tests that do not depend on specific draws.
#[derive(Debug)]
pub struct MockRng;

impl DeterministicRng for MockRng {
    fn next_u32_range(&mut self, min: u32, _max: u32) -> u32 {
        min
    }

    fn next_index(&mut self, _len: usize) -> usize {
        0
    }
}

/// An RNG that returns values from a predetermined sequence, shared by both
/// draw methods in call order. Panics if the sequence is exhausted.
///
/// The question service draws an item index and then a threshold, so
/// `SequenceRng::new(vec![0, 7])` picks the first item and asks about 7.
#[derive(Debug)]
pub struct SequenceRng {
    values: Vec<u32>,
    index: usize,
}

impl SequenceRng {
    /// Create a new `SequenceRng` with the given values.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    fn next_value(&mut self) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}

impl DeterministicRng for SequenceRng {
    fn next_u32_range(&mut self, _min: u32, _max: u32) -> u32 {
        self.next_value()
    }

    fn next_index(&mut self, _len: usize) -> usize {
        self.next_value() as usize
    }
}
