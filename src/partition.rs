//! Seeded labeled/unlabeled partitioning of the training partition.
//!
//! Every call builds its own generator from the seed, so a split only depends
//! on the input sequence and the ratio, never on which splits ran before it.

use std::fmt;

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::constants::files::SMALL_PREFIX;
use crate::errors::SplitError;

/// Labeled-fraction denominator: ratio `r` keeps `floor(N / r)` items labeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ratio(u32);

impl Ratio {
    pub fn new(denominator: u32) -> Result<Self, SplitError> {
        if denominator == 0 {
            return Err(SplitError::InvalidRatio(denominator));
        }
        Ok(Self(denominator))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Number of labeled items out of `total`.
    pub fn labeled_count(self, total: usize) -> usize {
        total / self.0 as usize
    }

    /// Manifest directory, e.g. `1_32`.
    pub fn dir_name(self) -> String {
        format!("1_{}", self.0)
    }

    /// Manifest directory of the reduced variant, e.g. `small_1_32`.
    pub fn small_dir_name(self) -> String {
        format!("{SMALL_PREFIX}{}", self.dir_name())
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "1/{}", self.0)
    }
}

/// Disjoint labeled/unlabeled halves, both in shuffled order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitSet<T = String> {
    pub labeled: Vec<T>,
    pub unlabeled: Vec<T>,
}

impl<T: Clone> SplitSet<T> {
    pub fn len(&self) -> usize {
        self.labeled.len() + self.unlabeled.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Truncate each half to `max(1, count / divisor)` entries, keeping order.
    pub fn small(&self, divisor: usize) -> SplitSet<T> {
        SplitSet {
            labeled: subsample(&self.labeled, divisor).to_vec(),
            unlabeled: subsample(&self.unlabeled, divisor).to_vec(),
        }
    }
}

/// Shuffle a copy of `items` with a generator seeded from `seed` and split it
/// so the first `floor(N / ratio)` shuffled items are labeled.
pub fn partition<T: Clone>(items: &[T], ratio: Ratio, seed: u64) -> SplitSet<T> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut shuffled = items.to_vec();
    shuffled.shuffle(&mut rng);

    let unlabeled = shuffled.split_off(ratio.labeled_count(shuffled.len()));
    SplitSet {
        labeled: shuffled,
        unlabeled,
    }
}

/// Leading `max(1, len / divisor)` items of `items`, capped at `len`.
pub fn subsample<T>(items: &[T], divisor: usize) -> &[T] {
    let keep = (items.len() / divisor.max(1)).max(1).min(items.len());
    &items[..keep]
}
