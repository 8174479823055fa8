//! # Permutation Tables
//!
//! The shuffled index table that hashes grid-cell coordinates to gradient
//! selectors. A table of size `n` stores `2n` entries: the first `n` are a
//! random permutation of `0..n`, the second `n` duplicate them so that the
//! sampler's double-indirection lookups never need a bounds wrap.
//!
//! ## Determinism Guarantee
//!
//! The shuffle source is injected. Given the same seed, construction
//! produces **exactly** the same table on any platform, any time.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::{NoiseError, NoiseResult};

/// Seed for reproducible noise fields.
///
/// All table construction derives from this value when a seed is supplied.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NoiseSeed(u64);

impl NoiseSeed {
    /// Creates a new seed.
    #[inline]
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }

    /// Returns the raw seed value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Shuffled index table backing gradient selection.
///
/// Immutable once built. Tables are created fresh for each rendered image
/// and dropped with it; they are not a cache.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PermutationTable {
    /// `2 * size` entries; every value is in `[0, size)`.
    values: Vec<usize>,
    /// Number of distinct entries (half the stored length).
    size: usize,
}

impl PermutationTable {
    /// Builds a table of `size` distinct entries using the supplied
    /// shuffle source.
    ///
    /// The identity sequence `0..size` is shuffled (Fisher-Yates via
    /// [`SliceRandom::shuffle`]) and then duplicated to twice its length.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::EmptyTable`] when `size` is zero.
    pub fn build<R: Rng + ?Sized>(size: usize, rng: &mut R) -> NoiseResult<Self> {
        if size == 0 {
            return Err(NoiseError::EmptyTable);
        }

        let mut values: Vec<usize> = (0..size).collect();
        values.shuffle(rng);
        values.extend_from_within(..);

        tracing::debug!(size, "permutation table built");
        Ok(Self { values, size })
    }

    /// Builds a table from operating-system entropy.
    ///
    /// Every call produces a different table. Use
    /// [`PermutationTable::generate_seeded`] for reproducible output.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::EmptyTable`] when `size` is zero.
    pub fn generate(size: usize) -> NoiseResult<Self> {
        Self::build(size, &mut ChaCha8Rng::from_entropy())
    }

    /// Builds a reproducible table from a seed.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::EmptyTable`] when `size` is zero.
    pub fn generate_seeded(size: usize, seed: NoiseSeed) -> NoiseResult<Self> {
        Self::build(size, &mut ChaCha8Rng::seed_from_u64(seed.value()))
    }

    /// Builds a table from an explicit first half.
    ///
    /// The input must be a permutation of `0..len`; it is duplicated to
    /// twice its length, exactly as [`PermutationTable::build`] would.
    /// This is the entry point for regression fixtures that need a known
    /// table instead of a shuffled one.
    ///
    /// # Errors
    ///
    /// Returns [`NoiseError::EmptyTable`] for an empty input and
    /// [`NoiseError::NotAPermutation`] when any value of `0..len` is
    /// missing or repeated.
    pub fn from_permutation(first_half: Vec<usize>) -> NoiseResult<Self> {
        let size = first_half.len();
        if size == 0 {
            return Err(NoiseError::EmptyTable);
        }

        let mut seen = vec![false; size];
        for &value in &first_half {
            if value >= size || seen[value] {
                return Err(NoiseError::NotAPermutation { len: size });
            }
            seen[value] = true;
        }

        let mut values = first_half;
        values.extend_from_within(..);
        Ok(Self { values, size })
    }

    /// Number of distinct entries (the stored length is twice this).
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Looks up the entry at `index`.
    ///
    /// # Panics
    ///
    /// Panics when `index >= 2 * size`. The sampler's lookups are bounded
    /// by construction, so a panic here is a programming error, never a
    /// runtime condition to recover from.
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> usize {
        self.values[index]
    }

    /// All stored entries, duplicated half included.
    #[must_use]
    pub fn values(&self) -> &[usize] {
        &self.values
    }
}
