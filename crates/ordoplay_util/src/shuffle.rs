// SPDX-License-Identifier: MIT OR Apache-2.0
//! Randomized reordering.
//!
//! All variants return a fresh `Vec` and leave the input alone. The order is
//! a Fisher-Yates permutation, so every one of the `n!` orderings can occur.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Shuffled copy of `items` drawn from `rng`
pub fn shuffled_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    copy.shuffle(rng);
    copy
}

/// Shuffled copy of `items` that depends only on `seed`.
///
/// Builds its own generator and never touches the thread-local source.
pub fn shuffled_seeded<T: Clone>(items: &[T], seed: u64) -> Vec<T> {
    tracing::trace!("Seeded shuffle of {} items (seed {})", items.len(), seed);
    let mut rng = StdRng::seed_from_u64(seed);
    shuffled_with(items, &mut rng)
}

/// Shuffled copy of `items` using the thread-local source
pub fn shuffled<T: Clone>(items: &[T]) -> Vec<T> {
    shuffled_with(items, &mut rand::rng())
}
