// SPDX-License-Identifier: MIT OR Apache-2.0
//! Positional list surgery.
//!
//! [`ListExt`] adds the mutating operations (pop, shift, unshift, splice) to
//! `Vec<T>`; [`SliceExt`] adds the read-only ones (slice, random pick,
//! shuffle, subsets) to any slice. Every range is validated before anything
//! is removed, so a failing call leaves the list untouched.

use crate::combinatorics;
use crate::error::{Result, UtilError};
use crate::shuffle;
use rand::Rng;

/// A contiguous range given as a start index and an element count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// First index of the range
    pub start: usize,
    /// Number of elements in the range
    pub count: usize,
}

impl Span {
    /// Create a span of `count` elements starting at `start`
    pub fn new(start: usize, count: usize) -> Self {
        Self { start, count }
    }

    /// Span of the first `count` elements
    pub fn first(count: usize) -> Self {
        Self::new(0, count)
    }

    /// Resolve against a collection length, yielding `start..end`
    pub fn resolve(self, len: usize) -> Result<std::ops::Range<usize>> {
        match self.start.checked_add(self.count) {
            Some(end) if end <= len => Ok(self.start..end),
            _ => {
                tracing::debug!(
                    "Rejected span {}+{} for length {}",
                    self.start,
                    self.count,
                    len
                );
                Err(UtilError::IndexOutOfRange {
                    start: self.start,
                    count: self.count,
                    len,
                })
            }
        }
    }
}

impl Default for Span {
    /// The head element: start 0, count 1
    fn default() -> Self {
        Self::new(0, 1)
    }
}

impl From<(usize, usize)> for Span {
    fn from((start, count): (usize, usize)) -> Self {
        Self::new(start, count)
    }
}

/// Read-only helpers for slices
pub trait SliceExt<T> {
    /// Shallow copy of the elements in `span`; the slice is unchanged
    fn slice_span(&self, span: impl Into<Span>) -> Result<Vec<T>>
    where
        T: Clone;

    /// Pick one element uniformly at random from the given source
    fn choose_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T>;

    /// Pick one element uniformly at random from the thread-local source
    fn choose_random(&self) -> Result<&T> {
        self.choose_with(&mut rand::rng())
    }

    /// Shuffled copy using the given source
    fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone;

    /// Shuffled copy, reproducible for a given seed
    fn shuffled_seeded(&self, seed: u64) -> Vec<T>
    where
        T: Clone;

    /// Shuffled copy using the thread-local source
    fn shuffled(&self) -> Vec<T>
    where
        T: Clone;

    /// Every non-empty subset, in binary counting order
    fn subsets(&self) -> Vec<Vec<T>>
    where
        T: Clone;
}

impl<T> SliceExt<T> for [T] {
    fn slice_span(&self, span: impl Into<Span>) -> Result<Vec<T>>
    where
        T: Clone,
    {
        let range = span.into().resolve(self.len())?;
        Ok(self[range].to_vec())
    }

    fn choose_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&T> {
        if self.is_empty() {
            return Err(UtilError::EmptyCollection);
        }
        Ok(&self[rng.random_range(0..self.len())])
    }

    fn shuffled_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<T>
    where
        T: Clone,
    {
        shuffle::shuffled_with(self, rng)
    }

    fn shuffled_seeded(&self, seed: u64) -> Vec<T>
    where
        T: Clone,
    {
        shuffle::shuffled_seeded(self, seed)
    }

    fn shuffled(&self) -> Vec<T>
    where
        T: Clone,
    {
        shuffle::shuffled(self)
    }

    fn subsets(&self) -> Vec<Vec<T>>
    where
        T: Clone,
    {
        combinatorics::subsets(self)
    }
}

/// Mutating helpers for owned lists
pub trait ListExt<T> {
    /// Remove and return the last element
    fn pop_last(&mut self) -> Result<T>;

    /// Remove and return the first element
    fn shift(&mut self) -> Result<T>;

    /// Insert an element at the front
    fn unshift(&mut self, item: T);

    /// Insert a run of elements at the front, keeping their order
    fn unshift_all<I: IntoIterator<Item = T>>(&mut self, items: I);

    /// Remove the elements in `span` and return them
    fn splice_span(&mut self, span: impl Into<Span>) -> Result<Vec<T>>;
}

impl<T> ListExt<T> for Vec<T> {
    fn pop_last(&mut self) -> Result<T> {
        self.pop().ok_or(UtilError::EmptyCollection)
    }

    fn shift(&mut self) -> Result<T> {
        if self.is_empty() {
            return Err(UtilError::EmptyCollection);
        }
        Ok(self.remove(0))
    }

    fn unshift(&mut self, item: T) {
        self.insert(0, item);
    }

    fn unshift_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.splice(0..0, items);
    }

    fn splice_span(&mut self, span: impl Into<Span>) -> Result<Vec<T>> {
        let range = span.into().resolve(self.len())?;
        tracing::trace!("Splicing {:?} from list of length {}", range, self.len());
        Ok(self.drain(range).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_slice_copies_range() {
        let items = vec![1, 2, 3, 4, 5];
        assert_eq!(items.slice_span((1, 2)).unwrap(), vec![2, 3]);
        assert_eq!(items.len(), 5);
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_slice_defaults_to_head() {
        let items = vec!['a', 'b', 'c'];
        assert_eq!(items.slice_span(Span::default()).unwrap(), vec!['a']);
        assert_eq!(items.slice_span(Span::first(2)).unwrap(), vec!['a', 'b']);
    }

    #[test]
    fn test_slice_out_of_range() {
        let items = vec![1, 2, 3];
        assert_eq!(
            items.slice_span((2, 2)),
            Err(UtilError::IndexOutOfRange { start: 2, count: 2, len: 3 })
        );
        assert!(items.slice_span((usize::MAX, 2)).is_err());

        let empty: Vec<i32> = Vec::new();
        assert!(empty.slice_span(Span::default()).is_err());
        assert_eq!(empty.slice_span((0, 0)).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_splice_removes_range() {
        let mut items = vec![1, 2, 3, 4, 5];
        assert_eq!(items.splice_span((1, 2)).unwrap(), vec![2, 3]);
        assert_eq!(items, vec![1, 4, 5]);

        assert_eq!(items.splice_span(Span::default()).unwrap(), vec![1]);
        assert_eq!(items, vec![4, 5]);
    }

    #[test]
    fn test_failed_splice_leaves_list_untouched() {
        let mut items = vec![1, 2, 3, 4, 5];
        assert!(items.splice_span((4, 2)).is_err());
        assert_eq!(items, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_pop_and_shift() {
        let mut items = vec![1, 2, 3];
        assert_eq!(items.pop_last(), Ok(3));
        assert_eq!(items, vec![1, 2]);
        assert_eq!(items.shift(), Ok(1));
        assert_eq!(items, vec![2]);

        let mut empty: Vec<i32> = Vec::new();
        assert_eq!(empty.pop_last(), Err(UtilError::EmptyCollection));
        assert_eq!(empty.shift(), Err(UtilError::EmptyCollection));
    }

    #[test]
    fn test_unshift() {
        let mut items = vec![3, 4];
        items.unshift(2);
        assert_eq!(items, vec![2, 3, 4]);
        items.unshift_all(vec![0, 1]);
        assert_eq!(items, vec![0, 1, 2, 3, 4]);
        items.unshift_all(Vec::new());
        assert_eq!(items.len(), 5);
    }

    #[test]
    fn test_choose() {
        let items = [10, 20, 30];
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let picked = items.choose_with(&mut rng).unwrap();
            assert!(items.contains(picked));
        }
        assert!(items.choose_random().is_ok());

        let empty: [i32; 0] = [];
        assert_eq!(empty.choose_random(), Err(UtilError::EmptyCollection));
    }

    #[test]
    fn test_choose_reaches_every_element() {
        let items = [0usize, 1, 2, 3];
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[*items.choose_with(&mut rng).unwrap()] = true;
        }
        assert!(seen.iter().all(|&hit| hit));
    }

    #[test]
    fn test_extension_delegates() {
        let items = vec![1, 2];
        assert_eq!(items.subsets(), vec![vec![1], vec![2], vec![1, 2]]);
        assert_eq!(items.shuffled_seeded(3), items.shuffled_seeded(3));
    }
}
