// SPDX-License-Identifier: MIT OR Apache-2.0
//! Subset enumeration.

use std::iter::FusedIterator;

/// Iterator over every non-empty subset of a slice.
///
/// Subsets are produced in binary counting order: the subset for counter `i`
/// holds element `j` iff bit `j` of `i` is set. Each subset keeps the
/// relative order of the source slice. Only the first 64 elements can be
/// addressed; inputs beyond roughly 20 elements are impractical anyway.
#[derive(Debug, Clone)]
pub struct Subsets<'a, T> {
    items: &'a [T],
    next: u64,
    end: u64,
}

impl<'a, T> Subsets<'a, T> {
    /// Create a subset iterator over `items`
    pub fn new(items: &'a [T]) -> Self {
        debug_assert!(items.len() < 64, "subset enumeration limited to 63 elements");
        let end = u32::try_from(items.len())
            .ok()
            .and_then(|n| 1u64.checked_shl(n))
            .unwrap_or(u64::MAX);

        Self { items, next: 1, end }
    }

    fn remaining(&self) -> u64 {
        self.end.saturating_sub(self.next)
    }
}

impl<T: Clone> Iterator for Subsets<'_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.end {
            return None;
        }

        let mask = self.next;
        self.next += 1;

        let subset = self
            .items
            .iter()
            .take(64)
            .enumerate()
            .filter(|(bit, _)| (mask >> bit) & 1 == 1)
            .map(|(_, item)| item.clone())
            .collect();

        Some(subset)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::try_from(self.remaining()).unwrap_or(usize::MAX);
        (remaining, Some(remaining))
    }
}

impl<T: Clone> ExactSizeIterator for Subsets<'_, T> {}

impl<T: Clone> FusedIterator for Subsets<'_, T> {}

/// Collect every non-empty subset of `items`, `2^n - 1` in total.
///
/// An empty input yields no subsets.
pub fn subsets<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    let all: Vec<Vec<T>> = Subsets::new(items).collect();
    tracing::trace!("Enumerated {} subsets of {} items", all.len(), items.len());
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn test_binary_counting_order() {
        let result = subsets(&['A', 'B']);
        assert_eq!(result, vec![vec!['A'], vec!['B'], vec!['A', 'B']]);
    }

    #[test]
    fn test_three_elements() {
        let result = subsets(&[1, 2, 3]);
        assert_eq!(
            result,
            vec![
                vec![1],
                vec![2],
                vec![1, 2],
                vec![3],
                vec![1, 3],
                vec![2, 3],
                vec![1, 2, 3],
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let empty: [u8; 0] = [];
        assert!(subsets(&empty).is_empty());
        assert_eq!(Subsets::new(&empty).len(), 0);
    }

    #[test]
    fn test_size_hint_tracks_progress() {
        let items = [1, 2, 3];
        let mut iter = Subsets::new(&items);
        assert_eq!(iter.len(), 7);
        iter.next();
        iter.next();
        assert_eq!(iter.len(), 5);
        assert_eq!(iter.by_ref().count(), 5);
        assert_eq!(iter.next(), None);
    }

    proptest! {
        #[test]
        fn test_subsets_are_distinct_ordered_and_complete(n in 1usize..=12) {
            let items: Vec<usize> = (0..n).collect();
            let result = subsets(&items);

            prop_assert_eq!(result.len(), (1usize << n) - 1);

            let unique: HashSet<&Vec<usize>> = result.iter().collect();
            prop_assert_eq!(unique.len(), result.len());

            for subset in &result {
                prop_assert!(!subset.is_empty());
                prop_assert!(subset.windows(2).all(|pair| pair[0] < pair[1]));
            }
        }
    }
}
