// SPDX-License-Identifier: MIT OR Apache-2.0
//! Collection and bit-manipulation utilities for `OrdoPlay`.
//!
//! This crate provides the engine-independent helpers shared by the editor
//! and runtime:
//! - Subset enumeration
//! - Seeded and unseeded shuffling
//! - Positional list surgery (slice, splice, pop, shift, unshift)
//! - Layer masks and the layer-name registry
//!
//! ## Usage
//!
//! The list helpers are extension traits, so bring them into scope first:
//!
//! ```
//! use ordoplay_util::{ListExt, SliceExt};
//!
//! let mut items = vec![1, 2, 3, 4, 5];
//! assert_eq!(items.slice_span((1, 2)).unwrap(), vec![2, 3]);
//! assert_eq!(items.splice_span((1, 2)).unwrap(), vec![2, 3]);
//! assert_eq!(items, vec![1, 4, 5]);
//! ```

pub mod combinatorics;
pub mod error;
pub mod layers;
pub mod list;
pub mod mask;
pub mod shuffle;

pub use combinatorics::{subsets, Subsets};
pub use error::{Result, UtilError};
pub use layers::{LayerLookup, LayerRegistry, LayerSettings, MAX_LAYERS};
pub use list::{ListExt, SliceExt, Span};
pub use mask::{contains_bit, mask_contains, LayerMask};
pub use shuffle::{shuffled, shuffled_seeded, shuffled_with};
