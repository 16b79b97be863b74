// SPDX-License-Identifier: MIT OR Apache-2.0
//! Bitmask containment and layer masks.

use crate::error::Result;
use crate::layers::{LayerLookup, MAX_LAYERS};
use serde::{Deserialize, Serialize};
use std::ops::{BitAnd, BitOr};

/// Whether every bit of `value` is set in `mask`
pub const fn mask_contains(mask: u32, value: u32) -> bool {
    mask == (mask | value)
}

/// Whether bit `bit` is set in `mask`.
///
/// Bits past the width of the mask are never set.
pub const fn contains_bit(mask: u32, bit: u32) -> bool {
    match 1u32.checked_shl(bit) {
        Some(value) => mask_contains(mask, value),
        None => false,
    }
}

/// A 32-bit mask where bit `i` marks membership of layer `i`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask(pub u32);

impl LayerMask {
    /// Mask with no layers
    pub const NOTHING: Self = Self(0);
    /// Mask with every layer
    pub const EVERYTHING: Self = Self(u32::MAX);

    /// Mask holding only `layer`; empty if `layer` is not below [`MAX_LAYERS`]
    pub const fn from_layer(layer: u32) -> Self {
        match 1u32.checked_shl(layer) {
            Some(bits) => Self(bits),
            None => Self::NOTHING,
        }
    }

    /// Raw bits
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// Whether `layer` is in the mask
    pub const fn contains(self, layer: u32) -> bool {
        contains_bit(self.0, layer)
    }

    /// Whether the layer registered as `name` is in the mask
    pub fn contains_named<L: LayerLookup + ?Sized>(self, name: &str, lookup: &L) -> Result<bool> {
        let layer = lookup.layer_index(name)?;
        Ok(self.contains(layer))
    }

    /// Copy of the mask with `layer` added
    #[must_use]
    pub const fn with_layer(self, layer: u32) -> Self {
        Self(self.0 | Self::from_layer(layer).0)
    }

    /// Copy of the mask with `layer` removed
    #[must_use]
    pub const fn without_layer(self, layer: u32) -> Self {
        Self(self.0 & !Self::from_layer(layer).0)
    }

    /// Layers present in the mask, lowest first
    pub fn layers(self) -> impl Iterator<Item = u32> {
        (0..MAX_LAYERS).filter(move |&layer| self.contains(layer))
    }
}

impl From<u32> for LayerMask {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<LayerMask> for u32 {
    fn from(mask: LayerMask) -> Self {
        mask.0
    }
}

impl BitOr for LayerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for LayerMask {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}
