// SPDX-License-Identifier: MIT OR Apache-2.0
//! Curve errors.

/// Error editing a curve
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CurveError {
    /// Key index does not address an existing keyframe
    #[error("Keyframe index {index} out of range for {len} keys")]
    IndexOutOfRange {
        /// Requested key index
        index: usize,
        /// Number of keys in the curve
        len: usize,
    },
}
