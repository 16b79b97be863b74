// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error type shared by the utility modules.

/// Errors raised by collection and layer operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UtilError {
    /// The operation needs at least one element
    #[error("Collection is empty")]
    EmptyCollection,

    /// Requested range does not fit inside the collection
    #[error("Range {start}..{start}+{count} out of bounds for length {len}")]
    IndexOutOfRange {
        /// First requested index
        start: usize,
        /// Number of requested elements
        count: usize,
        /// Length of the collection
        len: usize,
    },

    /// No layer is registered under this name
    #[error("Unknown layer: {0:?}")]
    UnknownLayer(String),

    /// Layer index does not fit in a 32-bit mask
    #[error("Layer index out of range: {0}")]
    LayerIndexOutOfRange(u32),

    /// Layer configuration could not be parsed or written
    #[error("Layer configuration error: {0}")]
    Config(String),
}

/// Result alias for utility operations
pub type Result<T> = std::result::Result<T, UtilError>;
