//! Errors reported by the checked entry points. The SIMD operations themselves cannot fail.

use thiserror::Error;

/// Error type of the checked helpers around the char platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimdCharError {
    /// A slice was too short to fill a whole register.
    #[error("cannot load {needed} bytes from a slice of {available} bytes")]
    ShortRead {
        /// Number of bytes a load reads, the register cardinal.
        needed: usize,
        /// Number of bytes in the slice.
        available: usize,
    },

    /// A boundary descriptor excludes more lanes than a register holds.
    #[error("ignoring {first} leading and {last} trailing lanes exceeds the cardinal {cardinal}")]
    IgnoreOutOfRange {
        /// Leading lanes to ignore.
        first: usize,
        /// Trailing lanes to ignore.
        last: usize,
        /// Lane count of the register.
        cardinal: usize,
    },
}
