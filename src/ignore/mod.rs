//! Boundary descriptors. A load near the start or end of a buffer may pull in lanes that lie
//! outside of the logically valid region (but inside readable memory). The descriptors tell
//! the boundary-aware operations of [`CharPlatform`] which lanes to disregard.
//!
//! [`IgnoreNone`] and [`IgnoreExtrema`] are distinct types, so the choice between the plain and
//! the boundary-aware code path is made at compile time. [`Ignore`] carries the same information
//! as a runtime tag, for callers that only know at runtime whether a chunk touches a boundary.
//!
//! [`CharPlatform`]: crate::CharPlatform

use crate::SimdCharError;

/// No lanes are excluded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IgnoreNone;

/// The first `first` and the last `last` lanes of a register are excluded from reductions.
///
/// Callers must keep `first + last` at most the cardinal of the platform they use the
/// descriptor with. [`IgnoreExtrema::new`] does not check this, [`IgnoreExtrema::checked`] does.
///
/// # Example
/// ```rust
/// use simd_char::IgnoreExtrema;
///
/// let ignore = IgnoreExtrema::checked(3, 2, 16).unwrap();
/// assert_eq!(ignore.first, 3);
/// assert!(IgnoreExtrema::checked(10, 7, 16).is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IgnoreExtrema {
    /// Number of leading lanes to ignore.
    pub first: usize,
    /// Number of trailing lanes to ignore.
    pub last: usize,
}

impl IgnoreExtrema {
    /// Create a descriptor without validating it against a cardinal.
    #[inline]
    #[must_use]
    pub const fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// Create a descriptor, failing if `first + last` exceeds `cardinal`.
    ///
    /// # Errors
    /// Returns [`SimdCharError::IgnoreOutOfRange`] if more lanes would be ignored than exist.
    #[inline]
    pub fn checked(first: usize, last: usize, cardinal: usize) -> Result<Self, SimdCharError> {
        match first.checked_add(last) {
            Some(total) if total <= cardinal => Ok(Self { first, last }),
            _ => Err(SimdCharError::IgnoreOutOfRange {
                first,
                last,
                cardinal,
            }),
        }
    }
}

/// Runtime-tagged boundary descriptor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ignore {
    /// See [`IgnoreNone`].
    #[default]
    None,
    /// See [`IgnoreExtrema`].
    Extrema(IgnoreExtrema),
}

impl From<IgnoreNone> for Ignore {
    fn from(_: IgnoreNone) -> Self {
        Ignore::None
    }
}

impl From<IgnoreExtrema> for Ignore {
    fn from(ignore: IgnoreExtrema) -> Self {
        Ignore::Extrema(ignore)
    }
}

/// Common trait of the boundary descriptors, so the platform can be generic over them.
/// For the marker types the result of [`extrema`] is known at compile time, and the branch
/// on it disappears after inlining.
///
/// [`extrema`]: IgnoreLanes::extrema
pub trait IgnoreLanes: Copy {
    /// The excluded extrema, or `None` if no lanes are excluded.
    fn extrema(self) -> Option<IgnoreExtrema>;
}

impl IgnoreLanes for IgnoreNone {
    #[inline(always)]
    fn extrema(self) -> Option<IgnoreExtrema> {
        None
    }
}

impl IgnoreLanes for IgnoreExtrema {
    #[inline(always)]
    fn extrema(self) -> Option<IgnoreExtrema> {
        Some(self)
    }
}

impl IgnoreLanes for Ignore {
    #[inline(always)]
    fn extrema(self) -> Option<IgnoreExtrema> {
        match self {
            Ignore::None => None,
            Ignore::Extrema(ignore) => Some(ignore),
        }
    }
}
