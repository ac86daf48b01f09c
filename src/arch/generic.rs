//! Marker for targets without a char platform

/// Stands in for [`SimdCharPlatform`] on targets with neither SSE2 nor NEON.
/// The type has no values and no operations, so code calling into the platform fails to compile
/// on such targets unless it is gated on [`HAS_SIMD_CHAR_PLATFORM`].
///
/// [`SimdCharPlatform`]: super::SimdCharPlatform
/// [`HAS_SIMD_CHAR_PLATFORM`]: super::HAS_SIMD_CHAR_PLATFORM
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoSimdCharPlatform {}
