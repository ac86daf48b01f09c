#![warn(missing_docs)]
#![cfg_attr(feature = "no-sanitize", feature(sanitize))]

//! This crate provides a uniform interface to byte-wise ("char") SIMD operations on SSE2, AVX2
//! and NEON. It is meant as the building block of byte-scanning algorithms (find the first
//! newline, the first byte below a threshold, ...), which can be written once against
//! [`SimdCharPlatform`] and compile to the native instructions of every supported target.
//!
//! # Operations
//!  - Loads: [`loadu`][CharPlatform::loadu], [`unsafe_loadu`][CharPlatform::unsafe_loadu]
//!    and the boundary-aware [`loada`][CharPlatform::loada].
//!  - Comparisons against a byte: [`equal`][CharPlatform::equal] and
//!    [`le_unsigned`][CharPlatform::le_unsigned], combined with
//!    [`logical_or`][CharPlatform::logical_or].
//!  - Reductions: [`any`][CharPlatform::any], [`movemask`][CharPlatform::movemask] and
//!    [`clear`][CharPlatform::clear].
//!
//! # Boundaries
//! The first and the last chunk of a buffer scan usually overlap memory outside of the buffer.
//! The boundary-aware operations take an [`IgnoreExtrema`] descriptor naming the lanes at both
//! ends whose results must be disregarded, or [`IgnoreNone`] for full chunks.
//!
//! # Backend selection
//! The backend is selected at compile time: AVX2 if the target enables the `avx2` feature,
//! otherwise SSE2 on x86_64, and NEON on aarch64. There is no runtime dispatch. On every other
//! target [`HAS_SIMD_CHAR_PLATFORM`] is `false`, and any use of [`SimdCharPlatform`] is a
//! compile error.
//!
//! # Safety
//! Loads take raw pointers and are `unsafe`: the pointer must be valid for reads of a whole
//! register, including lanes that are ignored later. [`unsafe_loadu`][CharPlatform::unsafe_loadu]
//! does not relax that. It only exempts the load from sanitizer instrumentation (with the
//! `no-sanitize` feature on nightly), because lanes beyond the valid data may legitimately be
//! uninitialized. [`load_slice`][CharPlatform::load_slice] is a checked alternative.

pub use crate::arch::{
    Logical, Mmask, NoSimdCharPlatform, Reg, SimdCharOps, SimdCharPlatform,
    HAS_SIMD_CHAR_PLATFORM,
};
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
pub use crate::arch::{ArchCharOps, SimdCharLogical, SimdCharReg};
pub use crate::error::SimdCharError;
pub use crate::ignore::{Ignore, IgnoreExtrema, IgnoreLanes, IgnoreNone};
pub use crate::movemask::Movemask;
pub use crate::platform::CharPlatform;
#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
pub use crate::platform::Avx2CharPlatform;
#[cfg(target_arch = "aarch64")]
pub use crate::platform::NeonCharPlatform;
#[cfg(target_arch = "x86_64")]
pub use crate::platform::Sse2CharPlatform;
pub use crate::util::{set_lower_n_bits, MaskInt};

pub mod arch;
pub mod ignore;
pub mod movemask;
pub mod platform;
pub mod util;

mod error;
