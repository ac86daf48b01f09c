//! x86_64 char operations.
//!
//! SSE2 is part of the x86_64 baseline and always available. The AVX2 backend only exists if the
//! build enables the `avx2` target feature (e.g. `-C target-feature=+avx2` or
//! `-C target-cpu=native` on a capable machine); there is no runtime detection.
//!
//! There are no unsigned byte comparisons on x86. `a <= b` is computed as `a == min(a, b)`:
//! a byte survives the unsigned minimum unchanged iff it was already less or equal.
//!
//! Loads are always unaligned loads. Aligned load instructions are not faster on any CPU we
//! care about.

// x86 intrinsics take bytes as i8
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use std::arch::x86_64::*;

use super::SimdCharOps;
use crate::movemask::Movemask;
use crate::IgnoreNone;

/// SSE2 char operations on 16 lanes.
#[derive(Debug, Clone, Copy)]
pub struct Sse2CharOps;

impl SimdCharOps for Sse2CharOps {
    type Reg = __m128i;
    type Logical = __m128i;
    type Array = [u8; 16];

    const CARDINAL: usize = 16;

    #[inline(always)]
    unsafe fn loadu(ptr: *const u8, _: IgnoreNone) -> __m128i {
        _mm_loadu_si128(ptr.cast::<__m128i>())
    }

    #[cfg_attr(not(feature = "no-sanitize"), inline(always))]
    #[cfg_attr(feature = "no-sanitize", inline)]
    #[cfg_attr(feature = "no-sanitize", sanitize(address = "off", memory = "off"))]
    unsafe fn unsafe_loadu(ptr: *const u8, _: IgnoreNone) -> __m128i {
        _mm_loadu_si128(ptr.cast::<__m128i>())
    }

    #[inline(always)]
    fn equal(reg: __m128i, x: u8) -> __m128i {
        unsafe { _mm_cmpeq_epi8(reg, _mm_set1_epi8(x as i8)) }
    }

    #[inline(always)]
    fn le_unsigned(reg: __m128i, x: u8) -> __m128i {
        unsafe {
            let min = _mm_min_epu8(reg, _mm_set1_epi8(x as i8));
            _mm_cmpeq_epi8(reg, min)
        }
    }

    #[inline(always)]
    fn logical_or(x: __m128i, y: __m128i) -> __m128i {
        unsafe { _mm_or_si128(x, y) }
    }

    #[inline(always)]
    fn any(log: __m128i, _: IgnoreNone) -> bool {
        log.movemask().0 != 0
    }
}

impl Movemask for __m128i {
    type Mask = u16;

    const BITS_PER_ELEMENT: u32 = 1;

    #[inline(always)]
    fn movemask(self) -> (u16, u32) {
        // only the low 16 bits of the result can be set
        let mask = unsafe { _mm_movemask_epi8(self) } as u16;
        (mask, Self::BITS_PER_ELEMENT)
    }
}

#[cfg(target_feature = "avx2")]
pub use avx2::Avx2CharOps;

#[cfg(target_feature = "avx2")]
mod avx2 {
    use std::arch::x86_64::*;

    use super::super::SimdCharOps;
    use crate::movemask::Movemask;
    use crate::IgnoreNone;

    /// AVX2 char operations on 32 lanes.
    #[derive(Debug, Clone, Copy)]
    pub struct Avx2CharOps;

    impl SimdCharOps for Avx2CharOps {
        type Reg = __m256i;
        type Logical = __m256i;
        type Array = [u8; 32];

        const CARDINAL: usize = 32;

        #[inline(always)]
        unsafe fn loadu(ptr: *const u8, _: IgnoreNone) -> __m256i {
            _mm256_loadu_si256(ptr.cast::<__m256i>())
        }

        #[cfg_attr(not(feature = "no-sanitize"), inline(always))]
        #[cfg_attr(feature = "no-sanitize", inline)]
        #[cfg_attr(feature = "no-sanitize", sanitize(address = "off", memory = "off"))]
        unsafe fn unsafe_loadu(ptr: *const u8, _: IgnoreNone) -> __m256i {
            _mm256_loadu_si256(ptr.cast::<__m256i>())
        }

        #[inline(always)]
        fn equal(reg: __m256i, x: u8) -> __m256i {
            unsafe { _mm256_cmpeq_epi8(reg, _mm256_set1_epi8(x as i8)) }
        }

        #[inline(always)]
        fn le_unsigned(reg: __m256i, x: u8) -> __m256i {
            unsafe {
                let min = _mm256_min_epu8(reg, _mm256_set1_epi8(x as i8));
                _mm256_cmpeq_epi8(reg, min)
            }
        }

        #[inline(always)]
        fn logical_or(x: __m256i, y: __m256i) -> __m256i {
            unsafe { _mm256_or_si256(x, y) }
        }

        #[inline(always)]
        fn any(log: __m256i, _: IgnoreNone) -> bool {
            log.movemask().0 != 0
        }
    }

    impl Movemask for __m256i {
        type Mask = u32;

        const BITS_PER_ELEMENT: u32 = 1;

        #[inline(always)]
        fn movemask(self) -> (u32, u32) {
            let mask = unsafe { _mm256_movemask_epi8(self) } as u32;
            (mask, Self::BITS_PER_ELEMENT)
        }
    }
}
