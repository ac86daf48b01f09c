//! ARM64 (AArch64) char operations using NEON, which every aarch64 target has.
//!
//! NEON has a native unsigned less-or-equal (`vcleq_u8`), but no instruction that collects one
//! bit per lane. The mask is produced by narrowing instead: reinterpreting the 16 byte lanes as
//! 8 lanes of `u16` and shifting each right by 4 while narrowing to `u8` keeps the high nibble of
//! the even byte and the low nibble of the odd byte. Since logical lanes are all-ones or
//! all-zeros, every lane ends up as one nibble of a `u64`.

use std::arch::aarch64::*;

use super::SimdCharOps;
use crate::movemask::Movemask;
use crate::IgnoreNone;

/// NEON char operations on 16 lanes.
#[derive(Debug, Clone, Copy)]
pub struct NeonCharOps;

impl SimdCharOps for NeonCharOps {
    type Reg = uint8x16_t;
    type Logical = uint8x16_t;
    type Array = [u8; 16];

    const CARDINAL: usize = 16;

    #[inline(always)]
    unsafe fn loadu(ptr: *const u8, _: IgnoreNone) -> uint8x16_t {
        vld1q_u8(ptr)
    }

    #[cfg_attr(not(feature = "no-sanitize"), inline(always))]
    #[cfg_attr(feature = "no-sanitize", inline)]
    #[cfg_attr(feature = "no-sanitize", sanitize(address = "off", memory = "off"))]
    unsafe fn unsafe_loadu(ptr: *const u8, _: IgnoreNone) -> uint8x16_t {
        vld1q_u8(ptr)
    }

    #[inline(always)]
    fn equal(reg: uint8x16_t, x: u8) -> uint8x16_t {
        unsafe { vceqq_u8(reg, vdupq_n_u8(x)) }
    }

    #[inline(always)]
    fn le_unsigned(reg: uint8x16_t, x: u8) -> uint8x16_t {
        unsafe { vcleq_u8(reg, vdupq_n_u8(x)) }
    }

    #[inline(always)]
    fn logical_or(x: uint8x16_t, y: uint8x16_t) -> uint8x16_t {
        unsafe { vorrq_u8(x, y) }
    }

    /// A horizontal maximum is cheaper than building the mask.
    #[inline(always)]
    fn any(log: uint8x16_t, _: IgnoreNone) -> bool {
        unsafe { vmaxvq_u8(log) != 0 }
    }
}

impl Movemask for uint8x16_t {
    type Mask = u64;

    const BITS_PER_ELEMENT: u32 = 4;

    #[inline(always)]
    fn movemask(self) -> (u64, u32) {
        let mask = unsafe {
            let nibbles = vshrn_n_u16(vreinterpretq_u16_u8(self), 4);
            vget_lane_u64(vreinterpret_u64_u8(nibbles), 0)
        };
        (mask, Self::BITS_PER_ELEMENT)
    }
}
