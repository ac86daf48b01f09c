//! Unsigned integers used as compact lane masks.
//! A compact mask stores one fixed-width bit group per lane, lane 0 in the least significant group.

use std::fmt::Debug;
use std::ops::{BitAnd, BitOr, Not};

/// An unsigned integer that can hold a compact lane mask.
pub trait MaskInt:
    Copy + Eq + Debug + Not<Output = Self> + BitAnd<Output = Self> + BitOr<Output = Self>
{
    /// Width of the integer in bits.
    const BITS: u32;

    /// The mask with no bits set.
    const ZERO: Self;

    /// The mask with every bit set.
    const ONES: Self;

    /// Return a mask with exactly the lowest `n` bits set.
    ///
    /// `n == Self::BITS` yields [`ONES`] without evaluating a shift by the full width.
    /// `n > Self::BITS` violates the contract; debug builds panic, release builds return [`ONES`].
    ///
    /// [`ONES`]: MaskInt::ONES
    fn set_lower_n_bits(n: u32) -> Self;

    /// Number of set bits.
    fn count_ones(self) -> u32;

    /// Number of trailing zero bits, `Self::BITS` for zero.
    fn trailing_zeros(self) -> u32;

    /// Whether bit `i` is set.
    fn bit(self, i: u32) -> bool;
}

macro_rules! impl_mask_int {
    ($($t:ty),*) => {
        $(
            impl MaskInt for $t {
                const BITS: u32 = <$t>::BITS;
                const ZERO: Self = 0;
                const ONES: Self = <$t>::MAX;

                #[inline(always)]
                fn set_lower_n_bits(n: u32) -> Self {
                    debug_assert!(
                        n <= Self::BITS,
                        "cannot set {} bits in a {}-bit mask",
                        n,
                        Self::BITS
                    );
                    if n >= Self::BITS {
                        return Self::ONES;
                    }
                    ((1 as $t) << n) - 1
                }

                #[inline(always)]
                fn count_ones(self) -> u32 {
                    <$t>::count_ones(self)
                }

                #[inline(always)]
                fn trailing_zeros(self) -> u32 {
                    <$t>::trailing_zeros(self)
                }

                #[inline(always)]
                fn bit(self, i: u32) -> bool {
                    (self >> i) & 1 != 0
                }
            }
        )*
    };
}

impl_mask_int!(u8, u16, u32, u64);

/// Return a `T` with exactly the lowest `n` bits set. See [`MaskInt::set_lower_n_bits`].
#[inline(always)]
#[must_use]
pub fn set_lower_n_bits<T: MaskInt>(n: u32) -> T {
    T::set_lower_n_bits(n)
}
