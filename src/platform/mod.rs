//! The portable char platform. [`CharPlatform`] wraps the minimal operations of a backend and
//! derives the boundary-aware loads and reductions from them, so they are written once for all
//! instruction sets.

use std::marker::PhantomData;
use std::mem::size_of;

use crate::arch::{Logical, Mmask, Reg, SimdCharOps};
use crate::movemask::Movemask;
use crate::util::{set_lower_n_bits, MaskInt};
use crate::{IgnoreExtrema, IgnoreLanes, IgnoreNone, SimdCharError};

/// Char operations of the backend `P`, extended by operations that respect a boundary
/// descriptor.
///
/// The type is never instantiated. All operations are associated functions, resolved at compile
/// time and inlined into the caller.
///
/// # Example
/// ```rust
/// # #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))] {
/// use simd_char::{IgnoreExtrema, IgnoreNone, SimdCharPlatform};
///
/// let mut buffer = [b'a'; 64];
/// buffer[3] = b'\n';
///
/// let reg = SimdCharPlatform::load_slice(&buffer).unwrap();
/// let newline = SimdCharPlatform::equal(reg, b'\n');
/// assert!(SimdCharPlatform::any(newline, IgnoreNone));
///
/// // pretend the valid data starts at index 4
/// assert!(!SimdCharPlatform::any(newline, IgnoreExtrema::new(4, 0)));
/// # }
/// ```
pub struct CharPlatform<P>(PhantomData<P>);

impl<P: SimdCharOps> CharPlatform<P> {
    /// Number of byte lanes in a register.
    pub const CARDINAL: usize = P::CARDINAL;

    /// Width of the bit group encoding one lane in a compact mask.
    pub const MMASK_BITS_PER_ELEMENT: u32 = <Logical<P> as Movemask>::BITS_PER_ELEMENT;

    // Evaluated on first use for a backend. A backend whose lanes do not fit into its mask type,
    // or whose register is not exactly `CARDINAL` bytes, fails to compile.
    const LAYOUT_CHECK: () = {
        assert!(
            P::CARDINAL as u32 * Self::MMASK_BITS_PER_ELEMENT <= <Mmask<P> as MaskInt>::BITS,
            "compact mask type is too narrow for the register"
        );
        assert!(
            size_of::<Reg<P>>() == P::CARDINAL,
            "register size does not match the cardinal"
        );
    };

    /// See [`SimdCharOps::loadu`].
    ///
    /// # Safety
    /// `ptr` must be valid for reads of `CARDINAL` bytes.
    #[inline(always)]
    pub unsafe fn loadu(ptr: *const u8, ignore: IgnoreNone) -> Reg<P> {
        P::loadu(ptr, ignore)
    }

    /// See [`SimdCharOps::unsafe_loadu`].
    ///
    /// # Safety
    /// `ptr` must be valid for reads of `CARDINAL` bytes.
    #[inline(always)]
    pub unsafe fn unsafe_loadu(ptr: *const u8, ignore: IgnoreNone) -> Reg<P> {
        P::unsafe_loadu(ptr, ignore)
    }

    /// Load a register from an address the caller considers aligned. There is no gain in using
    /// aligned load instructions, so this is [`loadu`] if no lanes are ignored.
    /// If lanes are ignored, the load may cover bytes outside of the valid data, and it is
    /// [`unsafe_loadu`] instead.
    ///
    /// # Safety
    /// `ptr` must be valid for reads of `CARDINAL` bytes, including the ignored lanes.
    ///
    /// [`loadu`]: CharPlatform::loadu
    /// [`unsafe_loadu`]: CharPlatform::unsafe_loadu
    #[inline(always)]
    pub unsafe fn loada<I: IgnoreLanes>(ptr: *const u8, ignore: I) -> Reg<P> {
        match ignore.extrema() {
            None => P::loadu(ptr, IgnoreNone),
            Some(_) => P::unsafe_loadu(ptr, IgnoreNone),
        }
    }

    /// Load the first `CARDINAL` bytes of `bytes`.
    ///
    /// # Errors
    /// Returns [`SimdCharError::ShortRead`] if the slice holds fewer than `CARDINAL` bytes.
    #[inline]
    pub fn load_slice(bytes: &[u8]) -> Result<Reg<P>, SimdCharError> {
        if bytes.len() < P::CARDINAL {
            return Err(SimdCharError::ShortRead {
                needed: P::CARDINAL,
                available: bytes.len(),
            });
        }

        // SAFETY: the slice has at least `CARDINAL` readable bytes
        Ok(unsafe { P::loadu(bytes.as_ptr(), IgnoreNone) })
    }

    /// See [`SimdCharOps::equal`].
    #[inline(always)]
    pub fn equal(reg: Reg<P>, x: u8) -> Logical<P> {
        P::equal(reg, x)
    }

    /// See [`SimdCharOps::le_unsigned`].
    #[inline(always)]
    pub fn le_unsigned(reg: Reg<P>, x: u8) -> Logical<P> {
        P::le_unsigned(reg, x)
    }

    /// See [`SimdCharOps::logical_or`].
    #[inline(always)]
    pub fn logical_or(x: Logical<P>, y: Logical<P>) -> Logical<P> {
        P::logical_or(x, y)
    }

    /// Compress a logical vector into a compact mask with
    /// [`MMASK_BITS_PER_ELEMENT`] bits per lane.
    ///
    /// [`MMASK_BITS_PER_ELEMENT`]: CharPlatform::MMASK_BITS_PER_ELEMENT
    #[inline(always)]
    #[must_use]
    pub fn movemask(log: Logical<P>) -> Mmask<P> {
        let () = Self::LAYOUT_CHECK;
        log.movemask().0
    }

    /// Clear the bit groups of all ignored lanes in `mask`.
    #[inline(always)]
    #[must_use]
    pub fn clear<I: IgnoreLanes>(mask: Mmask<P>, ignore: I) -> Mmask<P> {
        match ignore.extrema() {
            None => mask,
            Some(extrema) => Self::clear_extrema(mask, extrema),
        }
    }

    /// Mask out the lowest `first` and the highest `last` lane groups.
    ///
    /// `first + last` must not exceed `CARDINAL`. This is only checked by a debug assertion.
    /// In release builds, excess lanes saturate: at most every lane is cleared.
    #[inline(always)]
    fn clear_extrema(mask: Mmask<P>, ignore: IgnoreExtrema) -> Mmask<P> {
        let () = Self::LAYOUT_CHECK;
        debug_assert!(
            ignore
                .first
                .checked_add(ignore.last)
                .is_some_and(|total| total <= P::CARDINAL),
            "cannot ignore {} leading and {} trailing lanes of {}",
            ignore.first,
            ignore.last,
            P::CARDINAL
        );

        let bits = Self::MMASK_BITS_PER_ELEMENT;
        let first = ignore.first.min(P::CARDINAL) as u32;
        let kept = P::CARDINAL.saturating_sub(ignore.last) as u32;

        let clear_first = !set_lower_n_bits::<Mmask<P>>(first * bits);
        let clear_last = set_lower_n_bits::<Mmask<P>>(kept * bits);
        mask & clear_first & clear_last
    }

    /// Whether any lane of `log` that is not ignored is true.
    #[inline(always)]
    pub fn any<I: IgnoreLanes>(log: Logical<P>, ignore: I) -> bool {
        match ignore.extrema() {
            None => P::any(log, IgnoreNone),
            Some(extrema) => {
                Self::clear_extrema(Self::movemask(log), extrema) != <Mmask<P> as MaskInt>::ZERO
            }
        }
    }

    /// Copy the bytes of a register into an array, lane 0 first. Meant for tests and debugging.
    #[must_use]
    pub fn to_array(reg: Reg<P>) -> P::Array {
        let () = Self::LAYOUT_CHECK;
        let mut buf = P::Array::default();
        debug_assert_eq!(buf.as_ref().len(), P::CARDINAL);

        // SAFETY: the register is exactly `CARDINAL` bytes (see `LAYOUT_CHECK`), and so is `buf`
        unsafe {
            std::ptr::copy_nonoverlapping(
                (&reg as *const Reg<P>).cast::<u8>(),
                buf.as_mut().as_mut_ptr(),
                P::CARDINAL,
            );
        }
        buf
    }
}

#[cfg(target_arch = "x86_64")]
/// The char platform on SSE2.
pub type Sse2CharPlatform = CharPlatform<crate::arch::x86_64::Sse2CharOps>;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
/// The char platform on AVX2.
pub type Avx2CharPlatform = CharPlatform<crate::arch::x86_64::Avx2CharOps>;

#[cfg(target_arch = "aarch64")]
/// The char platform on NEON.
pub type NeonCharPlatform = CharPlatform<crate::arch::aarch64::NeonCharOps>;

#[cfg(test)]
mod tests;
