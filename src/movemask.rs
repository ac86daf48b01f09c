//! Extraction of a compact integer mask from a logical vector, in the spirit of
//! `_mm_movemask_epi8`. Not every instruction set can produce one bit per lane cheaply, so the
//! extraction also reports how many bits each lane occupies in the mask.

use crate::util::MaskInt;

/// A logical vector (every lane all-ones or all-zeros) that can be compressed into a mask.
pub trait Movemask: Copy {
    /// Integer type holding the compact mask.
    type Mask: MaskInt;

    /// Width of the bit group that encodes one lane in [`Mask`].
    ///
    /// [`Mask`]: Movemask::Mask
    const BITS_PER_ELEMENT: u32;

    /// Compress the vector into a mask. Lane `i` occupies bits
    /// `i * BITS_PER_ELEMENT .. (i + 1) * BITS_PER_ELEMENT`, all set if the lane is true.
    /// The second element of the result is [`BITS_PER_ELEMENT`].
    ///
    /// [`BITS_PER_ELEMENT`]: Movemask::BITS_PER_ELEMENT
    fn movemask(self) -> (Self::Mask, u32);
}
