pub mod bits;

pub use bits::{set_lower_n_bits, MaskInt};
