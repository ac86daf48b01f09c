//! Architecture-specific char operations and the compile-time selection of the platform.
//!
//! Every supported instruction set gets one zero-sized type implementing [`SimdCharOps`]:
//! SSE2 and AVX2 on x86_64, NEON on aarch64. Exactly one of them is selected for the build as
//! [`ArchCharOps`], preferring AVX2 if the target enables it. On any other target there is no
//! backend, [`SimdCharPlatform`] is the uninhabited [`NoSimdCharPlatform`] and
//! [`HAS_SIMD_CHAR_PLATFORM`] is false.

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

#[cfg(target_arch = "aarch64")]
pub mod aarch64;

/// Marker for targets without a char platform
pub mod generic;

pub use generic::NoSimdCharPlatform;

use crate::movemask::Movemask;
use crate::IgnoreNone;

/// The minimal set of char operations a backend implements with hardware intrinsics.
/// Everything else is derived generically by [`CharPlatform`].
///
/// [`CharPlatform`]: crate::CharPlatform
pub trait SimdCharOps {
    /// Type of a register holding `CARDINAL` bytes.
    type Reg: Copy;

    /// Type of a per-lane boolean vector. Each lane is all-ones (true) or all-zeros (false).
    type Logical: Copy + Movemask;

    /// Byte array of `CARDINAL` elements, the raw content of a register.
    type Array: Copy + Default + AsRef<[u8]> + AsMut<[u8]>;

    /// Number of byte lanes in a register.
    const CARDINAL: usize;

    /// Load `CARDINAL` bytes from an unaligned address.
    ///
    /// # Safety
    /// `ptr` must be valid for reads of `CARDINAL` bytes.
    unsafe fn loadu(ptr: *const u8, ignore: IgnoreNone) -> Self::Reg;

    /// The same load as [`loadu`], but without sanitizer instrumentation (with the
    /// `no-sanitize` feature on nightly). This is not a way around the memory requirements of
    /// the load: the bytes must still be allocated and readable. It only silences reports about
    /// bytes that are outside of the logically valid region, whose lanes the caller discards.
    ///
    /// # Safety
    /// `ptr` must be valid for reads of `CARDINAL` bytes.
    ///
    /// [`loadu`]: SimdCharOps::loadu
    unsafe fn unsafe_loadu(ptr: *const u8, ignore: IgnoreNone) -> Self::Reg;

    /// Lane-wise `reg[i] == x`.
    fn equal(reg: Self::Reg, x: u8) -> Self::Logical;

    /// Lane-wise `reg[i] <= x`, comparing bytes as unsigned.
    fn le_unsigned(reg: Self::Reg, x: u8) -> Self::Logical;

    /// Lane-wise logical or.
    fn logical_or(x: Self::Logical, y: Self::Logical) -> Self::Logical;

    /// Whether any lane is true.
    fn any(log: Self::Logical, ignore: IgnoreNone) -> bool;
}

/// Register type of the backend `P`.
pub type Reg<P> = <P as SimdCharOps>::Reg;

/// Logical vector type of the backend `P`.
pub type Logical<P> = <P as SimdCharOps>::Logical;

/// Compact mask type of the backend `P`.
pub type Mmask<P> = <<P as SimdCharOps>::Logical as Movemask>::Mask;

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
/// Char operations of the build target.
pub type ArchCharOps = x86_64::Avx2CharOps;

#[cfg(all(target_arch = "x86_64", not(target_feature = "avx2")))]
/// Char operations of the build target.
pub type ArchCharOps = x86_64::Sse2CharOps;

#[cfg(target_arch = "aarch64")]
/// Char operations of the build target.
pub type ArchCharOps = aarch64::NeonCharOps;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
/// The char platform of the build target.
pub type SimdCharPlatform = crate::CharPlatform<ArchCharOps>;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
/// The char platform of the build target. There is none, and the marker type offers no
/// operations, so using it does not compile.
pub type SimdCharPlatform = NoSimdCharPlatform;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
/// Register type of [`SimdCharPlatform`].
pub type SimdCharReg = Reg<ArchCharOps>;

#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
/// Logical vector type of [`SimdCharPlatform`].
pub type SimdCharLogical = Logical<ArchCharOps>;

/// Whether the build target has a char platform. Gate all uses of [`SimdCharPlatform`] on it.
pub const HAS_SIMD_CHAR_PLATFORM: bool = cfg!(any(target_arch = "x86_64", target_arch = "aarch64"));
