use super::*;
use crate::Ignore;
use proptest::prelude::*;

/// The sample buffer `AAAABCAAAAAAAAAA`, padded with `A` to the cardinal of `P`.
fn sample<P: SimdCharOps>() -> Vec<u8> {
    let mut data = b"AAAABCAAAAAAAAAA".to_vec();
    data.resize(P::CARDINAL, b'A');
    data
}

/// Compact mask with every lane true.
fn all_true<P: SimdCharOps>() -> Mmask<P> {
    let data = vec![0u8; P::CARDINAL];
    let reg = CharPlatform::<P>::load_slice(&data).unwrap();
    CharPlatform::<P>::movemask(CharPlatform::<P>::equal(reg, 0))
}

/// Whether the bit group of `lane` is completely set in `mask`.
fn lane_set<P: SimdCharOps>(mask: Mmask<P>, lane: usize) -> bool {
    let bits = CharPlatform::<P>::MMASK_BITS_PER_ELEMENT;
    (0..bits).all(|b| mask.bit(lane as u32 * bits + b))
}

fn check_loada<P: SimdCharOps>() {
    let data: Vec<u8> = (0..P::CARDINAL as u8 * 2).collect();

    for offset in [0, 1, 5, P::CARDINAL] {
        let ptr = unsafe { data.as_ptr().add(offset) };
        let reference =
            CharPlatform::<P>::to_array(unsafe { CharPlatform::<P>::loadu(ptr, IgnoreNone) });

        let aligned = unsafe { CharPlatform::<P>::loada(ptr, IgnoreNone) };
        let boundary = unsafe { CharPlatform::<P>::loada(ptr, IgnoreExtrema::new(3, 2)) };
        let tagged = unsafe { CharPlatform::<P>::loada(ptr, Ignore::None) };
        let sliced = CharPlatform::<P>::load_slice(&data[offset..]).unwrap();

        assert_eq!(reference.as_ref(), &data[offset..offset + P::CARDINAL]);
        assert_eq!(CharPlatform::<P>::to_array(aligned).as_ref(), reference.as_ref());
        assert_eq!(CharPlatform::<P>::to_array(boundary).as_ref(), reference.as_ref());
        assert_eq!(CharPlatform::<P>::to_array(tagged).as_ref(), reference.as_ref());
        assert_eq!(CharPlatform::<P>::to_array(sliced).as_ref(), reference.as_ref());
    }
}

fn check_load_slice_short<P: SimdCharOps>() {
    let data = vec![b'x'; P::CARDINAL - 1];
    assert_eq!(
        CharPlatform::<P>::load_slice(&data).err(),
        Some(SimdCharError::ShortRead {
            needed: P::CARDINAL,
            available: P::CARDINAL - 1,
        })
    );
    assert!(CharPlatform::<P>::load_slice(&[]).is_err());
}

fn check_clear<P: SimdCharOps>() {
    let cardinal = P::CARDINAL;
    let bits = CharPlatform::<P>::MMASK_BITS_PER_ELEMENT;
    let ones = all_true::<P>();
    assert_eq!(ones.count_ones(), cardinal as u32 * bits);

    assert_eq!(CharPlatform::<P>::clear(ones, IgnoreNone), ones);
    assert_eq!(CharPlatform::<P>::clear(ones, IgnoreExtrema::new(0, 0)), ones);

    let cleared = CharPlatform::<P>::clear(ones, IgnoreExtrema::new(6, 0));
    assert_ne!(cleared, <Mmask<P> as MaskInt>::ZERO);
    assert_eq!(cleared.count_ones(), (cardinal as u32 - 6) * bits);
    assert_eq!(cleared.trailing_zeros(), 6 * bits);

    let cleared = CharPlatform::<P>::clear(ones, IgnoreExtrema::new(0, 6));
    assert_eq!(cleared.count_ones(), (cardinal as u32 - 6) * bits);
    assert!(lane_set::<P>(cleared, 0));
    assert!(lane_set::<P>(cleared, cardinal - 7));
    assert!(!lane_set::<P>(cleared, cardinal - 6));

    assert_eq!(
        CharPlatform::<P>::clear(ones, IgnoreExtrema::new(cardinal, 0)),
        <Mmask<P> as MaskInt>::ZERO
    );
    assert_eq!(
        CharPlatform::<P>::clear(ones, IgnoreExtrema::new(0, cardinal)),
        <Mmask<P> as MaskInt>::ZERO
    );

    let middle = CharPlatform::<P>::clear(ones, IgnoreExtrema::new(7, cardinal - 8));
    assert_eq!(middle.count_ones(), bits);
    assert!(lane_set::<P>(middle, 7));

    let tagged = CharPlatform::<P>::clear(ones, Ignore::Extrema(IgnoreExtrema::new(2, 3)));
    assert_eq!(tagged, CharPlatform::<P>::clear(ones, IgnoreExtrema::new(2, 3)));
}

#[cfg(debug_assertions)]
fn check_clear_out_of_range<P: SimdCharOps>() {
    let result = std::panic::catch_unwind(|| {
        CharPlatform::<P>::clear(all_true::<P>(), IgnoreExtrema::new(P::CARDINAL, 1))
    });
    assert!(result.is_err());
}

fn check_any_extrema<P: SimdCharOps>() {
    let data = vec![0u8; P::CARDINAL];
    let reg = CharPlatform::<P>::load_slice(&data).unwrap();
    let all = CharPlatform::<P>::equal(reg, 0);
    let none = CharPlatform::<P>::equal(reg, 1);

    assert!(CharPlatform::<P>::any(all, IgnoreNone));
    assert!(!CharPlatform::<P>::any(none, IgnoreNone));
    assert!(!CharPlatform::<P>::any(none, IgnoreExtrema::new(0, 0)));
    assert!(CharPlatform::<P>::any(all, IgnoreExtrema::new(6, 0)));
    assert!(CharPlatform::<P>::any(all, IgnoreExtrema::new(0, P::CARDINAL - 1)));
    assert!(!CharPlatform::<P>::any(all, IgnoreExtrema::new(P::CARDINAL, 0)));
    assert!(!CharPlatform::<P>::any(all, IgnoreExtrema::new(3, P::CARDINAL - 3)));
    assert!(!CharPlatform::<P>::any(all, Ignore::Extrema(IgnoreExtrema::new(0, P::CARDINAL))));
    assert!(CharPlatform::<P>::any(all, Ignore::None));
}

fn check_sample_equal<P: SimdCharOps>()
where
    Logical<P>: Into<Reg<P>>,
{
    let data = sample::<P>();
    let bits = CharPlatform::<P>::MMASK_BITS_PER_ELEMENT;
    let reg = CharPlatform::<P>::load_slice(&data).unwrap();
    let found = CharPlatform::<P>::equal(reg, b'B');

    let lanes = CharPlatform::<P>::to_array(found.into());
    for (i, &lane) in lanes.as_ref().iter().enumerate() {
        let expected = if i == 4 { 0xFF } else { 0x00 };
        assert_eq!(lane, expected, "mismatch at lane {}", i);
    }

    let mask = CharPlatform::<P>::movemask(found);
    assert_eq!(mask.count_ones(), bits);
    assert!(lane_set::<P>(mask, 4));

    assert!(CharPlatform::<P>::any(found, IgnoreNone));
    assert!(CharPlatform::<P>::any(found, IgnoreExtrema::new(4, 0)));
    assert!(!CharPlatform::<P>::any(found, IgnoreExtrema::new(5, 0)));
    assert!(!CharPlatform::<P>::any(found, IgnoreExtrema::new(6, 0)));
    assert!(CharPlatform::<P>::any(found, IgnoreExtrema::new(0, P::CARDINAL - 5)));
    assert!(!CharPlatform::<P>::any(found, IgnoreExtrema::new(0, P::CARDINAL - 4)));

    // the match moved to lane 5
    let mut shifted = b"AAAAABAAAAAAAAAA".to_vec();
    shifted.resize(P::CARDINAL, b'A');
    let found = CharPlatform::<P>::equal(CharPlatform::<P>::load_slice(&shifted).unwrap(), b'B');
    let mask = CharPlatform::<P>::movemask(found);
    assert_eq!(mask.count_ones(), bits);
    assert_eq!(mask.trailing_zeros(), 5 * bits);
    assert!(CharPlatform::<P>::any(found, IgnoreNone));
    assert!(!CharPlatform::<P>::any(found, IgnoreExtrema::new(6, 0)));
}

fn check_sample_le_unsigned<P: SimdCharOps>()
where
    Logical<P>: Into<Reg<P>>,
{
    let data = sample::<P>();
    let reg = CharPlatform::<P>::load_slice(&data).unwrap();
    let below = CharPlatform::<P>::le_unsigned(reg, b'B');
    let mask = CharPlatform::<P>::movemask(below);

    for (i, &byte) in data.iter().enumerate() {
        assert_eq!(lane_set::<P>(mask, i), byte <= b'B', "mismatch at lane {}", i);
    }
    assert!(!lane_set::<P>(mask, 5));
    assert_eq!(
        mask.count_ones(),
        (P::CARDINAL as u32 - 1) * CharPlatform::<P>::MMASK_BITS_PER_ELEMENT
    );

    let lanes = CharPlatform::<P>::to_array(below.into());
    assert_eq!(lanes.as_ref()[4], 0xFF);
    assert_eq!(lanes.as_ref()[5], 0x00);
}

/// Compare `clear` and `any` against a lane-by-lane reference.
fn check_clear_matches_scalar<P: SimdCharOps>(data: &[u8], x: u8, first: usize, last: usize) {
    let data = &data[..P::CARDINAL];
    let first = first % (P::CARDINAL + 1);
    let last = last % (P::CARDINAL + 1 - first);
    let ignore = IgnoreExtrema::checked(first, last, P::CARDINAL).unwrap();

    let reg = CharPlatform::<P>::load_slice(data).unwrap();
    let log = CharPlatform::<P>::logical_or(
        CharPlatform::<P>::equal(reg, x),
        CharPlatform::<P>::le_unsigned(reg, x / 2),
    );
    let mask = CharPlatform::<P>::clear(CharPlatform::<P>::movemask(log), ignore);

    let mut any = false;
    for (i, &byte) in data.iter().enumerate() {
        let expected = (byte == x || byte <= x / 2) && i >= first && i < P::CARDINAL - last;
        any |= expected;
        assert_eq!(lane_set::<P>(mask, i), expected, "mismatch at lane {}", i);
    }
    assert_eq!(CharPlatform::<P>::any(log, ignore), any);
}

macro_rules! platform_tests {
    ($name:ident, $ops:ty) => {
        mod $name {
            use super::*;

            #[test]
            fn test_loada() {
                check_loada::<$ops>();
            }

            #[test]
            fn test_load_slice_short() {
                check_load_slice_short::<$ops>();
            }

            #[test]
            fn test_clear() {
                check_clear::<$ops>();
            }

            #[test]
            #[cfg(debug_assertions)]
            fn test_clear_out_of_range() {
                check_clear_out_of_range::<$ops>();
            }

            #[test]
            fn test_any_extrema() {
                check_any_extrema::<$ops>();
            }

            #[test]
            fn test_sample_equal() {
                check_sample_equal::<$ops>();
            }

            #[test]
            fn test_sample_le_unsigned() {
                check_sample_le_unsigned::<$ops>();
            }

            proptest! {
                #[test]
                fn prop_clear_matches_scalar(
                    data in proptest::collection::vec(any::<u8>(), 32),
                    x in any::<u8>(),
                    first in 0usize..64,
                    last in 0usize..64,
                ) {
                    check_clear_matches_scalar::<$ops>(&data, x, first, last);
                }
            }
        }
    };
}

#[cfg(target_arch = "x86_64")]
platform_tests!(sse2, crate::arch::x86_64::Sse2CharOps);

#[cfg(all(target_arch = "x86_64", target_feature = "avx2"))]
platform_tests!(avx2, crate::arch::x86_64::Avx2CharOps);

#[cfg(target_arch = "aarch64")]
platform_tests!(neon, crate::arch::aarch64::NeonCharOps);
