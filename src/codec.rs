//! Byte-order conversion between integers and byte sequences.
//!
//! Every byte is computed with shifts and masks on the integer's bit
//! pattern, so results never depend on the host's byte order:
//! byte `i` of the little-endian form is `(bits >> (8 * i)) & 0xFF`, and
//! the big-endian form is the same bytes in reverse index order.

use crate::data_type::Endianness;
use crate::error::{CodecError, Result};
use crate::traits::CodecInt;

/// Write the low `out.len()` bytes of `bits` into `out` in `endianness`
/// order.
///
/// # Panics
/// Panics if `out` is longer than 8 bytes.
pub(crate) const fn write_bits(bits: u64, endianness: Endianness, out: &mut [u8]) {
    let width = out.len();
    assert!(width <= 8, "at most 8 bytes fit in a u64");
    let mut i = 0;
    while i < width {
        let byte = (bits >> (i as u32 * 8)) as u8;
        match endianness {
            Endianness::Little => out[i] = byte,
            Endianness::Big => out[width - 1 - i] = byte,
        }
        i += 1;
    }
}

/// Reassemble the bit pattern stored in `src` in `endianness` order.
///
/// Bits above `8 * src.len()` are zero.
///
/// # Panics
/// Panics if `src` is longer than 8 bytes.
pub(crate) const fn read_bits(src: &[u8], endianness: Endianness) -> u64 {
    let width = src.len();
    assert!(width <= 8, "at most 8 bytes fit in a u64");
    let mut bits = 0u64;
    let mut i = 0;
    while i < width {
        let byte = match endianness {
            Endianness::Little => src[i],
            Endianness::Big => src[width - 1 - i],
        };
        bits |= (byte as u64) << (i as u32 * 8);
        i += 1;
    }
    bits
}

#[inline]
fn check_len<T: CodecInt>(found: usize, endianness: Endianness) -> Result<()> {
    let expected = T::WIDTH.bytes();
    if found != expected {
        tracing::trace!(
            expected,
            found,
            ?endianness,
            "rejecting byte sequence of the wrong length"
        );
        return Err(CodecError::LengthMismatch { expected, found });
    }
    Ok(())
}

/// Encode `value` as its bytes in `endianness` order.
///
/// ```
/// use endian_codec::prelude::*;
///
/// assert_eq!(encode(0x1234u16, Endianness::Big), [0x12, 0x34]);
/// assert_eq!(encode(0x1234u16, Endianness::Little), [0x34, 0x12]);
/// ```
pub fn encode<T: CodecInt>(value: T, endianness: Endianness) -> T::Bytes {
    let mut bytes = T::Bytes::default();
    write_bits(value.to_bits(), endianness, bytes.as_mut());
    bytes
}

/// Encode `value` into a caller-supplied buffer.
///
/// `out` must be exactly as long as `T`'s byte width; otherwise
/// [`CodecError::LengthMismatch`] is returned and `out` is left untouched.
pub fn encode_into<T: CodecInt>(value: T, endianness: Endianness, out: &mut [u8]) -> Result<()> {
    check_len::<T>(out.len(), endianness)?;
    write_bits(value.to_bits(), endianness, out);
    Ok(())
}

/// Decode a `T` from `bytes` stored in `endianness` order.
///
/// Fails with [`CodecError::LengthMismatch`] unless `bytes` is exactly as
/// long as `T`'s byte width. Input is never truncated or padded.
///
/// ```
/// use endian_codec::prelude::*;
///
/// assert_eq!(decode::<i16>(&[0xFF, 0xFF], Endianness::Big), Ok(-1));
/// assert!(decode::<u16>(&[0x01, 0x02, 0x03], Endianness::Big).is_err());
/// ```
pub fn decode<T: CodecInt>(bytes: &[u8], endianness: Endianness) -> Result<T> {
    check_len::<T>(bytes.len(), endianness)?;
    Ok(T::from_bits(read_bits(bytes, endianness)))
}

/// Decode a `T` from an array whose length is already known to be right.
pub fn decode_array<T: CodecInt>(bytes: T::Bytes, endianness: Endianness) -> T {
    T::from_bits(read_bits(bytes.as_ref(), endianness))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use proptest::prelude::*;

    use crate::data_type::Endianness::{Big, Little};

    #[test]
    fn test_big_endian_order() {
        assert_eq!(encode(0x1234u16, Big), hex!("1234"));
        assert_eq!(encode(0x12345678u32, Big), hex!("12345678"));
        assert_eq!(encode(0x1234567890ABCDEFu64, Big), hex!("1234567890ABCDEF"));
    }

    #[test]
    fn test_little_endian_order() {
        assert_eq!(encode(0x1234u16, Little), hex!("3412"));
        assert_eq!(encode(0x12345678u32, Little), hex!("78563412"));
        assert_eq!(encode(0x1234567890ABCDEFu64, Little), hex!("EFCDAB9078563412"));
    }

    #[test]
    fn test_decode_literal_bytes() {
        assert_eq!(decode::<u16>(&hex!("1234"), Big), Ok(0x1234));
        assert_eq!(decode::<u32>(&hex!("78563412"), Little), Ok(0x12345678));
        assert_eq!(
            decode::<u64>(&hex!("EFCDAB9078563412"), Little),
            Ok(0x1234567890ABCDEF)
        );
    }

    #[test]
    fn test_signed_twos_complement() {
        assert_eq!(encode(-1i16, Big), [0xFF, 0xFF]);
        assert_eq!(decode::<i16>(&[0xFF, 0xFF], Big), Ok(-1));

        assert_eq!(encode(i32::MIN, Big), hex!("80000000"));
        assert_eq!(encode(i32::MIN, Little), hex!("00000080"));
        assert_eq!(encode(-2i64, Little), hex!("FEFFFFFFFFFFFFFF"));
        assert_eq!(decode::<i64>(&hex!("FFFFFFFFFFFFFFFE"), Big), Ok(-2));
    }

    #[test]
    fn test_same_bits_different_signedness() {
        assert_eq!(decode::<u16>(&[0xFF, 0xFE], Big), Ok(0xFFFE));
        assert_eq!(decode::<i16>(&[0xFF, 0xFE], Big), Ok(-2));
    }

    #[test]
    fn test_length_mismatch() {
        assert_eq!(
            decode::<u16>(&[0x01, 0x02, 0x03], Big),
            Err(CodecError::LengthMismatch {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            decode::<i64>(&[0x01; 4], Little),
            Err(CodecError::LengthMismatch {
                expected: 8,
                found: 4
            })
        );
        assert_eq!(
            decode::<u32>(&[], Big),
            Err(CodecError::LengthMismatch {
                expected: 4,
                found: 0
            })
        );
    }

    #[test]
    #[should_panic(expected = "at most 8 bytes fit in a u64")]
    fn test_write_bits_rejects_wide_buffer() {
        let mut buf = [0u8; 9];
        write_bits(0x0102030405060708, Little, &mut buf);
    }

    #[test]
    #[should_panic(expected = "at most 8 bytes fit in a u64")]
    fn test_read_bits_rejects_wide_buffer() {
        read_bits(&[0xAA, 0, 0, 0, 0, 0, 0, 0, 0xBB], Little);
    }

    #[test]
    fn test_read_write_bits_full_width() {
        let mut buf = [0u8; 8];
        write_bits(0x0102030405060708, Little, &mut buf);
        assert_eq!(buf, hex!("0807060504030201"));
        assert_eq!(read_bits(&buf, Little), 0x0102030405060708);
    }

    #[test]
    #[cfg(feature = "std")]
    fn test_length_mismatch_message() {
        let err = decode::<u16>(&[0x01, 0x02, 0x03], Big).unwrap_err();
        assert_eq!(
            err.to_string(),
            "byte length mismatch: expected 2 bytes, found 3"
        );
    }

    #[test]
    fn test_encode_into() {
        let mut buf = [0u8; 4];
        encode_into(0x12345678u32, Little, &mut buf).unwrap();
        assert_eq!(buf, hex!("78563412"));
    }

    #[test]
    fn test_encode_into_wrong_length_leaves_buffer() {
        let mut buf = [0xAAu8; 3];
        assert_eq!(
            encode_into(0x1234u16, Big, &mut buf),
            Err(CodecError::LengthMismatch {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(buf, [0xAA; 3]);
    }

    #[test]
    fn test_read_write_bits_partial_width() {
        let mut buf = [0u8; 3];
        write_bits(0xABCDEF, Big, &mut buf);
        assert_eq!(buf, hex!("ABCDEF"));
        assert_eq!(read_bits(&buf, Big), 0xABCDEF);
        assert_eq!(read_bits(&buf, Little), 0xEFCDAB);
    }

    #[test]
    fn test_decode_array() {
        assert_eq!(decode_array::<i32>(hex!("FFFFFFFF"), Little), -1);
        assert_eq!(decode_array::<u64>(hex!("0000000000000001"), Big), 1);
    }

    fn any_endianness() -> impl Strategy<Value = Endianness> {
        prop_oneof![Just(Big), Just(Little)]
    }

    macro_rules! roundtrip_props {
        ($($name:ident: $ty:ty),*) => {
            proptest! {
                $(
                    #[test]
                    fn $name(value in any::<$ty>(), endianness in any_endianness()) {
                        let bytes = encode(value, endianness);
                        prop_assert_eq!(decode::<$ty>(bytes.as_ref(), endianness), Ok(value));

                        // Same answer as the standard library's byte conversions.
                        let expected = match endianness {
                            Big => value.to_be_bytes(),
                            Little => value.to_le_bytes(),
                        };
                        prop_assert_eq!(bytes, expected);
                    }
                )*
            }
        };
    }

    roundtrip_props!(
        prop_roundtrip_u16: u16,
        prop_roundtrip_i16: i16,
        prop_roundtrip_u32: u32,
        prop_roundtrip_i32: i32,
        prop_roundtrip_u64: u64,
        prop_roundtrip_i64: i64
    );

    proptest! {
        #[test]
        fn prop_reencode_is_identity(bytes in any::<[u8; 8]>(), endianness in any_endianness()) {
            let value = decode::<i64>(&bytes, endianness).unwrap();
            prop_assert_eq!(encode(value, endianness), bytes);

            let value = decode::<u32>(&bytes[..4], endianness).unwrap();
            prop_assert_eq!(&encode(value, endianness)[..], &bytes[..4]);

            let value = decode::<i16>(&bytes[..2], endianness).unwrap();
            prop_assert_eq!(&encode(value, endianness)[..], &bytes[..2]);
        }

        #[test]
        fn prop_opposite_orders_are_reversed(value in any::<u64>()) {
            let mut little = encode(value, Little);
            little.reverse();
            prop_assert_eq!(little, encode(value, Big));
        }
    }
}
