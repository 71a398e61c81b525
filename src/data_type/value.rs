//! Width-and-signedness selected at runtime.
//!
//! Stream readers often learn the shape of a field from a format
//! description rather than from the Rust type system. [`IntegerValue`] and
//! [`EncodedBytes`] carry that shape as data and dispatch to the same codec
//! used by the statically typed API.

use core::ops::Deref;

use super::{BitWidth, Endianness};
use crate::codec;
use crate::error::Result;
use crate::traits::CodecInt;

/// One integer of any supported width and signedness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntegerValue {
    U16(u16),
    I16(i16),
    U32(u32),
    I32(i32),
    U64(u64),
    I64(i64),
}

/// The encoded form of an [`IntegerValue`]: exactly `width().bytes()`
/// bytes, stored inline.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct EncodedBytes {
    buf: [u8; 8],
    len: u8,
}

impl EncodedBytes {
    fn from_int<T: CodecInt>(value: T, endianness: Endianness) -> Self {
        let mut buf = [0u8; 8];
        let len = T::WIDTH.bytes();
        codec::write_bits(value.to_bits(), endianness, &mut buf[..len]);
        EncodedBytes {
            buf,
            len: len as u8,
        }
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }
}

impl Deref for EncodedBytes {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for EncodedBytes {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl core::fmt::Debug for EncodedBytes {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl PartialEq<[u8]> for EncodedBytes {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_slice() == other
    }
}

impl<const N: usize> PartialEq<[u8; N]> for EncodedBytes {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

macro_rules! impl_integer_value {
    ($($variant:ident => $ty:ty),*) => {
        impl IntegerValue {
            pub const fn width(self) -> BitWidth {
                match self {
                    $(IntegerValue::$variant(_) => <$ty as CodecInt>::WIDTH,)*
                }
            }

            pub const fn is_signed(self) -> bool {
                match self {
                    $(IntegerValue::$variant(_) => <$ty as CodecInt>::SIGNED,)*
                }
            }

            /// Encode this value in `endianness` order.
            pub fn encode(self, endianness: Endianness) -> EncodedBytes {
                match self {
                    $(IntegerValue::$variant(v) => EncodedBytes::from_int(v, endianness),)*
                }
            }
        }

        $(
            impl From<$ty> for IntegerValue {
                fn from(value: $ty) -> Self {
                    IntegerValue::$variant(value)
                }
            }
        )*
    };
}

impl_integer_value!(
    U16 => u16, I16 => i16,
    U32 => u32, I32 => i32,
    U64 => u64, I64 => i64
);

impl IntegerValue {
    /// Decode a value of the given `width` and signedness from `bytes`.
    ///
    /// Fails with [`CodecError::LengthMismatch`](crate::error::CodecError::LengthMismatch)
    /// unless `bytes.len() == width.bytes()`.
    pub fn decode(
        bytes: &[u8],
        width: BitWidth,
        signed: bool,
        endianness: Endianness,
    ) -> Result<IntegerValue> {
        match (width, signed) {
            (BitWidth::W16, false) => codec::decode(bytes, endianness).map(IntegerValue::U16),
            (BitWidth::W16, true) => codec::decode(bytes, endianness).map(IntegerValue::I16),
            (BitWidth::W32, false) => codec::decode(bytes, endianness).map(IntegerValue::U32),
            (BitWidth::W32, true) => codec::decode(bytes, endianness).map(IntegerValue::I32),
            (BitWidth::W64, false) => codec::decode(bytes, endianness).map(IntegerValue::U64),
            (BitWidth::W64, true) => codec::decode(bytes, endianness).map(IntegerValue::I64),
        }
    }
}
