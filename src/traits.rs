use crate::data_type::BitWidth;

mod sealed {
    pub trait Sealed {}
}

/// An integer type the codec knows how to split into bytes.
///
/// Implemented for exactly `u16`, `i16`, `u32`, `i32`, `u64` and `i64`; the
/// trait is sealed so the set stays closed.
pub trait CodecInt: sealed::Sealed + Copy + core::fmt::Debug + PartialEq {
    const WIDTH: BitWidth;
    const SIGNED: bool;

    /// The encoded form, always `[u8; Self::WIDTH.bytes()]`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default + core::fmt::Debug + PartialEq;

    /// The two's-complement bit pattern of `self`, zero-extended to 64 bits.
    fn to_bits(self) -> u64;

    /// Inverse of [`to_bits`](Self::to_bits); bits above the width are
    /// discarded.
    fn from_bits(bits: u64) -> Self;
}

/// Automates boilerplate for implementing CodecInt on built-in int types.
/// `$unsigned` is the same-width unsigned type, which fixes the bit pattern
/// before widening to u64 so signed values are not sign-extended.
macro_rules! impl_codec_int {
    ($($ty:ty => $unsigned:ty, $width:ident, $signed:literal);* $(;)?) => {
        $(
            impl sealed::Sealed for $ty {}
            impl CodecInt for $ty {
                const WIDTH: BitWidth = BitWidth::$width;
                const SIGNED: bool = $signed;
                type Bytes = [u8; core::mem::size_of::<$ty>()];

                #[inline]
                fn to_bits(self) -> u64 {
                    self as $unsigned as u64
                }

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as $unsigned as $ty
                }
            }
        )*
    };
}

impl_codec_int!(
    u16 => u16, W16, false;
    i16 => u16, W16, true;
    u32 => u32, W32, false;
    i32 => u32, W32, true;
    u64 => u64, W64, false;
    i64 => u64, W64, true;
);
