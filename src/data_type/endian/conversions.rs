//! Conversions between endian-aware storage and primitive types of other widths

use super::*;

use core::num::TryFromIntError;

// Lossless widening: any primitive that fits goes through the storage's own
// primitive type.
macro_rules! impl_from_smaller {
    ($to:ident, $to_primitive:ty: $($from:ty),*) => {
        $(
            impl<E: Endian> From<$from> for $to<E> {
                fn from(value: $from) -> Self {
                    Self::new(<$to_primitive>::from(value))
                }
            }
        )*
    };
}

// Potentially lossy: out of range values are rejected, never truncated.
macro_rules! impl_try_from {
    ($to:ident, $to_primitive:ty: $($from:ty),*) => {
        $(
            impl<E: Endian> TryFrom<$from> for $to<E> {
                type Error = TryFromIntError;

                fn try_from(value: $from) -> core::result::Result<Self, Self::Error> {
                    <$to_primitive>::try_from(value).map(Self::new)
                }
            }
        )*
    };
}

impl_from_smaller!(U16, u16: u8);
impl_from_smaller!(U32, u32: u8, u16);
impl_from_smaller!(U64, u64: u8, u16, u32);
impl_from_smaller!(I16, i16: i8, u8);
impl_from_smaller!(I32, i32: i8, i16, u8, u16);
impl_from_smaller!(I64, i64: i8, i16, i32, u8, u16, u32);

impl_try_from!(U16, u16: u32, u64, i16, i32, i64);
impl_try_from!(U32, u32: u64, i16, i32, i64);
impl_try_from!(U64, u64: i16, i32, i64);
impl_try_from!(I16, i16: u16, u32, u64, i32, i64);
impl_try_from!(I32, i32: u32, u64, i64);
impl_try_from!(I64, i64: u64);
