use core::ops::{Add, Mul};

use num_traits::{
    Bounded, ConstOne, ConstZero, FromBytes, FromPrimitive, One, ToBytes, ToPrimitive, Zero,
};

use super::*;
use crate::data_type::Endianness;

// Arithmetic runs on the decoded value and re-encodes the result; overflow
// behaves exactly like the primitive.
macro_rules! impl_binop {
    ($trait:ident, $method:ident: $($t:ident => $primitive:ty),*) => {
        $(
            impl<E: Endian> $trait for $t<E> {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self::Output {
                    Self::new(self.value().$method(rhs.value()))
                }
            }
        )*
    };
}

macro_rules! impl_num_traits {
    ($($t:ident => $primitive:ty),*) => {
        $(
            impl_binop!(Add, add: $t => $primitive);
            impl_binop!(Mul, mul: $t => $primitive);

            impl<E: Endian> Zero for $t<E> {
                fn zero() -> Self {
                    Self::ZERO
                }

                fn is_zero(&self) -> bool {
                    self.as_bytes().iter().all(|byte| *byte == 0)
                }
            }

            impl<E: Endian> ConstZero for $t<E> {
                const ZERO: Self = Self::new(0);
            }

            impl<E: Endian> One for $t<E> {
                fn one() -> Self {
                    Self::ONE
                }
            }

            impl<E: Endian> ConstOne for $t<E> {
                const ONE: Self = Self::new(1);
            }

            impl<E: Endian> Bounded for $t<E> {
                fn min_value() -> Self {
                    Self::new(<$primitive>::MIN)
                }

                fn max_value() -> Self {
                    Self::new(<$primitive>::MAX)
                }
            }

            impl<E: Endian> ToPrimitive for $t<E> {
                fn to_i64(&self) -> Option<i64> {
                    self.value().to_i64()
                }

                fn to_u64(&self) -> Option<u64> {
                    self.value().to_u64()
                }

                fn to_i128(&self) -> Option<i128> {
                    self.value().to_i128()
                }

                fn to_u128(&self) -> Option<u128> {
                    self.value().to_u128()
                }
            }

            impl<E: Endian> FromPrimitive for $t<E> {
                fn from_i64(n: i64) -> Option<Self> {
                    <$primitive>::from_i64(n).map(Self::new)
                }

                fn from_u64(n: u64) -> Option<Self> {
                    <$primitive>::from_u64(n).map(Self::new)
                }
            }

            // Byte views in an explicit order, independent of `E`.
            impl<E: Endian> ToBytes for $t<E> {
                type Bytes = [u8; core::mem::size_of::<$primitive>()];

                fn to_be_bytes(&self) -> Self::Bytes {
                    codec::encode(self.value(), Endianness::Big)
                }

                fn to_le_bytes(&self) -> Self::Bytes {
                    codec::encode(self.value(), Endianness::Little)
                }
            }

            impl<E: Endian> FromBytes for $t<E> {
                type Bytes = [u8; core::mem::size_of::<$primitive>()];

                fn from_be_bytes(bytes: &Self::Bytes) -> Self {
                    Self::new(codec::decode_array::<$primitive>(*bytes, Endianness::Big))
                }

                fn from_le_bytes(bytes: &Self::Bytes) -> Self {
                    Self::new(codec::decode_array::<$primitive>(*bytes, Endianness::Little))
                }
            }
        )*
    };
}

impl_num_traits!(
    U16 => u16, U32 => u32, U64 => u64,
    I16 => i16, I32 => i32, I64 => i64
);
