//! Endian-aware integer storage
//!
//! Each type stores an integer as its encoded bytes, with the byte order
//! fixed at the type level by an endianness marker (either `Big` or
//! `Little`). The in-memory layout is exactly the wire layout, so a value
//! can be copied to or from a byte buffer without further conversion.
//!
//! # Examples
//!
//! ```
//! use endian_codec::prelude::*;
//!
//! let be_value: U32<Big> = U32::new(0x12345678);
//! assert_eq!(be_value.to_bytes(), [0x12, 0x34, 0x56, 0x78]);
//!
//! // Create a little-endian u64 from a smaller type
//! let le_value: u64_le = u64_le::from(42u16); // alias for U64<Little>
//! assert_eq!(le_value.value(), 42);
//! ```

mod aliases;
mod conversions;

pub use aliases::*;

#[cfg(feature = "num-traits")]
mod num_traits_impl;

use core::marker::PhantomData;

use super::Endian;
use crate::codec;
use crate::error::{CodecError, Result};

// Macro to generate endian-aware integer types
macro_rules! define_endian_int {
    ($name:ident, $primitive:ty, $unsigned:ty) => {
        /// An endian-aware wrapper around a primitive integer type
        #[repr(transparent)]
        #[derive(Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $name<E: Endian> {
            bytes: [u8; core::mem::size_of::<$primitive>()],
            _endian: PhantomData<E>,
        }

        impl<E: Endian> $name<E> {
            pub const fn new(value: $primitive) -> Self {
                let mut bytes = [0u8; core::mem::size_of::<$primitive>()];
                codec::write_bits(value as $unsigned as u64, E::ENDIANNESS, &mut bytes);
                Self {
                    bytes,
                    _endian: PhantomData,
                }
            }

            pub const fn value(&self) -> $primitive {
                codec::read_bits(&self.bytes, E::ENDIANNESS) as $unsigned as $primitive
            }

            /// Wrap bytes that are already in `E` order.
            pub const fn from_bytes(bytes: [u8; core::mem::size_of::<$primitive>()]) -> Self {
                Self {
                    bytes,
                    _endian: PhantomData,
                }
            }

            /// Wrap a slice that must be exactly the width of this type.
            pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
                let bytes = bytes.try_into().map_err(|_| CodecError::LengthMismatch {
                    expected: core::mem::size_of::<$primitive>(),
                    found: bytes.len(),
                })?;
                Ok(Self::from_bytes(bytes))
            }

            pub const fn to_bytes(self) -> [u8; core::mem::size_of::<$primitive>()] {
                self.bytes
            }

            pub const fn as_bytes(&self) -> &[u8; core::mem::size_of::<$primitive>()] {
                &self.bytes
            }
        }

        impl<E: Endian> Default for $name<E> {
            fn default() -> Self {
                Self::new(0)
            }
        }

        impl<E: Endian> core::fmt::Debug for $name<E> {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_tuple(stringify!($name)).field(&self.value()).finish()
            }
        }

        // From implementation for the primitive type
        impl<E: Endian> From<$primitive> for $name<E> {
            fn from(value: $primitive) -> Self {
                Self::new(value)
            }
        }

        impl<E: Endian> From<$name<E>> for $primitive {
            fn from(value: $name<E>) -> Self {
                value.value()
            }
        }

        impl<E: Endian> AsRef<[u8]> for $name<E> {
            fn as_ref(&self) -> &[u8] {
                &self.bytes
            }
        }
    };
}

// Define all the unsigned types
define_endian_int!(U16, u16, u16);
define_endian_int!(U32, u32, u32);
define_endian_int!(U64, u64, u64);

// Define all the signed types
define_endian_int!(I16, i16, u16);
define_endian_int!(I32, i32, u32);
define_endian_int!(I64, i64, u64);
