//! Endianness-aware conversion between fixed-width integers and bytes.
//!
//! `u16`, `i16`, `u32`, `i32`, `u64` and `i64` can be split into their
//! bytes in big- or little-endian order and rebuilt from them. Every byte is
//! computed arithmetically, so results are identical on every host.
//!
//! ```
//! use endian_codec::prelude::*;
//!
//! let bytes = encode(0x1234567890ABCDEFu64, Endianness::Little);
//! assert_eq!(bytes, [0xEF, 0xCD, 0xAB, 0x90, 0x78, 0x56, 0x34, 0x12]);
//! assert_eq!(decode::<u64>(&bytes, Endianness::Little), Ok(0x1234567890ABCDEF));
//!
//! // Width and signedness chosen at runtime
//! let value = IntegerValue::decode(&[0xFF, 0xFF], BitWidth::W16, true, Endianness::Big)?;
//! assert_eq!(value, IntegerValue::I16(-1));
//! # Ok::<(), CodecError>(())
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
extern crate std;

pub mod codec;
pub mod data_type;
pub mod error;
pub mod traits;

pub mod prelude {
    pub use crate::codec::{decode, decode_array, encode, encode_into};
    pub use crate::data_type::*;
    pub use crate::error::{CodecError, Result};
    pub use crate::traits::CodecInt;
}
