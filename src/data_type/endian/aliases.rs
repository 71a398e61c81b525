//! Type aliases for endian-aware integer types
//!
//! Each type has both big-endian (`_be`) and little-endian (`_le`) variants,
//! named after the primitive they store (`u32_be` is `U32<Big>`).
#![allow(non_camel_case_types)]

use super::{I16, I32, I64, U16, U32, U64};
use crate::data_type::{Big, Little};

macro_rules! endian_aliases {
    ($($name:ident => $primitive:ident),*) => {
        paste::paste! {
            $(
                pub type [<$primitive _be>] = $name<Big>;
                pub type [<$primitive _le>] = $name<Little>;
            )*
        }
    };
}

endian_aliases!(
    U16 => u16, U32 => u32, U64 => u64,
    I16 => i16, I32 => i32, I64 => i64
);
