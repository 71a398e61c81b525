mod endian;
mod value;

pub use endian::*;
pub use value::*;

use core::fmt::Debug;

/// The order in which the bytes of a multi-byte integer are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endianness {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

impl Endianness {
    /// Byte order of the compilation target.
    ///
    /// The codec never consults this; it exists for callers that need to
    /// talk about the host's order (e.g. "is this file in native order?").
    //Assumption: All targets are either little or big endian.
    pub const NATIVE: Endianness = if cfg!(target_endian = "big") {
        Endianness::Big
    } else {
        Endianness::Little
    };

    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::NATIVE),
            (Endianness::Big, Endianness::Big) | (Endianness::Little, Endianness::Little)
        )
    }

    /// The opposite byte order.
    pub const fn reverse(self) -> Endianness {
        match self {
            Endianness::Big => Endianness::Little,
            Endianness::Little => Endianness::Big,
        }
    }
}

/// Bit width of one of the supported integer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BitWidth {
    W16,
    W32,
    W64,
}

impl BitWidth {
    pub const fn bits(self) -> u32 {
        match self {
            BitWidth::W16 => 16,
            BitWidth::W32 => 32,
            BitWidth::W64 => 64,
        }
    }

    /// Length of the encoded byte sequence for this width.
    pub const fn bytes(self) -> usize {
        self.bits() as usize / 8
    }

    pub const fn from_bits(bits: u32) -> Option<BitWidth> {
        match bits {
            16 => Some(BitWidth::W16),
            32 => Some(BitWidth::W32),
            64 => Some(BitWidth::W64),
            _ => None,
        }
    }
}

// Marker types for endianness
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Big;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Little;

/// Lifts an [`Endianness`] to the type level, so storage types can carry
/// their byte order without a runtime field.
pub trait Endian: Copy + Default + Eq + Debug {
    const ENDIANNESS: Endianness;
}

impl Endian for Big {
    const ENDIANNESS: Endianness = Endianness::Big;
}

impl Endian for Little {
    const ENDIANNESS: Endianness = Endianness::Little;
}
