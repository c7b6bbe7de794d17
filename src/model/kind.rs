use std::fmt;

/// Whether a type is a signed integer, an unsigned integer or a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// `i8` through `i64` and `isize`.
    Signed,
    /// `u8` through `u64` and `usize`.
    Unsigned,
    /// `f32` and `f64`.
    Float,
}

impl Kind {
    /// The prefix Rust uses for primitive names of this kind.
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::Signed => 'i',
            Self::Unsigned => 'u',
            Self::Float => 'f',
        }
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        !matches!(self, Self::Float)
    }
}

/// Bit width of a numeric type.
///
/// `Native` is the platform pointer width. It is only known once a target is
/// picked, so it never compares against a fixed width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    /// 8 bits.
    Bits8,
    /// 16 bits.
    Bits16,
    /// 32 bits.
    Bits32,
    /// 64 bits.
    Bits64,
    /// 32 or 64 bits depending on the platform.
    Native,
}

impl Width {
    /// The number of bits, or `None` for `Native`.
    #[must_use]
    pub const fn fixed_bits(self) -> Option<u32> {
        match self {
            Self::Bits8 => Some(8),
            Self::Bits16 => Some(16),
            Self::Bits32 => Some(32),
            Self::Bits64 => Some(64),
            Self::Native => None,
        }
    }

    /// The number of bits on a platform with the given pointer width.
    #[must_use]
    pub const fn bits(self, pointer_bits: u32) -> u32 {
        match self.fixed_bits() {
            Some(bits) => bits,
            None => pointer_bits,
        }
    }

    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(self, Self::Native)
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fixed_bits() {
            Some(bits) => write!(f, "{bits}"),
            None => write!(f, "size"),
        }
    }
}
