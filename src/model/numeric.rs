use std::fmt;

use crate::model::kind::{Kind, Width};

/// A primitive numeric type from the closed set the generator covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumericType {
    /// Signed, unsigned or float.
    pub kind:  Kind,
    /// Bit width, possibly platform-native.
    pub width: Width,
}

impl NumericType {
    pub const I8: Self = Self::new(Kind::Signed, Width::Bits8);
    pub const I16: Self = Self::new(Kind::Signed, Width::Bits16);
    pub const I32: Self = Self::new(Kind::Signed, Width::Bits32);
    pub const I64: Self = Self::new(Kind::Signed, Width::Bits64);
    pub const ISIZE: Self = Self::new(Kind::Signed, Width::Native);
    pub const U8: Self = Self::new(Kind::Unsigned, Width::Bits8);
    pub const U16: Self = Self::new(Kind::Unsigned, Width::Bits16);
    pub const U32: Self = Self::new(Kind::Unsigned, Width::Bits32);
    pub const U64: Self = Self::new(Kind::Unsigned, Width::Bits64);
    pub const USIZE: Self = Self::new(Kind::Unsigned, Width::Native);
    pub const F32: Self = Self::new(Kind::Float, Width::Bits32);
    pub const F64: Self = Self::new(Kind::Float, Width::Bits64);

    /// Every supported type, in the order the emitters walk them.
    pub const ALL: [Self; 12] = [Self::I8,
                                 Self::I16,
                                 Self::I32,
                                 Self::I64,
                                 Self::ISIZE,
                                 Self::U8,
                                 Self::U16,
                                 Self::U32,
                                 Self::U64,
                                 Self::USIZE,
                                 Self::F32,
                                 Self::F64];

    /// Signed and unsigned integers, native ones included.
    pub const INTEGERS: [Self; 10] = [Self::I8,
                                      Self::I16,
                                      Self::I32,
                                      Self::I64,
                                      Self::ISIZE,
                                      Self::U8,
                                      Self::U16,
                                      Self::U32,
                                      Self::U64,
                                      Self::USIZE];

    /// Integers with a width that does not depend on the platform.
    pub const FIXED_INTEGERS: [Self; 8] = [Self::I8,
                                           Self::I16,
                                           Self::I32,
                                           Self::I64,
                                           Self::U8,
                                           Self::U16,
                                           Self::U32,
                                           Self::U64];

    /// The platform-native integers.
    pub const NATIVE_INTEGERS: [Self; 2] = [Self::ISIZE, Self::USIZE];

    pub const FLOATS: [Self; 2] = [Self::F32, Self::F64];

    #[must_use]
    pub const fn new(kind: Kind, width: Width) -> Self {
        Self { kind, width }
    }

    /// The primitive's name as written in Rust source, e.g. `u16` or `isize`.
    #[must_use]
    pub fn rust_name(self) -> String {
        format!("{}{}", self.kind.prefix(), self.width)
    }

    #[must_use]
    pub const fn is_integer(self) -> bool {
        self.kind.is_integer()
    }

    #[must_use]
    pub const fn is_float(self) -> bool {
        matches!(self.kind, Kind::Float)
    }

    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self.kind, Kind::Signed)
    }

    #[must_use]
    pub const fn is_unsigned(self) -> bool {
        matches!(self.kind, Kind::Unsigned)
    }

    #[must_use]
    pub const fn is_native(self) -> bool {
        self.width.is_native()
    }

    /// The bit width, or `None` for `isize` and `usize`.
    #[must_use]
    pub const fn fixed_bits(self) -> Option<u32> {
        self.width.fixed_bits()
    }

    /// The bit width on a platform with the given pointer width.
    #[must_use]
    pub const fn bits(self, pointer_bits: u32) -> u32 {
        self.width.bits(pointer_bits)
    }

    /// The 32-bit counterpart a native type delegates to on 32-bit targets.
    ///
    /// Fixed-width types are returned unchanged.
    #[must_use]
    pub const fn narrow(self) -> Self {
        match self.width {
            Width::Native => Self::new(self.kind, Width::Bits32),
            _ => self,
        }
    }

    /// The 64-bit counterpart a native type delegates to on 64-bit targets.
    ///
    /// Fixed-width types are returned unchanged.
    #[must_use]
    pub const fn wide(self) -> Self {
        match self.width {
            Width::Native => Self::new(self.kind, Width::Bits64),
            _ => self,
        }
    }

    /// Replaces a native width with the fixed width of the given platform.
    #[must_use]
    pub const fn resolve(self, pointer_bits: u32) -> Self {
        if pointer_bits == 32 { self.narrow() } else { self.wide() }
    }

    /// The smallest value of an integer type, or `None` for floats.
    #[must_use]
    pub const fn min_value(self, pointer_bits: u32) -> Option<i128> {
        let bits = self.bits(pointer_bits);
        match self.kind {
            Kind::Signed => Some(-(1i128 << (bits - 1))),
            Kind::Unsigned => Some(0),
            Kind::Float => None,
        }
    }

    /// The largest value of an integer type, or `None` for floats.
    #[must_use]
    pub const fn max_value(self, pointer_bits: u32) -> Option<i128> {
        let bits = self.bits(pointer_bits);
        match self.kind {
            Kind::Signed => Some((1i128 << (bits - 1)) - 1),
            Kind::Unsigned => Some((1i128 << bits) - 1),
            Kind::Float => None,
        }
    }
}

impl fmt::Display for NumericType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.prefix(), self.width)
    }
}
