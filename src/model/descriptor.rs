use std::fmt;

use crate::model::numeric::NumericType;

/// An ordered `(from, to)` pair the generator emits a conversion for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Descriptor {
    /// Source type.
    pub from: NumericType,
    /// Destination type.
    pub to:   NumericType,
}

/// How the widths of a descriptor compare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// The destination has fewer bits than the source.
    Narrowing,
    /// Both sides have the same number of bits.
    Equal,
    /// The destination has more bits than the source.
    Widening,
    /// Exactly one side is platform-native, so the comparison depends on the
    /// target.
    Platform,
}

impl Descriptor {
    #[must_use]
    pub const fn new(from: NumericType, to: NumericType) -> Self {
        Self { from, to }
    }

    /// Compares the widths of both sides without knowing the platform.
    ///
    /// Two native types always compare `Equal`.
    #[must_use]
    pub fn relation(self) -> Relation {
        match (self.from.fixed_bits(), self.to.fixed_bits()) {
            (Some(from), Some(to)) => Self::compare(from, to),
            (None, None) => Relation::Equal,
            _ => Relation::Platform,
        }
    }

    /// Compares the widths of both sides on a platform with the given pointer
    /// width.
    #[must_use]
    pub const fn relation_on(self, pointer_bits: u32) -> Relation {
        Self::compare(self.from.bits(pointer_bits), self.to.bits(pointer_bits))
    }

    /// The relation every supported platform agrees on.
    ///
    /// Falls back to `Platform` when 32- and 64-bit targets disagree, e.g.
    /// `i64 -> isize` narrows on one and keeps its width on the other.
    #[must_use]
    pub fn portable_relation(self) -> Relation {
        match self.relation() {
            Relation::Platform => {
                let narrow = self.relation_on(32);
                if narrow == self.relation_on(64) { narrow } else { Relation::Platform }
            },
            relation => relation,
        }
    }

    const fn compare(from: u32, to: u32) -> Relation {
        if from > to {
            Relation::Narrowing
        } else if from == to {
            Relation::Equal
        } else {
            Relation::Widening
        }
    }

    /// The name of the emitted fixed-width function, e.g. `i16_to_u32`.
    #[must_use]
    pub fn function_name(self) -> String {
        format!("{}_to_{}", self.from, self.to)
    }

    /// Whether both sides are the same type.
    #[must_use]
    pub fn is_identity(self) -> bool {
        self.from == self.to
    }
}

impl fmt::Display for Descriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

fn cross(from: &[NumericType], to: &[NumericType]) -> impl Iterator<Item = Descriptor> {
    from.iter()
        .flat_map(move |&from| to.iter().map(move |&to| Descriptor::new(from, to)))
}

/// A titled group of descriptors in the fixed-width file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// One-line heading emitted above the group.
    pub title:       &'static str,
    /// The descriptors in emission order.
    pub descriptors: Vec<Descriptor>,
}

/// The fixed-width file's sections, in order.
///
/// Fixed integers first, then the native bridges, then floats, so related
/// functions sit next to each other in the output.
#[must_use]
pub fn cast_sections() -> Vec<Section> {
    let fixed = &NumericType::FIXED_INTEGERS;
    let native = &NumericType::NATIVE_INTEGERS;
    let floats = &NumericType::FLOATS;

    let mut float_ints = Vec::new();
    for float in NumericType::FLOATS {
        for int in NumericType::INTEGERS {
            float_ints.push(Descriptor::new(float, int));
            float_ints.push(Descriptor::new(int, float));
        }
    }

    vec![Section { title:       "Fixed-width integers.",
                   descriptors: cross(fixed, fixed).collect(), },
         Section { title:       "Fixed-width to platform-native integers.",
                   descriptors: cross(fixed, native).collect(), },
         Section { title:       "Platform-native to fixed-width integers.",
                   descriptors: cross(native, fixed).collect(), },
         Section { title:       "Platform-native integers.",
                   descriptors: cross(native, native).collect(), },
         Section { title:       "Floats and integers.",
                   descriptors: float_ints, },
         Section { title:       "Floats.",
                   descriptors: cross(floats, floats).collect(), }]
}

/// Every descriptor, in the order the fixed-width file lists its functions.
#[must_use]
pub fn cast_order() -> Vec<Descriptor> {
    cast_sections().into_iter()
                   .flat_map(|section| section.descriptors)
                   .collect()
}

/// Every descriptor grouped by destination, then by source.
#[must_use]
pub fn dispatch_order() -> Vec<Descriptor> {
    NumericType::ALL.into_iter()
                    .flat_map(|to| {
                        NumericType::ALL.into_iter()
                                        .map(move |from| Descriptor::new(from, to))
                    })
                    .collect()
}

/// Every descriptor grouped by source, then by destination.
#[must_use]
pub fn test_order() -> Vec<Descriptor> {
    cross(&NumericType::ALL, &NumericType::ALL).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_order_is_the_full_cross_product() {
        for order in [cast_order(), dispatch_order(), test_order()] {
            assert_eq!(order.len(), 144);
            let unique: HashSet<Descriptor> = order.into_iter().collect();
            assert_eq!(unique.len(), 144);
        }
    }

    #[test]
    fn relations() {
        let narrowing = Descriptor::new(NumericType::I32, NumericType::U8);
        let native = Descriptor::new(NumericType::ISIZE, NumericType::USIZE);
        let bridge = Descriptor::new(NumericType::I64, NumericType::ISIZE);

        assert_eq!(narrowing.relation(), Relation::Narrowing);
        assert_eq!(native.relation(), Relation::Equal);
        assert_eq!(bridge.relation(), Relation::Platform);
        assert_eq!(bridge.relation_on(32), Relation::Narrowing);
        assert_eq!(bridge.relation_on(64), Relation::Equal);
        assert_eq!(bridge.portable_relation(), Relation::Platform);

        let always_narrow = Descriptor::new(NumericType::USIZE, NumericType::U16);
        assert_eq!(always_narrow.relation(), Relation::Platform);
        assert_eq!(always_narrow.portable_relation(), Relation::Narrowing);
    }

    #[test]
    fn function_names() {
        let d = Descriptor::new(NumericType::ISIZE, NumericType::F64);
        assert_eq!(d.function_name(), "isize_to_f64");
        assert_eq!(d.to_string(), "isize -> f64");
    }
}
