use crate::{
    model::{Descriptor, NumericType, Relation},
    rules::check::Sample,
    util::num::{MAX_F32, int_to_float, to_float_width},
};

/// A source value a boundary test feeds into a conversion.
///
/// Values are described relative to the destination type so they render as
/// portable Rust expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeValue {
    /// `1`, representable everywhere.
    One,
    /// `-1`, for signed and float sources.
    MinusOne,
    /// One past the destination's maximum: `To::MAX as From + 1`.
    PastMax,
    /// One past the destination's minimum: `To::MIN as From - 1`.
    PastMin,
    /// Twice the destination's maximum, for float sources.
    DoubleMax,
    /// The largest finite value of the (float) source.
    SourceMax,
}

/// One assertion in an emitted test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// The value converted.
    pub value:         ProbeValue,
    /// The `ok` flag the conversion must report.
    pub safe:          bool,
    /// Restricts the assertion to targets with this pointer width.
    pub pointer_width: Option<u32>,
}

impl Probe {
    #[must_use]
    pub const fn new(value: ProbeValue, safe: bool) -> Self {
        Self { value, safe, pointer_width: None }
    }

    /// An assertion compiled only where `target_pointer_width` matches.
    #[must_use]
    pub const fn gated(pointer_bits: u32, value: ProbeValue, safe: bool) -> Self {
        Self { value, safe, pointer_width: Some(pointer_bits) }
    }

    /// Whether the assertion runs on a target with the given pointer width.
    #[must_use]
    pub fn applies_to(self, pointer_bits: u32) -> bool {
        self.pointer_width.is_none_or(|bits| bits == pointer_bits)
    }
}

impl ProbeValue {
    /// Renders the value as a Rust expression of the source type.
    #[must_use]
    pub fn render(self, descriptor: Descriptor) -> String {
        let Descriptor { from, to } = descriptor;
        match (self, from.is_float()) {
            (Self::One, false) => "1".to_string(),
            (Self::One, true) => "1.0".to_string(),
            (Self::MinusOne, false) => "-1".to_string(),
            (Self::MinusOne, true) => "-1.0".to_string(),
            (Self::PastMax, _) => format!("{to}::MAX as {from} + 1"),
            (Self::PastMin, _) => format!("{to}::MIN as {from} - 1"),
            (Self::DoubleMax, _) => format!("{to}::MAX as {from} * 2.0"),
            (Self::SourceMax, _) => format!("{from}::MAX"),
        }
    }

    /// The numeric value the rendered expression evaluates to on a platform
    /// with the given pointer width.
    #[must_use]
    pub fn sample(self, descriptor: Descriptor, pointer_bits: u32) -> Sample {
        let Descriptor { from, to } = descriptor;
        let float_bits = from.bits(pointer_bits);
        let max = to.max_value(pointer_bits).unwrap_or_default();
        let min = to.min_value(pointer_bits).unwrap_or_default();

        match (self, from.is_float()) {
            (Self::One, false) => Sample::Int(1),
            (Self::One, true) => Sample::Float(1.0),
            (Self::MinusOne, false) => Sample::Int(-1),
            (Self::MinusOne, true) => Sample::Float(-1.0),
            (Self::PastMax, _) => Sample::Int(max + 1),
            (Self::PastMin, _) => Sample::Int(min - 1),
            (Self::DoubleMax, _) => {
                Sample::Float(to_float_width(int_to_float(max, float_bits) * 2.0, float_bits))
            },
            (Self::SourceMax, _) => {
                Sample::Float(if float_bits == 32 { MAX_F32 } else { f64::MAX })
            },
        }
    }
}

/// The probes the emitted test for a descriptor asserts, in order.
///
/// Every test checks `1`. Signed and float sources also check `-1`. Integer
/// pairs get the boundary one past the destination's range; when the width
/// relation depends on the platform, each boundary is gated on the pointer
/// width it was derived for. Float sources get a value twice the
/// destination's maximum.
#[must_use]
pub fn probes(descriptor: Descriptor) -> Vec<Probe> {
    let Descriptor { from, to } = descriptor;
    let mut probes = vec![Probe::new(ProbeValue::One, true)];

    if !from.is_unsigned() {
        probes.push(Probe::new(ProbeValue::MinusOne, !to.is_unsigned()));
    }

    if from.is_float() {
        if to.is_integer() {
            probes.push(Probe::new(ProbeValue::DoubleMax, false));
        } else if from == NumericType::F64 && to == NumericType::F32 {
            probes.push(Probe::new(ProbeValue::SourceMax, false));
        }
        return probes;
    }

    if to.is_float() || descriptor.is_identity() {
        return probes;
    }

    match descriptor.portable_relation() {
        Relation::Platform => {
            for pointer_bits in [32, 64] {
                let resolved = Descriptor::new(from.resolve(pointer_bits), to.resolve(pointer_bits));
                for value in boundaries(descriptor, resolved.relation()) {
                    probes.push(Probe::gated(pointer_bits, value, false));
                }
            }
        },
        relation => {
            for value in boundaries(descriptor, relation) {
                probes.push(Probe::new(value, false));
            }
        },
    }

    probes
}

/// The out-of-range values for an integer pair with a known width relation.
fn boundaries(descriptor: Descriptor, relation: Relation) -> Vec<ProbeValue> {
    let Descriptor { from, to } = descriptor;
    let mut values = Vec::new();
    let past_max = relation == Relation::Narrowing
                   || (relation == Relation::Equal && from.is_unsigned() && to.is_signed());
    if past_max {
        values.push(ProbeValue::PastMax);
    }
    if relation == Relation::Narrowing && from.is_signed() && to.is_signed() {
        values.push(ProbeValue::PastMin);
    }
    values
}
