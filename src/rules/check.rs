use crate::{
    model::{Descriptor, Kind, NumericType, Relation},
    util::num::{MAX_F32, int_to_float, wrap},
};

/// How a float-to-integer check compares against the target's maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperBound {
    /// `T::MAX` is exact in the float type: `value <= T::MAX as F`.
    Inclusive,
    /// `T::MAX as F` rounds up to `2^bits`, which no longer fits:
    /// `value < T::MAX as F`.
    Exclusive,
}

/// The predicate an emitted function reports as its `ok` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Every source value converts losslessly.
    Always,
    /// Casting the result back to the source type gives the original value.
    RoundTrip,
    /// The source is not negative.
    NonNegative,
    /// The source is not negative and survives the round trip.
    NonNegativeRoundTrip,
    /// The source is at most the destination's maximum. Used from unsigned
    /// to signed types that are not wider, where a round trip would accept
    /// values that come back negative.
    AtMostTargetMax,
    /// A float lies between the destination integer's minimum and maximum.
    FloatRange {
        /// How the maximum is compared.
        upper: UpperBound,
    },
    /// An `f64` lies within the finite `f32` range.
    FiniteF32,
}

/// A concrete source value to evaluate a check against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Any integer value; every supported integer fits in `i128`.
    Int(i128),
    /// Any float value; `f32` samples are stored widened.
    Float(f64),
}

/// Picks the check for a descriptor.
///
/// Returns `None` when exactly one side is a platform-native integer and the
/// other is not a float source, or when a float converts to a native integer.
/// Those pairs delegate to a fixed-width function (see `plan`).
#[must_use]
pub fn check(descriptor: Descriptor) -> Option<Check> {
    let Descriptor { from, to } = descriptor;
    let delegates = (from.is_integer() && to.is_native() && !from.is_native())
                    || (from.is_native() && !to.is_native() && to.is_integer())
                    || (from.is_float() && to.is_native());
    if delegates {
        return None;
    }
    Some(classify(descriptor, descriptor.relation()))
}

/// The rule table. `relation` must compare fixed widths, or two native ones.
pub(crate) fn classify(descriptor: Descriptor, relation: Relation) -> Check {
    let Descriptor { from, to } = descriptor;
    let narrowing = relation == Relation::Narrowing;

    match (from.kind, to.kind) {
        (Kind::Float, Kind::Float) => {
            if narrowing {
                Check::FiniteF32
            } else {
                Check::Always
            }
        },
        (Kind::Float, _) => Check::FloatRange { upper: upper_bound(from, to) },
        (_, Kind::Float) => Check::Always,
        (Kind::Signed, Kind::Signed) | (Kind::Unsigned, Kind::Unsigned) => {
            if narrowing {
                Check::RoundTrip
            } else {
                Check::Always
            }
        },
        (Kind::Unsigned, Kind::Signed) => match relation {
            Relation::Narrowing | Relation::Equal => Check::AtMostTargetMax,
            Relation::Widening | Relation::Platform => Check::Always,
        },
        (Kind::Signed, Kind::Unsigned) => {
            if narrowing {
                Check::NonNegativeRoundTrip
            } else {
                Check::NonNegative
            }
        },
    }
}

/// Whether `to::MAX` survives conversion to the float type `from` exactly.
fn upper_bound(from: NumericType, to: NumericType) -> UpperBound {
    let mantissa = if from.fixed_bits() == Some(32) { 24 } else { 53 };
    let bits = to.fixed_bits().unwrap_or(64);
    let value_bits = if to.is_signed() { bits - 1 } else { bits };
    if value_bits <= mantissa {
        UpperBound::Inclusive
    } else {
        UpperBound::Exclusive
    }
}

impl Check {
    /// Renders the check as a Rust boolean expression over `value`.
    #[must_use]
    pub fn render(self, descriptor: Descriptor) -> String {
        let Descriptor { from, to } = descriptor;
        match self {
            Self::Always => "true".to_string(),
            Self::RoundTrip => round_trip(from, to),
            Self::NonNegative => "value >= 0".to_string(),
            Self::NonNegativeRoundTrip => format!("value >= 0 && {}", round_trip(from, to)),
            Self::AtMostTargetMax => format!("value <= {to}::MAX as {from}"),
            Self::FloatRange { upper } => {
                let lower = if to.is_signed() {
                    format!("{to}::MIN as {from}")
                } else {
                    "0.0".to_string()
                };
                let op = match upper {
                    UpperBound::Inclusive => "<=",
                    UpperBound::Exclusive => "<",
                };
                format!("value >= {lower} && value {op} {to}::MAX as {from}")
            },
            Self::FiniteF32 => format!("value >= -({to}::MAX as {from}) && value <= {to}::MAX as {from}"),
        }
    }

    /// Evaluates the check the way the emitted function would.
    ///
    /// Native types take the width given by `pointer_bits`. A sample of the
    /// wrong kind for the source type never passes a conditional check.
    #[must_use]
    pub fn holds(self, descriptor: Descriptor, sample: Sample, pointer_bits: u32) -> bool {
        let Descriptor { from, to } = descriptor;
        let to_bits = to.bits(pointer_bits);
        let from_bits = from.bits(pointer_bits);

        match (self, sample) {
            (Self::Always, _) => true,
            (Self::RoundTrip, Sample::Int(value)) => {
                wrap(wrap(value, to_bits, to.is_signed()), from_bits, from.is_signed()) == value
            },
            (Self::NonNegative, Sample::Int(value)) => value >= 0,
            (Self::NonNegativeRoundTrip, Sample::Int(value)) => {
                value >= 0 && Self::RoundTrip.holds(descriptor, sample, pointer_bits)
            },
            (Self::AtMostTargetMax, Sample::Int(value)) => {
                to.max_value(pointer_bits).is_some_and(|max| value <= max)
            },
            (Self::FloatRange { upper }, Sample::Float(value)) => {
                let (Some(min), Some(max)) = (to.min_value(pointer_bits), to.max_value(pointer_bits))
                else {
                    return false;
                };
                let lower = if to.is_signed() { int_to_float(min, from_bits) } else { 0.0 };
                let upper_value = int_to_float(max, from_bits);
                let below_max = match upper {
                    UpperBound::Inclusive => value <= upper_value,
                    UpperBound::Exclusive => value < upper_value,
                };
                value >= lower && below_max
            },
            (Self::FiniteF32, Sample::Float(value)) => (-MAX_F32..=MAX_F32).contains(&value),
            _ => false,
        }
    }
}

/// `(value as To) as From == value`, the reusable overflow test.
fn round_trip(from: NumericType, to: NumericType) -> String {
    format!("(value as {to}) as {from} == value")
}
