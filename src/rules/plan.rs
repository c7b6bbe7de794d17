use crate::{
    model::{Descriptor, NumericType},
    rules::check::{Check, Sample, check, classify},
};

/// Which side of a descriptor is platform-native.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The source is `isize`/`usize`; it is cast to the fixed type first.
    Source,
    /// The destination is `isize`/`usize`; the fixed result is cast to it.
    Target,
}

/// A fixed-width function a native conversion hands off to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delegate {
    /// The fully fixed-width pair.
    pub descriptor: Descriptor,
    /// The check that pair uses.
    pub check:      Check,
}

impl Delegate {
    fn new(from: NumericType, to: NumericType) -> Self {
        let descriptor = Descriptor::new(from, to);
        // Both sides are fixed here, so any pointer width gives the same answer.
        let check = classify(descriptor, descriptor.relation_on(64));
        Self { descriptor, check }
    }
}

/// How the fixed-width emitter writes one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Plan {
    /// Cast and report the check inline.
    Direct(Check),
    /// Branch on `INT_BITS` and call the 32- or 64-bit function.
    Native {
        /// The native side.
        side:   Side,
        /// Called when `INT_BITS == 32`.
        narrow: Delegate,
        /// Called otherwise.
        wide:   Delegate,
    },
}

/// Builds the emission plan for a descriptor.
#[must_use]
pub fn plan(descriptor: Descriptor) -> Plan {
    if let Some(check) = check(descriptor) {
        return Plan::Direct(check);
    }

    let Descriptor { from, to } = descriptor;
    if from.is_native() {
        Plan::Native { side:   Side::Source,
                       narrow: Delegate::new(from.narrow(), to),
                       wide:   Delegate::new(from.wide(), to), }
    } else {
        Plan::Native { side:   Side::Target,
                       narrow: Delegate::new(from, to.narrow()),
                       wide:   Delegate::new(from, to.wide()), }
    }
}

impl Plan {
    /// Evaluates the `ok` flag the emitted function returns for `sample` on a
    /// platform with the given pointer width.
    #[must_use]
    pub fn holds(self, descriptor: Descriptor, sample: Sample, pointer_bits: u32) -> bool {
        match self {
            Self::Direct(check) => check.holds(descriptor, sample, pointer_bits),
            Self::Native { narrow, wide, .. } => {
                let delegate = if pointer_bits == 32 { narrow } else { wide };
                delegate.check.holds(delegate.descriptor, sample, pointer_bits)
            },
        }
    }
}
