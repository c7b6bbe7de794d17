use castgen::{
    model::{
        Descriptor, NumericType, Relation,
        descriptor::{cast_order, test_order},
    },
    rules::{Sample, plan, probes},
    util::num::{MAX_F32, fits, float_fits, int_to_float, to_float_width},
};

const POINTER_WIDTHS: [u32; 2] = [32, 64];

fn holds(descriptor: Descriptor, sample: Sample, pointer_bits: u32) -> bool {
    plan(descriptor).holds(descriptor, sample, pointer_bits)
}

/// Values around both ends of both types, kept to those the source can hold.
fn integer_samples(descriptor: Descriptor, pointer_bits: u32) -> Vec<i128> {
    let Descriptor { from, to } = descriptor;
    let mut edges = vec![-1, 0, 1, 100, 200, -100];
    for ty in [from, to] {
        let min = ty.min_value(pointer_bits).unwrap_or_default();
        let max = ty.max_value(pointer_bits).unwrap_or_default();
        edges.extend([min - 1, min, min + 1, max - 1, max, max + 1]);
    }

    let bits = from.bits(pointer_bits);
    edges.into_iter()
         .filter(|&v| fits(v, bits, from.is_signed()))
         .collect()
}

fn float_samples(descriptor: Descriptor, pointer_bits: u32) -> Vec<f64> {
    let Descriptor { from, to } = descriptor;
    let float_bits = from.bits(pointer_bits);
    let mut samples = vec![0.0, 0.5, -0.5, 1.0, -1.0, f64::INFINITY, f64::NEG_INFINITY];
    if let (Some(min), Some(max)) = (to.min_value(pointer_bits), to.max_value(pointer_bits)) {
        for edge in [min - 1, min, max, max + 1] {
            samples.push(int_to_float(edge, float_bits));
        }
        samples.push(int_to_float(max, float_bits) * 2.0);
    }
    samples.into_iter()
           .map(|v| to_float_width(v, float_bits))
           .collect()
}

#[test]
fn integer_conversions_are_safe_exactly_when_the_value_fits() {
    for descriptor in cast_order() {
        let Descriptor { from, to } = descriptor;
        if !from.is_integer() || !to.is_integer() {
            continue;
        }
        for pointer_bits in POINTER_WIDTHS {
            for value in integer_samples(descriptor, pointer_bits) {
                let expected = fits(value, to.bits(pointer_bits), to.is_signed());
                assert_eq!(holds(descriptor, Sample::Int(value), pointer_bits),
                           expected,
                           "{descriptor} with {value} on {pointer_bits}-bit");
            }
        }
    }
}

#[test]
fn widening_within_a_signedness_is_always_safe() {
    for descriptor in cast_order() {
        let Descriptor { from, to } = descriptor;
        let same_kind = from.kind == to.kind && from.is_integer();
        if !same_kind || descriptor.relation() == Relation::Narrowing {
            continue;
        }
        for pointer_bits in POINTER_WIDTHS {
            if descriptor.relation_on(pointer_bits) == Relation::Narrowing {
                continue;
            }
            for value in integer_samples(descriptor, pointer_bits) {
                assert!(holds(descriptor, Sample::Int(value), pointer_bits),
                        "{descriptor} with {value} on {pointer_bits}-bit");
            }
        }
    }
}

#[test]
fn negative_values_never_convert_to_unsigned() {
    for descriptor in cast_order() {
        let Descriptor { from, to } = descriptor;
        if !to.is_unsigned() {
            continue;
        }
        for pointer_bits in POINTER_WIDTHS {
            let sample = if from.is_signed() {
                Sample::Int(-1)
            } else if from.is_float() {
                Sample::Float(-1.0)
            } else {
                continue;
            };
            assert!(!holds(descriptor, sample, pointer_bits), "{descriptor}");
        }
    }
}

#[test]
fn float_to_integer_never_reports_a_lossy_cast_as_safe() {
    for descriptor in cast_order() {
        let Descriptor { from, to } = descriptor;
        if !from.is_float() || !to.is_integer() {
            continue;
        }
        for pointer_bits in POINTER_WIDTHS {
            let bits = to.bits(pointer_bits);
            for value in float_samples(descriptor, pointer_bits) {
                let safe = holds(descriptor, Sample::Float(value), pointer_bits);
                let fits = float_fits(value, bits, to.is_signed());
                if value.fract() == 0.0 {
                    assert_eq!(safe, fits, "{descriptor} with {value} on {pointer_bits}-bit");
                } else {
                    assert!(!safe || fits, "{descriptor} with {value} on {pointer_bits}-bit");
                }
            }
            assert!(!holds(descriptor, Sample::Float(f64::NAN), pointer_bits), "{descriptor}");
        }
    }
}

#[test]
fn narrowing_floats_stay_finite() {
    let descriptor = Descriptor::new(NumericType::F64, NumericType::F32);
    for value in [0.0, -1.0, MAX_F32, -MAX_F32, f64::MAX, f64::MIN, f64::INFINITY, f64::NAN] {
        let expected = value.abs() <= MAX_F32;
        assert_eq!(holds(descriptor, Sample::Float(value), 64), expected, "{value}");
    }
}

#[test]
fn integers_always_convert_to_floats() {
    for descriptor in cast_order() {
        if descriptor.from.is_integer() && descriptor.to.is_float() {
            for pointer_bits in POINTER_WIDTHS {
                for value in integer_samples(descriptor, pointer_bits) {
                    assert!(holds(descriptor, Sample::Int(value), pointer_bits));
                }
            }
        }
    }
}

#[test]
fn platform_bounds_are_checked_where_they_exist() {
    let mut gated = 0;
    for descriptor in test_order() {
        for probe in probes(descriptor) {
            let Some(pointer_bits) = probe.pointer_width else { continue };
            let Sample::Int(value) = probe.value.sample(descriptor, pointer_bits) else {
                panic!("{descriptor}: platform bounds are integers");
            };
            let from = descriptor.from;
            assert!(fits(value, from.bits(pointer_bits), from.is_signed()),
                    "{descriptor}: {value} is not a {from} on {pointer_bits}-bit");
            assert!(!probe.safe);
            gated += 1;
        }
    }
    assert_eq!(gated, 14);
}

#[test]
fn documented_examples() {
    let i16_to_u32 = Descriptor::new(NumericType::I16, NumericType::U32);
    assert!(!holds(i16_to_u32, Sample::Int(-1), 64));

    let u8_to_i8 = Descriptor::new(NumericType::U8, NumericType::I8);
    assert!(!holds(u8_to_i8, Sample::Int(200), 64));

    let i32_to_i64 = Descriptor::new(NumericType::I32, NumericType::I64);
    assert!(holds(i32_to_i64, Sample::Int(1), 64));
}

#[test]
fn emitted_probes_agree_with_the_rule_table() {
    for descriptor in test_order() {
        for probe in probes(descriptor) {
            for pointer_bits in POINTER_WIDTHS {
                if !probe.applies_to(pointer_bits) {
                    continue;
                }
                let sample = probe.value.sample(descriptor, pointer_bits);
                assert_eq!(holds(descriptor, sample, pointer_bits),
                           probe.safe,
                           "{descriptor}: {} on {pointer_bits}-bit",
                           probe.value.render(descriptor));
            }
        }
    }
}
