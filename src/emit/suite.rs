use crate::{
    emit::{HEADER, Options, SourceWriter, casts::allow_lints},
    model::{Descriptor, descriptor::test_order},
    rules::probes,
};

/// Emits the boundary test file.
#[must_use]
pub fn emit(options: &Options) -> String {
    let mut w = SourceWriter::new();

    w.line(HEADER);
    w.blank();
    w.inner_doc("Boundary tests for every conversion pair.");
    w.blank();
    allow_lints(&mut w);
    w.blank();
    w.line(&format!("use {}::to;", options.crate_ident()));
    w.blank();
    w.line("#[track_caller]");
    w.open("fn expect_ok<T>(result: (T, bool))");
    w.line("assert!(result.1, \"expected a lossless conversion\");");
    w.close();
    w.blank();
    w.line("#[track_caller]");
    w.open("fn expect_lossy<T>(result: (T, bool))");
    w.line("assert!(!result.1, \"expected a lossy conversion\");");
    w.close();

    let mut count = 0;
    for descriptor in test_order() {
        w.blank();
        emit_test(&mut w, descriptor);
        count += 1;
    }

    tracing::debug!(tests = count, "emitted boundary tests");
    w.finish()
}

/// Writes the test for one descriptor.
pub(crate) fn emit_test(w: &mut SourceWriter, descriptor: Descriptor) {
    let Descriptor { from, to } = descriptor;

    w.line("#[test]");
    w.open(&format!("fn {}()", descriptor.function_name()));
    for probe in probes(descriptor) {
        let expect = if probe.safe { "expect_ok" } else { "expect_lossy" };
        let value = format!("let value: {from} = {};", probe.value.render(descriptor));
        let call = format!("{expect}(to::<{to}, _>(value));");

        // The bound only exists at one pointer width and may not even
        // compile at the other.
        if let Some(bits) = probe.pointer_width {
            w.line(&format!("#[cfg(target_pointer_width = \"{bits}\")]"));
            w.open("");
            w.line(&value);
            w.line(&call);
            w.close();
        } else {
            w.line(&value);
            w.line(&call);
        }
    }
    w.close();
}

#[cfg(test)]
mod tests {
    use expect_test::expect;

    use super::*;
    use crate::model::NumericType;

    fn test_for(from: NumericType, to: NumericType) -> String {
        let mut w = SourceWriter::new();
        emit_test(&mut w, Descriptor::new(from, to));
        w.finish()
    }

    #[test]
    fn signed_narrowing_test() {
        expect![[r#"
            #[test]
            fn i32_to_i16() {
                let value: i32 = 1;
                expect_ok(to::<i16, _>(value));
                let value: i32 = -1;
                expect_ok(to::<i16, _>(value));
                let value: i32 = i16::MAX as i32 + 1;
                expect_lossy(to::<i16, _>(value));
                let value: i32 = i16::MIN as i32 - 1;
                expect_lossy(to::<i16, _>(value));
            }
        "#]].assert_eq(&test_for(NumericType::I32, NumericType::I16));
    }

    #[test]
    fn float_to_unsigned_test() {
        expect![[r#"
            #[test]
            fn f64_to_u32() {
                let value: f64 = 1.0;
                expect_ok(to::<u32, _>(value));
                let value: f64 = -1.0;
                expect_lossy(to::<u32, _>(value));
                let value: f64 = u32::MAX as f64 * 2.0;
                expect_lossy(to::<u32, _>(value));
            }
        "#]].assert_eq(&test_for(NumericType::F64, NumericType::U32));
    }

    #[test]
    fn platform_bounds_are_gated() {
        expect![[r#"
            #[test]
            fn usize_to_u32() {
                let value: usize = 1;
                expect_ok(to::<u32, _>(value));
                #[cfg(target_pointer_width = "64")]
                {
                    let value: usize = u32::MAX as usize + 1;
                    expect_lossy(to::<u32, _>(value));
                }
            }
        "#]].assert_eq(&test_for(NumericType::USIZE, NumericType::U32));
    }

    #[test]
    fn file_layout() {
        let source = emit(&Options::default());
        assert!(source.starts_with(HEADER));
        assert!(source.contains("use safecast::to;"));
        assert_eq!(source.matches("#[test]").count(), 144);
        assert!(source.ends_with("}\n"));
    }
}
