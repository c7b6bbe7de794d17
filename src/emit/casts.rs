use crate::{
    emit::{HEADER, SourceWriter, article},
    model::{Descriptor, descriptor::cast_sections},
    rules::{Delegate, Plan, Side, plan},
};

/// Lints the generated casts trip on purpose.
pub(crate) const CAST_LINTS: [&str; 9] = ["clippy::cast_lossless",
                                          "clippy::cast_possible_truncation",
                                          "clippy::cast_possible_wrap",
                                          "clippy::cast_precision_loss",
                                          "clippy::cast_sign_loss",
                                          "clippy::float_cmp",
                                          "clippy::manual_range_contains",
                                          "clippy::unnecessary_cast",
                                          "trivial_numeric_casts"];

/// Emits the fixed-width conversion module.
#[must_use]
pub fn emit() -> String {
    let mut w = SourceWriter::new();
    w.line(HEADER);
    w.blank();
    w.inner_doc("Checked conversions between every pair of primitive numeric types.");
    w.inner_doc("");
    w.inner_doc("Each function returns the result of a plain `as` cast together with a flag");
    w.inner_doc("that is `false` when the cast overflowed, underflowed or lost precision.");
    w.inner_doc("The result is produced either way.");
    w.blank();
    allow_lints(&mut w);
    w.blank();
    w.doc("Pointer width of the target, in bits.");
    w.line("const INT_BITS: u32 = usize::BITS;");

    let mut count = 0;
    for section in cast_sections() {
        w.blank();
        w.line(&format!("// {}", section.title));
        for descriptor in section.descriptors {
            w.blank();
            emit_function(&mut w, descriptor);
            count += 1;
        }
    }

    tracing::debug!(functions = count, "emitted fixed-width conversions");
    w.finish()
}

/// Writes `#![allow(...)]` for `CAST_LINTS`.
pub(crate) fn allow_lints(w: &mut SourceWriter) {
    w.line("#![allow(");
    for lint in CAST_LINTS {
        w.line(&format!("    {lint},"));
    }
    w.line(")]");
}

/// Writes the function for one descriptor.
pub(crate) fn emit_function(w: &mut SourceWriter, descriptor: Descriptor) {
    let Descriptor { from, to } = descriptor;
    let to_name = to.rust_name();

    w.doc(&format!("Converts {} `{from}` to {} `{to}`, reporting whether the value survived.",
                   article(&from.rust_name()),
                   article(&to_name)));
    w.line("#[must_use]");
    w.line("#[inline]");
    w.open(&format!("pub fn {}(value: {from}) -> ({to}, bool)", descriptor.function_name()));

    match plan(descriptor) {
        Plan::Direct(check) => {
            w.line(&format!("(value as {to}, {})", check.render(descriptor)));
        },
        Plan::Native { side: Side::Source, narrow, wide } => {
            let call = |delegate: Delegate| {
                format!("{}(value as {})",
                        delegate.descriptor.function_name(),
                        delegate.descriptor.from)
            };
            w.open("if INT_BITS == 32");
            w.line(&format!("return {};", call(narrow)));
            w.close();
            w.line(&call(wide));
        },
        Plan::Native { side: Side::Target, narrow, wide } => {
            w.open("if INT_BITS == 32");
            w.line(&format!("let (result, ok) = {}(value);", narrow.descriptor.function_name()));
            w.line(&format!("return (result as {to}, ok);"));
            w.close();
            w.line(&format!("let (result, ok) = {}(value);", wide.descriptor.function_name()));
            w.line(&format!("(result as {to}, ok)"));
        },
    }

    w.close();
}
