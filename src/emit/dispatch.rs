use crate::{
    emit::{HEADER, Options, SourceWriter, article},
    model::{NumericType, descriptor::dispatch_order},
};

/// Emits the generic dispatch module.
#[must_use]
pub fn emit(options: &Options) -> String {
    let casts = options.casts_module();
    let mut w = SourceWriter::new();

    w.line(HEADER);
    w.blank();
    w.inner_doc("Generic entry points over the checked conversions.");
    w.inner_doc("");
    w.inner_doc("`to::<T, _>(value)` picks the conversion from the value's type and the");
    w.inner_doc("requested one at compile time. The set of types is closed: `CastTo` is");
    w.inner_doc("sealed and implemented for every pair of primitive numeric types.");
    w.blank();
    w.line(&format!("use super::{casts};"));
    w.blank();

    w.open("mod sealed");
    w.line("pub trait Numeric {}");
    w.blank();
    for ty in NumericType::ALL {
        w.empty_block(&format!("impl Numeric for {ty}"));
    }
    w.close();

    w.blank();
    w.doc("A primitive that converts to `T`, reporting whether the value survived.");
    w.open("pub trait CastTo<T>: sealed::Numeric + Copy");
    w.doc("Converts `self` to `T`.");
    w.doc("");
    w.doc("The result always equals `self as T`. The flag is `false` when that cast");
    w.doc("overflowed, underflowed or lost precision.");
    w.line("fn cast_to(self) -> (T, bool);");
    w.close();

    w.blank();
    w.doc("Converts `value` to `T`, reporting whether the value survived.");
    w.doc("");
    w.doc("```");
    w.doc(&format!("let (result, ok) = {}::to::<u8, _>(-1_i32);", options.crate_ident()));
    w.doc("assert_eq!(result, u8::MAX);");
    w.doc("assert!(!ok);");
    w.doc("```");
    w.line("#[must_use]");
    w.line("#[inline]");
    w.open("pub fn to<T, F: CastTo<T>>(value: F) -> (T, bool)");
    w.line("value.cast_to()");
    w.close();

    let mut impls = 0;
    let mut current = None;
    for descriptor in dispatch_order() {
        let to = descriptor.to;
        if current != Some(to) {
            current = Some(to);
            w.blank();
            emit_entry_point(&mut w, to);
        }

        w.blank();
        w.open(&format!("impl CastTo<{to}> for {}", descriptor.from));
        w.line("#[inline]");
        w.open(&format!("fn cast_to(self) -> ({to}, bool)"));
        w.line(&format!("{casts}::{}(self)", descriptor.function_name()));
        w.close();
        w.close();
        impls += 1;
    }

    tracing::debug!(impls, "emitted generic dispatch");
    w.finish()
}

/// Writes `to_<type>`, the entry point fixed to one destination.
fn emit_entry_point(w: &mut SourceWriter, to: NumericType) {
    let name = to.rust_name();
    w.doc(&format!("Converts `value` to {} `{name}`, reporting whether the value survived.",
                   article(&name)));
    w.line("#[must_use]");
    w.line("#[inline]");
    w.open(&format!("pub fn to_{name}<F: CastTo<{name}>>(value: F) -> ({name}, bool)"));
    w.line("value.cast_to()");
    w.close();
}
