use crate::emit::{HEADER, Options, SourceWriter};

/// Emits `lib.rs` for the generated crate.
#[must_use]
pub fn emit(options: &Options) -> String {
    let casts = options.casts_module();
    let dispatch = options.dispatch_module();
    let mut w = SourceWriter::new();

    w.line(HEADER);
    w.blank();
    w.inner_doc("Checked numeric casts between every pair of primitive numeric types.");
    w.inner_doc("");
    w.inner_doc("Every conversion returns the result of a plain `as` cast together with a");
    w.inner_doc("flag that is `false` when the cast overflowed, underflowed or lost");
    w.inner_doc("precision.");
    w.inner_doc("");
    w.inner_doc("```");
    w.inner_doc(&format!("let (value, ok) = {}::to::<u8, _>(300_i32);", options.crate_ident()));
    w.inner_doc("assert_eq!(value, 44);");
    w.inner_doc("assert!(!ok);");
    w.inner_doc("");
    w.inner_doc(&format!("let (value, ok) = {}::i32_to_i64(1);", options.crate_ident()));
    w.inner_doc("assert_eq!(value, 1);");
    w.inner_doc("assert!(ok);");
    w.inner_doc("```");
    w.blank();
    w.line(&format!("mod {casts};"));
    w.line(&format!("mod {dispatch};"));
    w.blank();
    w.line(&format!("pub use {casts}::*;"));
    w.line(&format!("pub use {dispatch}::*;"));

    w.finish()
}
