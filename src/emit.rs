use std::path::PathBuf;

use crate::{error::ConfigError, model::NumericType};

/// Fixed-width conversion functions.
///
/// Emits one `from_to_to` function per descriptor, in the order of
/// `model::descriptor::cast_sections`. Each returns the plain `as` cast and
/// the check the rule table picked, or delegates to the 32- or 64-bit
/// function when one side is platform-native.
pub mod casts;
/// Generic entry points.
///
/// Emits the sealed `CastTo<T>` trait, one impl per pair and the `to` and
/// `to_<type>` functions that dispatch through it at compile time.
pub mod dispatch;
/// The crate root wiring the generated modules together.
pub mod root;
/// Boundary tests.
///
/// Emits one integration test per pair asserting the probes from
/// `rules::probes` through the generic entry point.
pub mod suite;
/// An indenting line buffer the emitters write through.
pub mod writer;

pub use writer::SourceWriter;

/// First line of every generated file.
pub const HEADER: &str = "// Code generated by castgen. DO NOT EDIT.";

/// Rust keywords that cannot name a crate or module.
const KEYWORDS: [&str; 52] = ["Self", "abstract", "as", "async", "await", "become", "box",
                              "break", "const", "continue", "crate", "do", "dyn", "else",
                              "enum", "extern", "false", "final", "fn", "for", "gen", "if",
                              "impl", "in", "let", "loop", "macro", "match", "mod", "move",
                              "mut", "override", "priv", "pub", "ref", "return", "self",
                              "static", "struct", "super", "trait", "true", "try", "type",
                              "typeof", "unsafe", "unsized", "use", "virtual", "where",
                              "while", "yield"];

/// The names the generated files use for themselves and each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    crate_name:      String,
    casts_module:    String,
    dispatch_module: String,
}

impl Default for Options {
    fn default() -> Self {
        Self { crate_name:      "safecast".to_string(),
               casts_module:    "casts".to_string(),
               dispatch_module: "generics".to_string(), }
    }
}

impl Options {
    /// Validates and builds a set of options.
    ///
    /// `crate_name` may use `-` like a Cargo package name; the generated
    /// tests import it with `_` instead.
    ///
    /// # Errors
    /// Returns a `ConfigError` if a name is not a usable identifier, or if
    /// the two module names collide with each other, with `lib`, or with an
    /// item the generated crate defines (`to`, `to_<type>`, `CastTo`,
    /// `sealed`).
    pub fn new(crate_name: &str,
               casts_module: &str,
               dispatch_module: &str)
               -> Result<Self, ConfigError> {
        validate_identifier("crate name", &crate_name.replace('-', "_"))?;
        validate_identifier("casts module", casts_module)?;
        validate_identifier("dispatch module", dispatch_module)?;

        for name in [casts_module, dispatch_module] {
            if name == "lib" || name == "main" || is_emitted_item(name) {
                return Err(ConfigError::ModuleClash { name: name.to_string() });
            }
        }
        if casts_module == dispatch_module {
            return Err(ConfigError::ModuleClash { name: casts_module.to_string() });
        }

        Ok(Self { crate_name:      crate_name.to_string(),
                  casts_module:    casts_module.to_string(),
                  dispatch_module: dispatch_module.to_string(), })
    }

    /// The crate name as written in Cargo.toml.
    #[must_use]
    pub fn crate_name(&self) -> &str {
        &self.crate_name
    }

    /// The crate name as written in a `use` path.
    #[must_use]
    pub fn crate_ident(&self) -> String {
        self.crate_name.replace('-', "_")
    }

    #[must_use]
    pub fn casts_module(&self) -> &str {
        &self.casts_module
    }

    #[must_use]
    pub fn dispatch_module(&self) -> &str {
        &self.dispatch_module
    }
}

/// Whether `name` is an item the dispatch module defines or re-exports
/// at the crate root, which a module of the same name would shadow.
fn is_emitted_item(name: &str) -> bool {
    matches!(name, "sealed" | "to" | "CastTo")
    || name.strip_prefix("to_")
           .is_some_and(|ty| NumericType::ALL.iter().any(|t| t.rust_name() == ty))
}

fn validate_identifier(role: &'static str, name: &str) -> Result<(), ConfigError> {
    let mut chars = name.chars();
    let valid_start = chars.next()
                           .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
    let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !valid_start || !valid_rest || name == "_" {
        return Err(ConfigError::InvalidIdentifier { role,
                                                    name: name.to_string() });
    }
    if KEYWORDS.contains(&name) {
        return Err(ConfigError::ReservedIdentifier { role,
                                                     name: name.to_string() });
    }
    Ok(())
}

/// One generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// The fixed-width conversion functions.
    Casts,
    /// The generic entry points.
    Dispatch,
    /// The boundary tests.
    Tests,
    /// The crate root.
    Root,
}

impl Target {
    /// Every target, in the order `write_tree` writes them.
    pub const ALL: [Self; 4] = [Self::Root, Self::Casts, Self::Dispatch, Self::Tests];

    /// Where the file lives relative to the generated crate's root.
    #[must_use]
    pub fn relative_path(self, options: &Options) -> PathBuf {
        match self {
            Self::Casts => PathBuf::from("src").join(format!("{}.rs", options.casts_module)),
            Self::Dispatch => PathBuf::from("src").join(format!("{}.rs", options.dispatch_module)),
            Self::Tests => PathBuf::from("tests").join(format!("{}.rs", options.casts_module)),
            Self::Root => PathBuf::from("src").join("lib.rs"),
        }
    }
}

/// Generates the full text of one file.
///
/// The output depends only on `target` and `options`, so repeated calls are
/// byte-identical.
#[must_use]
pub fn generate(target: Target, options: &Options) -> String {
    match target {
        Target::Casts => casts::emit(),
        Target::Dispatch => dispatch::emit(options),
        Target::Tests => suite::emit(options),
        Target::Root => root::emit(options),
    }
}

/// The indefinite article for a type name in generated docs.
pub(crate) fn article(type_name: &str) -> &'static str {
    if type_name.starts_with('u') { "a" } else { "an" }
}
