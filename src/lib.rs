//! # castgen
//!
//! castgen generates a checked numeric cast library for Rust. For every
//! ordered pair of primitive numeric types it emits a function returning the
//! plain `as` cast together with a flag that is `false` when the cast lost
//! information, a generic entry point dispatching over those functions at
//! compile time, and one boundary test per pair.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{
    emit::{Options, Target, generate},
    error::{Error, OutputError},
};

/// Turns descriptors and rules into Rust source text.
///
/// Each submodule emits one generated file. Emission cannot fail: the inputs
/// are the fixed type lists and already-validated options.
///
/// # Responsibilities
/// - Emits the fixed-width functions, the generic dispatch, the tests and the
///   crate root.
/// - Validates the names the generated files refer to each other by.
/// - Keeps output deterministic so regenerated files are byte-identical.
pub mod emit;
/// Provides unified error types for option validation and file output.
///
/// # Responsibilities
/// - Rejects crate and module names that would not compile.
/// - Carries paths and I/O sources for every filesystem failure.
pub mod error;
/// Describes the numeric types and the conversions between them.
///
/// # Responsibilities
/// - Defines the closed set of primitive numeric types.
/// - Builds every `(from, to)` descriptor in stable orders.
/// - Classifies each descriptor as narrowing, widening or platform-dependent.
pub mod model;
/// The conversion rule table.
///
/// This module decides, for each descriptor, which predicate the emitted
/// function reports, and which values the emitted test probes.
///
/// # Responsibilities
/// - Chooses a check per pair, or a delegation for platform-native pairs.
/// - Renders checks as Rust expressions.
/// - Evaluates checks on sample values for either pointer width.
pub mod rules;
/// Reference helpers modelling primitive casts on wide types.
pub mod util;

/// Writes every generated file below `out_dir`.
///
/// Creates `src/` and `tests/` as needed and returns the written paths in
/// the order of `Target::ALL`.
///
/// # Errors
/// Returns an error if a directory cannot be created or a file cannot be
/// written.
pub fn write_tree(out_dir: &Path, options: &Options) -> Result<Vec<PathBuf>, Error> {
    let mut written = Vec::with_capacity(Target::ALL.len());

    for target in Target::ALL {
        let path = out_dir.join(target.relative_path(options));
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| OutputError::CreateDir { path: parent.to_path_buf(),
                                                                                  source })?;
        }

        let source = generate(target, options);
        fs::write(&path, &source).map_err(|source| OutputError::Write { path: path.clone(),
                                                                        source })?;
        tracing::info!(krate = options.crate_name(),
                       path = %path.display(),
                       bytes = source.len(),
                       "wrote generated file");
        written.push(path);
    }

    Ok(written)
}

/// Compares the files below `out_dir` with freshly generated output.
///
/// # Errors
/// Returns `OutputError::Stale` listing every missing or differing file, or
/// `OutputError::Read` if an existing file cannot be read.
pub fn check_tree(out_dir: &Path, options: &Options) -> Result<(), Error> {
    let mut stale = Vec::new();

    for target in Target::ALL {
        let path = out_dir.join(target.relative_path(options));
        let on_disk = match fs::read_to_string(&path) {
            Ok(text) => Some(text),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(source) => return Err(OutputError::Read { path, source }.into()),
        };

        if on_disk.as_deref() == Some(generate(target, options).as_str()) {
            tracing::info!(path = %path.display(), "generated file is up to date");
        } else {
            tracing::warn!(path = %path.display(), missing = on_disk.is_none(), "generated file is stale");
            stale.push(path);
        }
    }

    if stale.is_empty() {
        Ok(())
    } else {
        Err(OutputError::Stale { paths: stale }.into())
    }
}
