use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
/// Represents every failure while writing or checking a generated tree.
pub enum OutputError {
    /// An output directory could not be created.
    #[error("Failed to create directory '{}': {source}", .path.display())]
    CreateDir {
        /// The directory.
        path:   PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// A generated file could not be written.
    #[error("Failed to write '{}': {source}", .path.display())]
    Write {
        /// The file.
        path:   PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// An existing file could not be read for comparison.
    #[error("Failed to read '{}': {source}", .path.display())]
    Read {
        /// The file.
        path:   PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// Files on disk differ from freshly generated output.
    #[error("Generated files are out of date: {}. Run `castgen write` to refresh them.",
            display_paths(.paths))]
    Stale {
        /// The missing or differing files.
        paths: Vec<PathBuf>,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths.iter()
         .map(|path| format!("'{}'", path.display()))
         .collect::<Vec<_>>()
         .join(", ")
}
