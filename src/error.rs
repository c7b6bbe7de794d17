/// Option validation errors.
///
/// Raised before anything is emitted when a crate or module name would not
/// produce valid Rust, or when two generated modules would collide.
pub mod config_error;
/// File output errors.
///
/// Raised while writing a generated tree to disk or comparing one against
/// fresh output.
pub mod output_error;

pub use config_error::ConfigError;
pub use output_error::OutputError;
use thiserror::Error;

/// Any failure the generator can report.
#[derive(Debug, Error)]
pub enum Error {
    /// The options were rejected.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Reading or writing generated files failed.
    #[error(transparent)]
    Output(#[from] OutputError),
}
