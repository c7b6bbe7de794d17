use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
/// Represents every way generator options can be invalid.
pub enum ConfigError {
    /// A name is not a Rust identifier.
    #[error("The {role} `{name}` is not a valid Rust identifier.")]
    InvalidIdentifier {
        /// What the name is used for, e.g. `crate name`.
        role: &'static str,
        /// The rejected name.
        name: String,
    },
    /// A name is a Rust keyword or otherwise reserved.
    #[error("The {role} `{name}` is reserved.")]
    ReservedIdentifier {
        /// What the name is used for.
        role: &'static str,
        /// The rejected name.
        name: String,
    },
    /// A module name is used twice or shadows another generated item.
    #[error("The module name `{name}` is used twice or clashes with a generated item.")]
    ModuleClash {
        /// The clashing name.
        name: String,
    },
}
