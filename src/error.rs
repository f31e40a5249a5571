//! Error handling types and utilities.

/// A specialized Result type for searchcode-text operations.
///
/// This is an alias for `anyhow::Result` with context added via `.context()` and
/// `.with_context()` at the file-loading boundary.
pub type Result<T> = anyhow::Result<T>;

/// Error returned when a configuration document fails validation.
///
/// Every variant is raised once, at load time. Text and query operations never
/// fail on well-typed input.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The document is not valid TOML or a value has the wrong type.
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// `max_split_length` must leave at least one character to tokenize.
    #[error("max_split_length must be greater than zero")]
    ZeroSplitLength,

    /// An extension list entry could never match a filename suffix.
    #[error("invalid extension '{extension}' in {list}")]
    InvalidExtension { list: &'static str, extension: String },
}
