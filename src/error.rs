use thiserror::Error;

/// Errors that can occur while loading parser options.
///
/// Parsing itself is total and never fails; loading configuration from disk
/// or the environment is the crate's only fallible surface.
#[derive(Error, Debug)]
pub enum OptionsError {
    /// Configuration source could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
