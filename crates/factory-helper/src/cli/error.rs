//! Error types for the factory-helper CLI.

use thiserror::Error;

use crate::error::{FactoryError, LocaleError};

/// Errors surfaced by the CLI parsing and rendering flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// No generation target was supplied.
    #[error("missing target: supply at least one Category.operation or template key")]
    MissingTarget,
    /// A flag expected a value but none was provided.
    #[error("missing value for {flag}")]
    MissingValue {
        /// Flag that was missing its value.
        flag: &'static str,
    },
    /// An unsupported flag was supplied.
    #[error("unknown argument: {value}")]
    UnknownArgument {
        /// Argument value that was not recognised.
        value: String,
    },
    /// A numeric value failed to parse.
    #[error("invalid number for {flag}: '{value}' ({message})")]
    InvalidNumber {
        /// Flag associated with the invalid number.
        flag: &'static str,
        /// Raw value supplied for the flag.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// Settings could not be loaded from the environment or config files.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration failure.
        message: String,
    },
    /// Locale bundles could not be loaded.
    #[error("locale error: {source}")]
    Locale {
        /// Underlying locale error.
        #[from]
        #[source]
        source: LocaleError,
    },
    /// A target failed to generate.
    #[error("generation error: {source}")]
    Generation {
        /// Underlying generation error.
        #[from]
        #[source]
        source: FactoryError,
    },
}
