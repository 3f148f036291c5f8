//! Error types for the factory-helper crate.
//!
//! This module defines semantic error enums for locale bundle loading and
//! value generation, following the project's error handling conventions with
//! `thiserror`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading locale bundles.
///
/// These errors cover file I/O, JSON parsing, and bundles whose shape cannot
/// be represented as a locale tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// A locale bundle or bundle directory could not be read.
    #[error("failed to read locale bundle at '{path}': {message}")]
    IoError {
        /// Path to the bundle or directory.
        path: PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The bundle JSON is malformed.
    #[error("invalid locale JSON for '{locale}': {message}")]
    ParseError {
        /// Locale identifier the bundle was loaded for.
        locale: String,
        /// Description of the parse error.
        message: String,
    },

    /// A node in the bundle is neither a scalar, a list of scalars, nor a map.
    #[error("unsupported value at '{path}' in locale '{locale}': {kind}")]
    InvalidNode {
        /// Locale identifier the bundle was loaded for.
        locale: String,
        /// Dotted path of the offending node.
        path: String,
        /// Short description of the unsupported value.
        kind: &'static str,
    },

    /// A bundle file name does not yield a usable locale identifier.
    #[error("cannot derive a locale identifier from '{file_name}'")]
    InvalidLocaleName {
        /// The file name that was rejected.
        file_name: String,
    },
}

/// Errors that can occur while resolving keys or dispatching operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FactoryError {
    /// The key is absent from both the requested locale and the default.
    #[error("translation missing: {locale}.{key}")]
    MissingTranslation {
        /// Dotted key that was looked up.
        key: String,
        /// Locale that was requested before falling back.
        locale: String,
    },

    /// A category has neither a static operation nor locale data for a name.
    #[error("unknown operation '{name}' for category '{category}'")]
    UnknownOperation {
        /// Category the operation was requested from.
        category: String,
        /// Name of the requested operation.
        name: String,
    },

    /// A template namespace does not name a registered category.
    #[error("unknown category namespace '{namespace}'")]
    UnknownCategory {
        /// The namespace as written in the template.
        namespace: String,
    },
}
