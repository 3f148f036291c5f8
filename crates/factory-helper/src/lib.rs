//! Locale-aware fake data generation for demonstration and test fixtures.
//!
//! This crate produces plausible random strings (names, addresses, phone
//! numbers, company names) by combining locale-provided templates with
//! seeded random substitution.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Locale bundles loaded from JSON, with one-level fallback to `en`
//! - Sampling from lists and expanding slash-delimited patterns on fetch
//! - Recursive `#{...}` template rendering across categories
//! - Restricted regex-like pattern expansion (`regexify`) and the `#`/`?`
//!   helpers (`numerify`, `letterify`, `bothify`)
//! - Category operation tables with a flexible locale-key fallback
//! - Fully reproducible output for a fixed seed
//!
//! # Example
//!
//! ```
//! use factory_helper::{Config, Generator, LocaleCatalog, CategoryRegistry};
//!
//! let catalog = LocaleCatalog::from_json(
//!     "en",
//!     r##"{"factory_helper": {"name": {
//!         "first_name": ["Ada"],
//!         "last_name": ["Lovelace"],
//!         "name": "#{first_name} #{last_name}"
//!     }}}"##,
//! )
//! .expect("valid bundle");
//!
//! let mut generator = Generator::new(catalog, CategoryRegistry::bundled(), Config::new("fr", 42));
//!
//! assert_eq!(generator.parse("name.name").expect("renders"), "Ada Lovelace");
//! ```

mod category;
pub mod categories;
pub mod cli;
mod config;
mod error;
mod generator;
mod locale;
mod pattern;
mod random;
mod template;

pub use category::{Category, CategoryRegistry, Operation, flexible_lookup};
pub use config::{Config, GeneratorSettings};
pub use error::{FactoryError, LocaleError};
pub use generator::{Generator, with_default};
pub use locale::{DEFAULT_LOCALE, LocaleCatalog, LocaleNode, ROOT_KEY, ResolvedValue};
pub use pattern::{bothify, letterify, numerify, regexify};
pub use random::{RandomSource, fresh_seed};
pub use template::expand_placeholders;
