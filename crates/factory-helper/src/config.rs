//! Generation context and settings loaded via OrthoConfig.
//!
//! [`Config`] is the context every resolution call reads: the active locale
//! and the shared [`RandomSource`]. [`GeneratorSettings`] supplies its
//! defaults from the environment and configuration files.

use std::path::PathBuf;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::Deserialize;
use tracing::debug;

use crate::error::LocaleError;
use crate::locale::{DEFAULT_LOCALE, LocaleCatalog};
use crate::random::{RandomSource, fresh_seed};

/// Active locale and random source for one generator.
///
/// # Example
///
/// ```
/// use factory_helper::Config;
///
/// let mut config = Config::new("fr", 42);
/// assert_eq!(config.locale(), "fr");
/// assert_eq!(config.seed(), 42);
///
/// config.set_seed(Some(7));
/// assert_eq!(config.seed(), 7);
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    locale: String,
    random: RandomSource,
}

impl Config {
    /// Creates a context for `locale` seeded with `seed`.
    #[must_use]
    pub fn new(locale: &str, seed: u64) -> Self {
        Self {
            locale: locale.to_owned(),
            random: RandomSource::from_seed(seed),
        }
    }

    /// Returns the active locale identifier.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Sets the active locale, or restores [`DEFAULT_LOCALE`] for `None`.
    pub fn set_locale(&mut self, locale: Option<&str>) {
        self.locale = locale.unwrap_or(DEFAULT_LOCALE).to_owned();
    }

    /// Returns the seed last set.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.random.seed()
    }

    /// Reseeds the random source, drawing a fresh seed for `None`.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        let resolved = seed.unwrap_or_else(fresh_seed);
        debug!(seed = resolved, "random source reseeded");
        self.random.reseed(resolved);
    }

    /// Returns the random source for drawing.
    pub const fn random_mut(&mut self) -> &mut RandomSource {
        &mut self.random
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            random: RandomSource::from_entropy(),
        }
    }
}

/// Generator defaults loaded from `FACTORY_HELPER_*` variables and config
/// files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "FACTORY_HELPER")]
pub struct GeneratorSettings {
    /// Locale to generate for.
    #[ortho_config(default = DEFAULT_LOCALE.to_owned())]
    pub locale: String,
    /// Seed for the random source.
    pub seed: Option<u64>,
    /// Directory of `<locale>.json` bundles replacing the bundled data.
    pub locales_path: Option<PathBuf>,
}

impl GeneratorSettings {
    /// Return the configured locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Build the generation context these settings describe.
    #[must_use]
    pub fn config(&self) -> Config {
        Config::new(self.locale(), self.seed.unwrap_or_else(fresh_seed))
    }

    /// Load the configured locale bundles, or the bundled ones when no path
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the directory is not valid UTF-8 or a bundle
    /// cannot be read or parsed.
    pub fn catalog(&self) -> Result<LocaleCatalog, LocaleError> {
        let Some(path) = &self.locales_path else {
            return Ok(LocaleCatalog::bundled());
        };
        let utf8_path =
            Utf8PathBuf::from_path_buf(path.clone()).map_err(|rejected| LocaleError::IoError {
                path: rejected,
                message: "locale directory path is not valid UTF-8".to_owned(),
            })?;
        LocaleCatalog::from_dir(&utf8_path)
    }
}
