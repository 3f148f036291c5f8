//! The generation context and its public entry points.
//!
//! A [`Generator`] owns one [`Config`] and shares its locale catalog and
//! category registry. Cloning a generator is cheap, so independent workers
//! can each hold their own random stream.

use std::cell::Cell;
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::debug;

use crate::category::{CategoryRegistry, flexible_lookup};
use crate::config::{Config, GeneratorSettings};
use crate::error::{FactoryError, LocaleError};
use crate::locale::{LocaleCatalog, LocaleNode, ROOT_KEY, ResolvedValue};
use crate::pattern;
use crate::random::RandomSource;
use crate::template;

static DEFAULT_GENERATOR: OnceLock<Mutex<Generator>> = OnceLock::new();

/// Locale-aware fake value generator.
///
/// # Example
///
/// ```
/// use factory_helper::Generator;
///
/// let mut generator = Generator::bundled();
/// generator.set_seed(Some(42));
/// let first = generator.parse("name.name").expect("bundled template");
///
/// generator.set_seed(Some(42));
/// let second = generator.parse("name.name").expect("bundled template");
///
/// assert_eq!(first, second);
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    catalog: Arc<LocaleCatalog>,
    registry: Arc<CategoryRegistry>,
    config: Config,
}

impl Generator {
    /// Creates a generator from its parts.
    #[must_use]
    pub fn new(catalog: LocaleCatalog, registry: CategoryRegistry, config: Config) -> Self {
        Self {
            catalog: Arc::new(catalog),
            registry: Arc::new(registry),
            config,
        }
    }

    /// Creates a generator over the bundled locales and categories, using the
    /// default locale and a fresh seed.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(
            LocaleCatalog::bundled(),
            CategoryRegistry::bundled(),
            Config::default(),
        )
    }

    /// Creates a generator from loaded settings.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the configured locale bundles cannot be
    /// loaded.
    pub fn from_settings(settings: &GeneratorSettings) -> Result<Self, LocaleError> {
        Ok(Self::new(
            settings.catalog()?,
            CategoryRegistry::bundled(),
            settings.config(),
        ))
    }

    /// Returns the locale catalog.
    #[must_use]
    pub fn catalog(&self) -> &LocaleCatalog {
        &self.catalog
    }

    /// Returns the category registry.
    #[must_use]
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// Returns the active locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.config.locale()
    }

    /// Sets the active locale, or restores the default for `None`.
    pub fn set_locale(&mut self, locale: Option<&str>) {
        self.config.set_locale(locale);
    }

    /// Returns the seed last set.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.config.seed()
    }

    /// Reseeds the random source, drawing a fresh seed for `None`.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.config.set_seed(seed);
    }

    /// Returns the random source for callers composing their own draws.
    pub const fn random_mut(&mut self) -> &mut RandomSource {
        self.config.random_mut()
    }

    /// Looks a full dotted key up in the active locale, falling back to the
    /// default locale.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::MissingTranslation`] if neither locale has it.
    pub fn translate(&self, key: &str) -> Result<&LocaleNode, FactoryError> {
        self.catalog.translate(key, self.config.locale())
    }

    /// Resolves a full dotted key to a leaf value.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::MissingTranslation`] if the key has no leaf in
    /// either locale.
    pub fn resolve(&self, key: &str) -> Result<ResolvedValue, FactoryError> {
        self.catalog.resolve(key, self.config.locale())
    }

    /// Picks one string from a resolved value.
    ///
    /// Lists yield one uniformly sampled element. A result wrapped in `/`
    /// delimiters is expanded as a pattern.
    pub fn select(&mut self, value: ResolvedValue) -> String {
        let random = self.config.random_mut();
        let chosen = match value {
            ResolvedValue::Scalar(text) => text,
            ResolvedValue::List(items) => random.sample_one(&items).cloned().unwrap_or_default(),
        };
        if is_delimited_pattern(&chosen) {
            pattern::regexify(&chosen, random)
        } else {
            chosen
        }
    }

    /// Resolves `factory_helper.<key>` and selects one string from it.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::MissingTranslation`] if the key is absent.
    pub fn fetch(&mut self, key: &str) -> Result<String, FactoryError> {
        let value = self.resolve(&format!("{ROOT_KEY}.{key}"))?;
        Ok(self.select(value))
    }

    /// Fetches `key` and expands its `#{...}` placeholders recursively.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError`] if the key or any nested reference fails to
    /// resolve.
    pub fn parse(&mut self, key: &str) -> Result<String, FactoryError> {
        template::render(self, key)
    }

    /// Invokes a category operation by name.
    ///
    /// Declared operations run directly; any other name is looked up through
    /// the category's flexible key.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnknownCategory`] for an unregistered category
    /// and [`FactoryError::UnknownOperation`] when neither the table nor the
    /// locale data knows the name.
    pub fn call(&mut self, category: &str, operation: &str) -> Result<String, FactoryError> {
        let found = self.registry.by_namespace(category)?;
        if let Some(declared) = found.operation(operation) {
            return declared(self);
        }
        debug!(category, operation, "operation not declared; trying flexible key");
        flexible_lookup(&found, &self.catalog, &mut self.config, operation)
    }

    /// Generates a string matching a restricted regex-like pattern.
    pub fn regexify(&mut self, pattern: &str) -> String {
        pattern::regexify(pattern, self.config.random_mut())
    }

    /// Replaces each `#` with a digit, the first never being zero.
    pub fn numerify(&mut self, template: &str) -> String {
        pattern::numerify(template, self.config.random_mut())
    }

    /// Replaces each `?` with an uppercase letter.
    pub fn letterify(&mut self, template: &str) -> String {
        pattern::letterify(template, self.config.random_mut())
    }

    /// Applies [`Self::numerify`] then [`Self::letterify`].
    pub fn bothify(&mut self, template: &str) -> String {
        pattern::bothify(template, self.config.random_mut())
    }

    /// Draws an integer from the inclusive range between `low` and `high`,
    /// in either order.
    pub fn random_in_range(&mut self, low: i64, high: i64) -> i64 {
        self.config.random_mut().in_range(low, high)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::bundled()
    }
}

/// Runs `f` against the process-wide default generator.
///
/// Calls are serialised by a mutex; concurrent callers therefore interleave
/// draws from one random stream in lock order. The mutex is not reentrant:
/// use the `&mut Generator` handed to `f` rather than calling `with_default`
/// again from inside it.
///
/// # Panics
///
/// Panics if called from inside another `with_default` closure on the same
/// thread, which would otherwise deadlock.
///
/// # Example
///
/// ```
/// use factory_helper::with_default;
///
/// let value = with_default(|generator| generator.numerify("##"));
/// assert_eq!(value.len(), 2);
/// ```
pub fn with_default<T>(f: impl FnOnce(&mut Generator) -> T) -> T {
    let _entered = DefaultGeneratorEntry::enter();
    let cell = DEFAULT_GENERATOR.get_or_init(|| Mutex::new(Generator::bundled()));
    let mut guard = cell.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

thread_local! {
    static IN_DEFAULT_GENERATOR: Cell<bool> = const { Cell::new(false) };
}

/// Marks the current thread as inside [`with_default`] until dropped.
struct DefaultGeneratorEntry;

impl DefaultGeneratorEntry {
    fn enter() -> Self {
        assert!(
            !IN_DEFAULT_GENERATOR.with(|entered| entered.replace(true)),
            "with_default called from inside a with_default closure"
        );
        Self
    }
}

impl Drop for DefaultGeneratorEntry {
    fn drop(&mut self) {
        IN_DEFAULT_GENERATOR.with(|entered| entered.set(false));
    }
}

fn is_delimited_pattern(text: &str) -> bool {
    text.starts_with('/') && text.ends_with('/')
}
