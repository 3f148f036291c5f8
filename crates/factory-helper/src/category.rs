//! Generator categories and their capability tables.
//!
//! A [`Category`] declares a fixed table of named operations. Names missing
//! from the table may still resolve through the category's flexible key,
//! which reads `factory_helper.<flexible_key>.<name>` from the active
//! locale's tree. Templates refer to categories by namespace through the
//! [`CategoryRegistry`].

use std::collections::BTreeMap;

use tracing::debug;

use crate::config::Config;
use crate::error::FactoryError;
use crate::generator::Generator;
use crate::locale::{LocaleCatalog, LocaleNode, ROOT_KEY};

/// A zero-argument, string-producing generator operation.
pub type Operation = fn(&mut Generator) -> Result<String, FactoryError>;

/// A named generator category with a static operation table.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    name: &'static str,
    key: &'static str,
    flexible_key: Option<&'static str>,
    operations: &'static [(&'static str, Operation)],
}

impl Category {
    /// Declares a category.
    ///
    /// `name` is the template namespace (`Name` in `#{Name.first_name}`) and
    /// `key` the locale scope its data lives under.
    #[must_use]
    pub const fn new(
        name: &'static str,
        key: &'static str,
        operations: &'static [(&'static str, Operation)],
    ) -> Self {
        Self {
            name,
            key,
            flexible_key: None,
            operations,
        }
    }

    /// Returns the category with a flexible key for undeclared operations.
    #[must_use]
    pub const fn flexible(self, flexible_key: &'static str) -> Self {
        Self {
            flexible_key: Some(flexible_key),
            ..self
        }
    }

    /// Returns the template namespace.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the locale scope.
    #[must_use]
    pub const fn key(&self) -> &'static str {
        self.key
    }

    /// Returns the flexible key, if any.
    #[must_use]
    pub const fn flexible_key(&self) -> Option<&'static str> {
        self.flexible_key
    }

    /// Looks an operation up in the static table.
    #[must_use]
    pub fn operation(&self, name: &str) -> Option<Operation> {
        self.operations
            .iter()
            .find(|(declared, _)| *declared == name)
            .map(|(_, operation)| *operation)
    }

    /// Returns the declared operation names in table order.
    pub fn operation_names(&self) -> impl Iterator<Item = &'static str> {
        self.operations.iter().map(|(declared, _)| *declared)
    }
}

/// Registered categories keyed by template namespace.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: BTreeMap<&'static str, Category>,
}

impl CategoryRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a registry holding the bundled categories.
    #[must_use]
    pub fn bundled() -> Self {
        crate::categories::ALL
            .into_iter()
            .fold(Self::new(), Self::with)
    }

    /// Returns the registry with `category` added or replaced.
    #[must_use]
    pub fn with(mut self, category: Category) -> Self {
        self.register(category);
        self
    }

    /// Adds or replaces a category.
    pub fn register(&mut self, category: Category) {
        self.categories.insert(category.name(), category);
    }

    /// Finds a category by template namespace.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::UnknownCategory`] if no category has that name.
    pub fn by_namespace(&self, namespace: &str) -> Result<Category, FactoryError> {
        self.categories
            .get(namespace)
            .copied()
            .ok_or_else(|| FactoryError::UnknownCategory {
                namespace: namespace.to_owned(),
            })
    }

    /// Finds the category whose locale scope is `key`.
    #[must_use]
    pub fn by_key(&self, key: &str) -> Option<Category> {
        self.categories
            .values()
            .find(|category| category.key() == key)
            .copied()
    }

    /// Returns the registered namespaces in sorted order.
    #[must_use]
    pub fn names(&self) -> Vec<&'static str> {
        self.categories.keys().copied().collect()
    }
}

/// Resolves an undeclared operation through the category's flexible key.
///
/// The lookup reads the whole `factory_helper` tree of the active locale (the
/// default-locale fallback applies to that root only) and indexes it by the
/// flexible key and then `name`. Lists are sampled; scalars are returned
/// as-is.
///
/// # Errors
///
/// Returns [`FactoryError::UnknownOperation`] if the category has no flexible
/// key or the tree has no leaf at that position.
pub fn flexible_lookup(
    category: &Category,
    catalog: &LocaleCatalog,
    config: &mut Config,
    name: &str,
) -> Result<String, FactoryError> {
    let unknown = || FactoryError::UnknownOperation {
        category: category.name().to_owned(),
        name: name.to_owned(),
    };
    let Some(flexible_key) = category.flexible_key() else {
        return Err(unknown());
    };
    let Ok(root) = catalog.translate(ROOT_KEY, config.locale()) else {
        return Err(unknown());
    };

    debug!(category = category.name(), name, flexible_key, "flexible lookup");
    match root.child(flexible_key).and_then(|scope| scope.child(name)) {
        Some(LocaleNode::List(items)) => Ok(config
            .random_mut()
            .sample_one(items)
            .cloned()
            .unwrap_or_default()),
        Some(LocaleNode::Scalar(text)) => Ok(text.clone()),
        Some(LocaleNode::Map(_)) | None => Err(unknown()),
    }
}
