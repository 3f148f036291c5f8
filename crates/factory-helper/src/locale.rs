//! Locale trees, bundle loading, and key resolution with fallback.
//!
//! Each locale is a nested tree of string-keyed maps whose leaves are either a
//! single string or an ordered list of strings. Trees are loaded once from
//! JSON bundles and are immutable afterwards. Lookups against a locale that
//! lacks the key retry once against [`DEFAULT_LOCALE`].

use std::collections::BTreeMap;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use serde_json::Value;
use tracing::debug;

use crate::error::{FactoryError, LocaleError};

/// Locale consulted when the requested locale lacks a key.
pub const DEFAULT_LOCALE: &str = "en";

/// Root segment under which every generator key lives.
pub const ROOT_KEY: &str = "factory_helper";

const BUNDLED: [(&str, &str); 2] = [
    ("en", include_str!("../locales/en.json")),
    ("fr", include_str!("../locales/fr.json")),
];

/// A node of a locale tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocaleNode {
    /// A single string leaf.
    Scalar(String),
    /// An ordered list of string leaves.
    List(Vec<String>),
    /// A nested mapping of segments to child nodes.
    Map(BTreeMap<String, LocaleNode>),
}

impl LocaleNode {
    /// Returns the child under `segment` when this node is a map.
    #[must_use]
    pub fn child(&self, segment: &str) -> Option<&Self> {
        match self {
            Self::Map(children) => children.get(segment),
            Self::Scalar(_) | Self::List(_) => None,
        }
    }

    /// Walks a dotted key segment by segment.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Self> {
        key.split('.')
            .try_fold(self, |node, segment| node.child(segment))
    }

    fn from_json(locale: &str, path: &str, value: Value) -> Result<Self, LocaleError> {
        match value {
            Value::Object(entries) => entries
                .into_iter()
                .map(|(segment, child)| {
                    let child_path = join_key(path, &segment);
                    Self::from_json(locale, &child_path, child).map(|node| (segment, node))
                })
                .collect::<Result<BTreeMap<_, _>, _>>()
                .map(Self::Map),
            Value::Array(items) => items
                .into_iter()
                .map(|item| {
                    let kind = value_kind(&item);
                    scalar_text(item).ok_or_else(|| invalid_node(locale, path, kind))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
            other => {
                let kind = value_kind(&other);
                scalar_text(other)
                    .map(Self::Scalar)
                    .ok_or_else(|| invalid_node(locale, path, kind))
            }
        }
    }
}

/// A resolved leaf, ready for value selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedValue {
    /// A single string.
    Scalar(String),
    /// An ordered list to sample one element from.
    List(Vec<String>),
}

/// Locale trees keyed by locale identifier.
///
/// # Example
///
/// ```
/// use factory_helper::LocaleCatalog;
///
/// let catalog = LocaleCatalog::from_json(
///     "en",
///     r#"{"factory_helper": {"name": {"first_name": ["Ada", "Grace"]}}}"#,
/// )
/// .expect("valid bundle");
///
/// assert!(catalog.resolve("factory_helper.name.first_name", "fr").is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleCatalog {
    trees: BTreeMap<String, LocaleNode>,
}

impl LocaleCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the catalog of locale bundles shipped with the crate.
    ///
    /// # Panics
    ///
    /// Panics if a bundled locale file is not a valid bundle, which would be a
    /// packaging defect.
    #[must_use]
    pub fn bundled() -> Self {
        let mut catalog = Self::new();
        for (locale, json) in BUNDLED {
            catalog
                .insert_json(locale, json)
                .unwrap_or_else(|error| panic!("bundled locale '{locale}' is invalid: {error}"));
        }
        catalog
    }

    /// Parses a single-locale catalog from a JSON bundle.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the JSON is malformed or contains values
    /// that cannot be represented in a locale tree.
    pub fn from_json(locale: &str, json: &str) -> Result<Self, LocaleError> {
        let mut catalog = Self::new();
        catalog.insert_json(locale, json)?;
        Ok(catalog)
    }

    /// Loads every `<locale>.json` bundle in a directory.
    ///
    /// Files without a `.json` extension are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the directory or a bundle cannot be read or
    /// parsed.
    pub fn from_dir(path: &Utf8Path) -> Result<Self, LocaleError> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())
            .map_err(|error| io_error(path, &error))?;
        let mut catalog = Self::new();

        for entry_result in dir.entries().map_err(|error| io_error(path, &error))? {
            let entry = entry_result.map_err(|error| io_error(path, &error))?;
            let os_name = entry.file_name();
            let Some(file_name) = os_name.to_str() else {
                continue;
            };
            let Some(locale) = file_name.strip_suffix(".json") else {
                continue;
            };
            if locale.is_empty() {
                return Err(LocaleError::InvalidLocaleName {
                    file_name: file_name.to_owned(),
                });
            }
            let contents = dir
                .read_to_string(file_name)
                .map_err(|error| io_error(&path.join(file_name), &error))?;
            catalog.insert_json(locale, &contents)?;
        }

        Ok(catalog)
    }

    /// Parses a bundle and adds or replaces the tree for `locale`.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the JSON is malformed, its root is not an
    /// object, or it contains unsupported values.
    pub fn insert_json(&mut self, locale: &str, json: &str) -> Result<(), LocaleError> {
        let value: Value = serde_json::from_str(json).map_err(|e| LocaleError::ParseError {
            locale: locale.to_owned(),
            message: e.to_string(),
        })?;
        if !value.is_object() {
            return Err(invalid_node(locale, "", value_kind(&value)));
        }
        let tree = LocaleNode::from_json(locale, "", value)?;
        self.trees.insert(locale.to_owned(), tree);
        Ok(())
    }

    /// Returns the catalog with `tree` installed for `locale`.
    #[must_use]
    pub fn with_locale(mut self, locale: &str, tree: LocaleNode) -> Self {
        self.trees.insert(locale.to_owned(), tree);
        self
    }

    /// Returns the loaded locale identifiers in sorted order.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        self.trees.keys().map(String::as_str).collect()
    }

    /// Looks a dotted key up in one locale without fallback.
    #[must_use]
    pub fn lookup(&self, locale: &str, key: &str) -> Option<&LocaleNode> {
        self.trees.get(locale).and_then(|tree| tree.lookup(key))
    }

    /// Looks a dotted key up in `locale`, retrying once against
    /// [`DEFAULT_LOCALE`].
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::MissingTranslation`] if neither locale has the
    /// key.
    pub fn translate(&self, key: &str, locale: &str) -> Result<&LocaleNode, FactoryError> {
        if let Some(node) = self.lookup(locale, key) {
            return Ok(node);
        }
        debug!(key, locale, fallback = DEFAULT_LOCALE, "translation missing; falling back");
        self.lookup(DEFAULT_LOCALE, key)
            .ok_or_else(|| missing(key, locale))
    }

    /// Resolves a dotted key to a leaf value.
    ///
    /// # Errors
    ///
    /// Returns [`FactoryError::MissingTranslation`] if the key is absent from
    /// both locales or names an interior map rather than a leaf.
    pub fn resolve(&self, key: &str, locale: &str) -> Result<ResolvedValue, FactoryError> {
        match self.translate(key, locale)? {
            LocaleNode::Scalar(text) => Ok(ResolvedValue::Scalar(text.clone())),
            LocaleNode::List(items) => Ok(ResolvedValue::List(items.clone())),
            LocaleNode::Map(_) => Err(missing(key, locale)),
        }
    }
}

fn missing(key: &str, locale: &str) -> FactoryError {
    FactoryError::MissingTranslation {
        key: key.to_owned(),
        locale: locale.to_owned(),
    }
}

fn join_key(prefix: &str, segment: &str) -> String {
    if prefix.is_empty() {
        segment.to_owned()
    } else {
        format!("{prefix}.{segment}")
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

const fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn invalid_node(locale: &str, path: &str, kind: &'static str) -> LocaleError {
    LocaleError::InvalidNode {
        locale: locale.to_owned(),
        path: path.to_owned(),
        kind,
    }
}

fn io_error(path: &Utf8Path, error: &std::io::Error) -> LocaleError {
    LocaleError::IoError {
        path: path.as_std_path().to_path_buf(),
        message: error.to_string(),
    }
}
