//! Template rendering for `#{...}` placeholders.
//!
//! A template such as `"#{first_name} #{Name.last_name}"` is scanned left to
//! right. Each token is an optional `(`, the placeholder, and the literal text
//! after it up to the next `#`. Text before the first placeholder is not part
//! of any token and is dropped.

use std::sync::OnceLock;

use regex::{Captures, Regex};

use crate::error::FactoryError;
use crate::generator::Generator;

static PLACEHOLDER_RE: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_RE.get_or_init(|| {
        let pattern = r"(\(?)#\{([A-Za-z]+\.)?([^\}]+)\}([^#]+)?";
        Regex::new(pattern)
            .unwrap_or_else(|error| panic!("placeholder regex failed to compile: {error}"))
    })
}

/// Fetches `key` and expands every placeholder in the result.
///
/// Placeholders without a namespace resolve against the category owning the
/// key's first segment.
///
/// # Errors
///
/// Returns [`FactoryError`] if the key or any nested reference fails to
/// resolve.
pub fn render(generator: &mut Generator, key: &str) -> Result<String, FactoryError> {
    let fetched = generator.fetch(key)?;
    expand_placeholders(generator, scope_of(key), &fetched)
}

/// Expands the placeholders of an already fetched template.
///
/// Text without placeholders is returned unchanged.
///
/// # Errors
///
/// Returns [`FactoryError`] if a placeholder fails to resolve.
pub fn expand_placeholders(
    generator: &mut Generator,
    scope: &str,
    template: &str,
) -> Result<String, FactoryError> {
    if !placeholder_regex().is_match(template) {
        return Ok(template.to_owned());
    }

    let mut rendered = String::with_capacity(template.len());
    for caps in placeholder_regex().captures_iter(template) {
        let namespace = caps
            .get(2)
            .map(|m| m.as_str().trim_end_matches('.'));
        rendered.push_str(capture(&caps, 1));
        rendered.push_str(&resolve_placeholder(
            generator,
            scope,
            namespace,
            capture(&caps, 3),
        )?);
        rendered.push_str(capture(&caps, 4));
    }
    Ok(rendered)
}

fn resolve_placeholder(
    generator: &mut Generator,
    scope: &str,
    namespace: Option<&str>,
    name: &str,
) -> Result<String, FactoryError> {
    let category = match namespace {
        Some(prefix) => Some(generator.registry().by_namespace(prefix)?),
        None => generator.registry().by_key(scope),
    };

    if let Some(operation) = category.and_then(|found| found.operation(name)) {
        return operation(generator);
    }

    let category_scope = category.map_or(scope, |found| found.key());
    render(
        generator,
        &format!("{category_scope}.{}", name.to_lowercase()),
    )
}

fn scope_of(key: &str) -> &str {
    key.split_once('.').map_or(key, |(head, _)| head)
}

fn capture<'t>(caps: &Captures<'t>, index: usize) -> &'t str {
    caps.get(index).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;
    use crate::category::CategoryRegistry;
    use crate::config::Config;
    use crate::locale::LocaleCatalog;

    const BUNDLE: &str = r##"{
        "factory_helper": {
            "person": {
                "first_name": "Ada",
                "last_name": "Lovelace",
                "full": "#{first_name} #{last_name}",
                "formal": "Dr. #{last_name}",
                "parenthesised": "#{first_name} (#{last_name})",
                "nested": "#{full}!",
                "plain": "no placeholders here",
                "mixed_case": "#{First_Name}"
            },
            "name": {
                "first_name": ["Grace"],
                "last_name": ["Hopper"],
                "name": "#{first_name} #{last_name}",
                "borrowed": "#{Name.first_name} and #{Person.first_name}"
            }
        }
    }"##;

    #[fixture]
    fn generator() -> Generator {
        let catalog = LocaleCatalog::from_json("en", BUNDLE).expect("valid bundle");
        Generator::new(catalog, CategoryRegistry::bundled(), Config::new("en", 42))
    }

    #[rstest]
    #[case::two_placeholders("person.full", "Ada Lovelace")]
    #[case::leading_text_dropped("person.formal", "Lovelace")]
    #[case::open_paren_kept("person.parenthesised", "Ada (Lovelace)")]
    #[case::nested_template("person.nested", "Ada Lovelace!")]
    #[case::no_placeholders("person.plain", "no placeholders here")]
    #[case::name_lowercased("person.mixed_case", "Ada")]
    #[case::category_operations("name.name", "Grace Hopper")]
    fn renders_templates(mut generator: Generator, #[case] key: &str, #[case] expected: &str) {
        assert_eq!(render(&mut generator, key), Ok(expected.to_owned()));
    }

    #[rstest]
    fn unknown_namespace_is_a_typed_error(mut generator: Generator) {
        assert_eq!(
            render(&mut generator, "name.borrowed"),
            Err(FactoryError::UnknownCategory {
                namespace: "Person".to_owned()
            })
        );
    }

    #[rstest]
    fn missing_reference_surfaces_missing_translation(mut generator: Generator) {
        let result = expand_placeholders(&mut generator, "person", "#{nickname}");
        assert_eq!(
            result,
            Err(FactoryError::MissingTranslation {
                key: "factory_helper.person.nickname".to_owned(),
                locale: "en".to_owned(),
            })
        );
    }

    #[test]
    fn scope_is_first_segment() {
        assert_eq!(scope_of("address.city"), "address");
        assert_eq!(scope_of("address"), "address");
    }
}
