//! Company names and marketing copy.

use crate::category::{Category, Operation};
use crate::error::FactoryError;
use crate::generator::Generator;

const OPERATIONS: &[(&str, Operation)] = &[
    ("name", name),
    ("suffix", suffix),
    ("catch_phrase", catch_phrase),
    ("bs", bs),
];

/// The `Company` category.
pub const CATEGORY: Category = Category::new("Company", "company", OPERATIONS).flexible("company");

/// A company name built from the locale's name templates.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn name(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.parse("company.name")
}

/// A legal-form suffix such as "LLC".
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn suffix(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("company.suffix")
}

/// One adjective, descriptor, and noun from the buzzword lists.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn catch_phrase(generator: &mut Generator) -> Result<String, FactoryError> {
    join_words(
        generator,
        &[
            "company.buzzwords.adjective",
            "company.buzzwords.descriptor",
            "company.buzzwords.noun",
        ],
    )
}

/// One verb, adjective, and noun from the business-speak lists.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn bs(generator: &mut Generator) -> Result<String, FactoryError> {
    join_words(
        generator,
        &["company.bs.verb", "company.bs.adjective", "company.bs.noun"],
    )
}

fn join_words(generator: &mut Generator, keys: &[&str]) -> Result<String, FactoryError> {
    let words = keys
        .iter()
        .map(|key| generator.fetch(key))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(words.join(" "))
}
