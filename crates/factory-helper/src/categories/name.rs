//! Personal names and job titles.

use crate::category::{Category, Operation};
use crate::error::FactoryError;
use crate::generator::Generator;

const OPERATIONS: &[(&str, Operation)] = &[
    ("name", name),
    ("name_with_middle", name_with_middle),
    ("first_name", first_name),
    ("last_name", last_name),
    ("prefix", prefix),
    ("suffix", suffix),
    ("title", title),
];

/// The `Name` category.
pub const CATEGORY: Category = Category::new("Name", "name", OPERATIONS).flexible("name");

/// A full name built from the locale's name templates.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn name(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.parse("name.name")
}

/// A full name including a middle name.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn name_with_middle(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.parse("name.name_with_middle")
}

/// A given name.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn first_name(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("name.first_name")
}

/// A family name.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn last_name(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("name.last_name")
}

/// An honorific such as "Dr.".
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn prefix(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("name.prefix")
}

/// A generational or professional suffix.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn suffix(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("name.suffix")
}

/// A job title: descriptor, level, and job joined by spaces.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn title(generator: &mut Generator) -> Result<String, FactoryError> {
    let descriptor = generator.fetch("name.title.descriptor")?;
    let level = generator.fetch("name.title.level")?;
    let job = generator.fetch("name.title.job")?;
    Ok(format!("{descriptor} {level} {job}"))
}
