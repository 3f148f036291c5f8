//! Postal addresses.
//!
//! Composite values (`city`, `street_name`, `street_address`) come from
//! locale templates that mix this category's operations with `Name`
//! operations. Numeric parts use `#`/`?` placeholders filled by
//! [`Generator::numerify`] and [`Generator::bothify`].

use crate::category::{Category, Operation};
use crate::error::FactoryError;
use crate::generator::Generator;

const OPERATIONS: &[(&str, Operation)] = &[
    ("city", city),
    ("street_name", street_name),
    ("street_address", street_address),
    ("secondary_address", secondary_address),
    ("building_number", building_number),
    ("zip_code", zip_code),
    ("postcode", zip_code),
    ("zip", zip_code),
    ("street_suffix", street_suffix),
    ("city_prefix", city_prefix),
    ("city_suffix", city_suffix),
    ("state", state),
    ("state_abbr", state_abbr),
    ("country", country),
];

/// The `Address` category.
pub const CATEGORY: Category = Category::new("Address", "address", OPERATIONS).flexible("address");

/// A city name.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn city(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.parse("address.city")
}

/// A street name.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn street_name(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.parse("address.street_name")
}

/// A building number followed by a street name.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn street_address(generator: &mut Generator) -> Result<String, FactoryError> {
    let rendered = generator.parse("address.street_address")?;
    Ok(generator.numerify(&rendered))
}

/// An apartment or suite designation.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn secondary_address(generator: &mut Generator) -> Result<String, FactoryError> {
    let format = generator.fetch("address.secondary_address")?;
    Ok(generator.numerify(&format))
}

/// A building number.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn building_number(generator: &mut Generator) -> Result<String, FactoryError> {
    let format = generator.fetch("address.building_number")?;
    Ok(generator.bothify(&format))
}

/// A postal code; also registered as `postcode` and `zip`.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn zip_code(generator: &mut Generator) -> Result<String, FactoryError> {
    let format = generator.fetch("address.postcode")?;
    Ok(generator.bothify(&format))
}

/// A street suffix such as "Avenue".
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn street_suffix(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("address.street_suffix")
}

/// A city prefix such as "North".
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn city_prefix(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("address.city_prefix")
}

/// A city suffix such as "ville".
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn city_suffix(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("address.city_suffix")
}

/// A state or region name.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn state(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("address.state")
}

/// A state abbreviation.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn state_abbr(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("address.state_abbr")
}

/// A country name.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn country(generator: &mut Generator) -> Result<String, FactoryError> {
    generator.fetch("address.country")
}
