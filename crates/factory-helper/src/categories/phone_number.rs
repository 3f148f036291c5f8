//! Telephone numbers.

use crate::category::{Category, Operation};
use crate::error::FactoryError;
use crate::generator::Generator;

const OPERATIONS: &[(&str, Operation)] =
    &[("phone_number", phone_number), ("cell_phone", cell_phone)];

/// The `PhoneNumber` category.
pub const CATEGORY: Category =
    Category::new("PhoneNumber", "phone_number", OPERATIONS).flexible("phone_number");

/// A landline number in one of the locale's formats.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn phone_number(generator: &mut Generator) -> Result<String, FactoryError> {
    let format = generator.fetch("phone_number.formats")?;
    Ok(generator.numerify(&format))
}

/// A mobile number in one of the locale's formats.
///
/// # Errors
///
/// Returns [`FactoryError`] if the locale data is incomplete.
pub fn cell_phone(generator: &mut Generator) -> Result<String, FactoryError> {
    let format = generator.fetch("cell_phone.formats")?;
    Ok(generator.numerify(&format))
}
