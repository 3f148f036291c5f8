//! Bundled generator categories.
//!
//! Each category only names the locale keys it draws from; all resolution,
//! sampling, and expansion happens in the [`Generator`](crate::Generator).

pub mod address;
pub mod company;
pub mod name;
pub mod phone_number;

use crate::category::Category;

/// Every bundled category, in registration order.
pub const ALL: [Category; 4] = [
    name::CATEGORY,
    address::CATEGORY,
    company::CATEGORY,
    phone_number::CATEGORY,
];
