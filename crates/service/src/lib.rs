//! Service layer providing the shop's catalog and order operations on top of models.
//! - Turns loosely-typed JSON payloads into validated model inputs.
//! - Maps lookups that miss into `ServiceError::NotFound`.
//! - Owns the first-run seeding of the catalog.

pub mod errors;
pub mod input;
pub mod pagination;
pub mod product_service;
pub mod order_service;
pub mod bootstrap;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
