//! Shared building blocks for the shop crates: logging setup, the health
//! payload and startup directory helpers.

pub mod types;
pub mod utils;
pub mod env;
