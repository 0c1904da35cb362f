//! Core types for the fundraiser storefront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product_number;

pub use id::*;
pub use price::Price;
pub use product_number::{ProductNumber, ProductNumberError};
