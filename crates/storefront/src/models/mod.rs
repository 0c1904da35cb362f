//! Domain models for the storefront.

pub mod draft;
pub mod session;

pub use draft::{DraftError, OrderDraft};
