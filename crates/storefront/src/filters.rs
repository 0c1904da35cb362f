//! Custom Askama template filters.
//!
//! Registered on templates via `use crate::filters;` next to the derive.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the build-time content hash of main.css for cache busting.
///
/// `build.rs` hashes the stylesheet and exposes it as `CSS_HASH`; the derived
/// file is served as `main.<hash>.css`.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Returns the current year, for the footer copyright line.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
