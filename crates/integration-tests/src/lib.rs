//! Integration tests for the fundraiser storefront.
//!
//! These tests drive a running storefront over plain HTTP and are ignored
//! by default. Start the server against a backend API first:
//!
//! ```bash
//! BACKEND_API_URL=https://backend.example.com/api \
//!     cargo run -p fundraiser-storefront
//!
//! cargo test -p fundraiser-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `storefront_health` - Liveness and readiness probes
//! - `storefront_order` - Order form, draft quantities, submission
//! - `storefront_catalog` - Product management screen and editor modal
//! - `storefront_dashboard` - Recent orders dashboard

use reqwest::Client;

/// Base URL for the storefront (configurable via environment).
#[must_use]
pub fn storefront_base_url() -> String {
    std::env::var("STOREFRONT_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string())
}

/// HTTP client with a cookie store, so order drafts stick to one session
/// across requests the way a browser would.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn session_client() -> Client {
    Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}
