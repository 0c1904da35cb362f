//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{ApiError, FundraiserClient};
use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the backend API clients.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    api: FundraiserClient,
    orders_api: FundraiserClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// Builds one API client for the primary backend and one for the orders
    /// backend the dashboard queries (they share a base URL unless configured
    /// otherwise).
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client fails to build.
    pub fn new(config: StorefrontConfig) -> Result<Self, ApiError> {
        let api = FundraiserClient::new(&config.api_base_url)?;
        let orders_api = FundraiserClient::new(&config.orders_base_url)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                orders_api,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the primary fundraiser API client.
    #[must_use]
    pub fn api(&self) -> &FundraiserClient {
        &self.inner.api
    }

    /// Get a reference to the orders backend client used by the dashboard.
    #[must_use]
    pub fn orders_api(&self) -> &FundraiserClient {
        &self.inner.orders_api
    }
}
