//! HTTP client for the fundraiser backend.

use std::sync::Arc;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use tracing::instrument;

use fundraiser_core::ProductId;

use super::ApiError;
use super::types::{ErrorResponse, OrderRequest, OrderSummary, Product, ProductPayload};

/// Maximum response-body length included in log output.
const MAX_LOGGED_BODY: usize = 500;

/// Client for the fundraiser backend API.
///
/// Cheap to clone; the underlying connection pool is shared. One instance
/// exists per configured backend (the primary API and, when configured
/// separately, the orders backend).
#[derive(Clone)]
pub struct FundraiserClient {
    inner: Arc<FundraiserClientInner>,
}

struct FundraiserClientInner {
    client: reqwest::Client,
    base_url: String,
}

impl FundraiserClient {
    /// Create a new client for the given base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            inner: Arc::new(FundraiserClientInner {
                client,
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        })
    }

    /// Fetch the full product catalog.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    #[instrument(skip(self))]
    pub async fn get_products(&self) -> Result<Vec<Product>, ApiError> {
        let url = format!("{}/api/products", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        parse_json(response).await
    }

    /// Submit a completed order.
    ///
    /// Only the response status matters to callers; the created order record
    /// is not read.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects the order.
    #[instrument(skip(self, request), fields(items = request.items.len()))]
    pub async fn create_order(&self, request: &OrderRequest) -> Result<(), ApiError> {
        let url = format!("{}/api/orderproducts", self.inner.base_url);
        let response = self.inner.client.post(&url).json(request).send().await?;
        expect_success(response).await
    }

    /// Create a catalog product, returning the created record.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects the product.
    #[instrument(skip(self, payload), fields(product_number = %payload.product_number))]
    pub async fn create_product(&self, payload: &ProductPayload) -> Result<Product, ApiError> {
        let url = format!("{}/api/products", self.inner.base_url);
        let response = self.inner.client.post(&url).json(payload).send().await?;
        parse_json(response).await
    }

    /// Update a catalog product, returning the updated record.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend rejects the update.
    #[instrument(skip(self, payload), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: ProductId,
        payload: &ProductPayload,
    ) -> Result<Product, ApiError> {
        let url = format!("{}/api/products/{id}", self.inner.base_url);
        let response = self.inner.client.put(&url).json(payload).send().await?;
        parse_json(response).await
    }

    /// Delete a catalog product.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the backend refuses the delete.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ApiError> {
        let url = format!("{}/api/products/{id}", self.inner.base_url);
        let response = self.inner.client.delete(&url).send().await?;
        expect_success(response).await
    }

    /// Fetch the order list for the sales dashboard.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the response cannot be parsed.
    #[instrument(skip(self))]
    pub async fn list_orders(&self) -> Result<Vec<OrderSummary>, ApiError> {
        let url = format!("{}/api/orders", self.inner.base_url);
        let response = self.inner.client.get(&url).send().await?;
        parse_json(response).await
    }
}

/// Check the response status and decode the JSON body.
async fn parse_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(error_from_response(status, response).await);
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::error!(
            error = %e,
            body = %truncate_body(&body),
            "Failed to parse backend response"
        );
        ApiError::Parse(e.to_string())
    })
}

/// Check the response status, discarding the body on success.
async fn expect_success(response: reqwest::Response) -> Result<(), ApiError> {
    let status = response.status();
    if !status.is_success() {
        return Err(error_from_response(status, response).await);
    }
    Ok(())
}

/// Build an [`ApiError::Api`] from a failed response, extracting the
/// backend's `error` field when the body carries one.
async fn error_from_response(status: StatusCode, response: reqwest::Response) -> ApiError {
    let body = response.text().await.unwrap_or_default();
    tracing::error!(
        status = status.as_u16(),
        body = %truncate_body(&body),
        "Backend request failed"
    );

    let message = serde_json::from_str::<ErrorResponse>(&body)
        .map(|e| e.error)
        .unwrap_or_default();

    ApiError::Api {
        status: status.as_u16(),
        message,
    }
}

/// Truncate a response body for log output.
fn truncate_body(body: &str) -> String {
    body.chars().take(MAX_LOGGED_BODY).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_body_short_passthrough() {
        assert_eq!(truncate_body("{\"error\":\"nope\"}"), "{\"error\":\"nope\"}");
    }

    #[test]
    fn test_truncate_body_long_input() {
        let body = "x".repeat(2000);
        assert_eq!(truncate_body(&body).len(), MAX_LOGGED_BODY);
    }

    #[test]
    fn test_truncate_body_multibyte_safe() {
        let body = "é".repeat(600);
        assert_eq!(truncate_body(&body).chars().count(), MAX_LOGGED_BODY);
    }
}
