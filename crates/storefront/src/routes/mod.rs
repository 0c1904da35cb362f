//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Order form
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the backend)
//!
//! # Order (HTMX fragments)
//! POST /order                  - Place the order (returns order screen)
//! POST /order/items            - Update a draft quantity (returns product table)
//!
//! # Dashboard
//! GET  /dashboard              - Recent orders
//!
//! # Catalog management (not linked from navigation)
//! GET    /products             - Product management page
//! POST   /products             - Create product (modal form)
//! GET    /products/new         - Create-product modal (fragment)
//! GET    /products/close       - Close the modal (empty fragment)
//! PUT    /products/{id}        - Update product (modal form)
//! DELETE /products/{id}        - Delete product (after hx-confirm)
//! GET    /products/{id}/edit   - Edit-product modal (fragment)
//! ```

pub mod catalog;
pub mod dashboard;
pub mod order;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::state::AppState;

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(order::show))
        .route("/order", post(order::submit))
        .route("/order/items", post(order::update_items))
}

/// Create the catalog management routes router.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::index).post(catalog::create))
        .route("/new", get(catalog::new_product))
        .route("/close", get(catalog::close_modal))
        .route("/{id}", put(catalog::update).delete(catalog::delete))
        .route("/{id}/edit", get(catalog::edit_product))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(order_routes())
        .route("/dashboard", get(dashboard::index))
        .nest("/products", catalog_routes())
}
