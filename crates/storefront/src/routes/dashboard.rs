//! Sales dashboard route handlers.
//!
//! Read-only view over the orders backend, truncated to the most recent
//! orders client-side. The orders backend is a separate deployment from the
//! product catalog, hence the dedicated client.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use tracing::instrument;

use crate::api::types::OrderSummary;
use crate::filters;
use crate::state::AppState;

/// How many orders the dashboard shows, newest first by list order.
const RECENT_ORDERS_LIMIT: usize = 20;

/// One order row on the dashboard.
///
/// The backend's order shape only reliably carries the identifier and the
/// customer reference; the remaining columns render blank.
#[derive(Clone)]
pub struct OrderRowView {
    pub id: i32,
    pub customer: String,
}

impl From<&OrderSummary> for OrderRowView {
    fn from(order: &OrderSummary) -> Self {
        Self {
            id: order.id.as_i32(),
            customer: order
                .customer_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        }
    }
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/index.html")]
pub struct DashboardTemplate {
    pub orders: Vec<OrderRowView>,
    pub load_error: Option<String>,
}

/// Display the sales dashboard.
///
/// GET /dashboard
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> DashboardTemplate {
    match state.orders_api().list_orders().await {
        Ok(orders) => DashboardTemplate {
            orders: orders
                .iter()
                .take(RECENT_ORDERS_LIMIT)
                .map(OrderRowView::from)
                .collect(),
            load_error: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to load orders for the dashboard");
            DashboardTemplate {
                orders: Vec::new(),
                load_error: Some("Failed to load dashboard data".to_string()),
            }
        }
    }
}
