//! Order form route handlers.
//!
//! The order screen renders the product catalog with the visitor's
//! session-held draft quantities. Quantity changes post back over HTMX and
//! swap the product table; placing the order swaps the whole screen.
//! Prices always come from the product list fetched for the current render,
//! never from the draft.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;
use validator::Validate;

use fundraiser_core::{Price, ProductId};

use crate::api::types::{Customer, OrderRequest, Product};
use crate::error::{Result, add_breadcrumb};
use crate::filters;
use crate::forms::{self, CustomerForm};
use crate::models::OrderDraft;
use crate::models::session::{clear_draft, load_draft, save_draft};
use crate::state::AppState;

/// Customer input display data: submitted values plus inline errors.
#[derive(Clone, Default)]
pub struct CustomerFieldsView {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
    pub first_name_error: Option<String>,
    pub last_name_error: Option<String>,
    pub phone_error: Option<String>,
    pub email_error: Option<String>,
    pub address_error: Option<String>,
}

impl CustomerFieldsView {
    /// Submitted values with no field errors (retry after a server failure).
    fn from_values(form: &CustomerForm) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            phone: form.phone.clone(),
            email: form.email.clone(),
            address: form.address.clone(),
            ..Self::default()
        }
    }

    /// Submitted values with per-field validation messages.
    fn with_errors(form: &CustomerForm, mut errors: HashMap<String, String>) -> Self {
        Self {
            first_name_error: errors.remove("first_name"),
            last_name_error: errors.remove("last_name"),
            phone_error: errors.remove("phone"),
            email_error: errors.remove("email"),
            address_error: errors.remove("address"),
            ..Self::from_values(form)
        }
    }
}

/// One catalog row on the order form.
#[derive(Clone)]
pub struct ProductRowView {
    pub id: i32,
    pub number: String,
    pub description: String,
    pub price: String,
    pub quantity: u32,
    pub subtotal: String,
}

/// Product table plus the computed grand total.
#[derive(Clone)]
pub struct OrderTableView {
    pub rows: Vec<ProductRowView>,
    pub grand_total: String,
}

impl OrderTableView {
    fn build(products: &[Product], draft: &OrderDraft) -> Self {
        let rows = products
            .iter()
            .map(|product| ProductRowView {
                id: product.id.as_i32(),
                number: product.product_number.to_string(),
                description: product.product_description.clone(),
                price: product.price.to_string(),
                quantity: draft.quantity(product.id).unwrap_or(0),
                subtotal: draft.subtotal(product).to_string(),
            })
            .collect();

        Self {
            rows,
            grand_total: draft.grand_total(products).to_string(),
        }
    }

    fn empty() -> Self {
        Self {
            rows: Vec::new(),
            grand_total: Price::ZERO.to_string(),
        }
    }
}

/// Quantity change form data.
#[derive(Debug, Deserialize)]
pub struct QuantityForm {
    pub product_id: i32,
    pub quantity: String,
}

/// Order page template.
#[derive(Template, WebTemplate)]
#[template(path = "order/show.html")]
pub struct OrderShowTemplate {
    pub form: CustomerFieldsView,
    pub table: OrderTableView,
    pub success: Option<String>,
    pub error: Option<String>,
    pub load_error: Option<String>,
}

/// Order screen fragment template (full-screen swap after a submission).
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_screen.html")]
pub struct OrderScreenTemplate {
    pub form: CustomerFieldsView,
    pub table: OrderTableView,
    pub success: Option<String>,
    pub error: Option<String>,
    pub load_error: Option<String>,
}

/// Product table fragment template (quantity-change swap).
#[derive(Template, WebTemplate)]
#[template(path = "partials/order_table.html")]
pub struct OrderTableTemplate {
    pub table: OrderTableView,
    pub load_error: Option<String>,
}

fn screen(
    form: CustomerFieldsView,
    products: &[Product],
    draft: &OrderDraft,
    success: Option<String>,
    error: Option<String>,
) -> OrderScreenTemplate {
    OrderScreenTemplate {
        form,
        table: OrderTableView::build(products, draft),
        success,
        error,
        load_error: None,
    }
}

/// Display the order form.
///
/// GET /
#[instrument(skip(state, session))]
pub async fn show(State(state): State<AppState>, session: Session) -> Result<OrderShowTemplate> {
    let draft = load_draft(&session).await?;

    match state.api().get_products().await {
        Ok(products) => Ok(OrderShowTemplate {
            form: CustomerFieldsView::default(),
            table: OrderTableView::build(&products, &draft),
            success: None,
            error: None,
            load_error: None,
        }),
        Err(e) => {
            tracing::error!(error = %e, "Failed to load products for the order form");
            Ok(OrderShowTemplate {
                form: CustomerFieldsView::default(),
                table: OrderTableView::empty(),
                success: None,
                error: None,
                load_error: Some("Failed to load products".to_string()),
            })
        }
    }
}

/// Update one product's draft quantity (HTMX).
///
/// POST /order/items
///
/// Returns the re-rendered product table and totals, priced from a fresh
/// catalog fetch. Zero or unparseable quantities clear the entry.
#[instrument(skip(state, session))]
pub async fn update_items(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<QuantityForm>,
) -> Result<OrderTableTemplate> {
    let mut draft = load_draft(&session).await?;
    draft.set_quantity(ProductId::new(form.product_id), &form.quantity);
    save_draft(&session, &draft).await?;

    match state.api().get_products().await {
        Ok(products) => Ok(OrderTableTemplate {
            table: OrderTableView::build(&products, &draft),
            load_error: None,
        }),
        Err(e) => {
            tracing::error!(error = %e, "Failed to reload products for the order table");
            Ok(OrderTableTemplate {
                table: OrderTableView::empty(),
                load_error: Some("Failed to load products".to_string()),
            })
        }
    }
}

/// Place the order (HTMX).
///
/// POST /order
///
/// Field validation and the empty-draft check run before any backend call.
/// Success clears the draft and the form; every failure leaves both intact
/// so the visitor can retry.
#[instrument(skip(state, session, form))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CustomerForm>,
) -> Result<OrderScreenTemplate> {
    let draft = load_draft(&session).await?;

    let products = match state.api().get_products().await {
        Ok(products) => products,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load products during order submission");
            return Ok(OrderScreenTemplate {
                form: CustomerFieldsView::from_values(&form),
                table: OrderTableView::empty(),
                success: None,
                error: None,
                load_error: Some("Failed to load products".to_string()),
            });
        }
    };

    if let Err(validation) = form.validate() {
        let errors = forms::field_errors(&validation);
        return Ok(screen(
            CustomerFieldsView::with_errors(&form, errors),
            &products,
            &draft,
            None,
            None,
        ));
    }

    if draft.is_empty() {
        return Ok(screen(
            CustomerFieldsView::from_values(&form),
            &products,
            &draft,
            None,
            Some("Please add at least one item to your order".to_string()),
        ));
    }

    let items = match draft.to_order_items(&products) {
        Ok(items) => items,
        Err(e) => {
            tracing::warn!(error = %e, "Draft references a product missing from the catalog");
            return Ok(screen(
                CustomerFieldsView::from_values(&form),
                &products,
                &draft,
                None,
                Some("Some items in your order are no longer available".to_string()),
            ));
        }
    };

    let total = draft.grand_total(&products);
    let item_count = items.len().to_string();
    let request = OrderRequest {
        customer: Customer::from(&form),
        items,
    };

    match state.api().create_order(&request).await {
        Ok(()) => {
            clear_draft(&session).await?;
            add_breadcrumb("order", "Order placed", Some(&[("items", &item_count)]));
            tracing::info!(total = %total, "Order placed");
            Ok(screen(
                CustomerFieldsView::default(),
                &products,
                &OrderDraft::new(),
                Some(format!("Order placed successfully! Total: {total}")),
                None,
            ))
        }
        Err(e) => {
            tracing::error!(error = %e, "Order submission failed");
            let message = e
                .server_message()
                .map_or_else(|| "Failed to place order".to_string(), ToString::to_string);
            Ok(screen(
                CustomerFieldsView::from_values(&form),
                &products,
                &draft,
                None,
                Some(message),
            ))
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use fundraiser_core::ProductNumber;

    use super::*;

    fn product(id: i32, number: &str, cents: i64) -> Product {
        Product {
            id: ProductId::new(id),
            product_number: ProductNumber::parse(number).unwrap(),
            product_description: format!("Product {number}"),
            price: Price::from_cents(cents),
        }
    }

    #[test]
    fn test_table_view_rows_follow_draft() {
        let products = vec![product(1, "FUN001", 250), product(2, "FUN002", 500)];
        let mut draft = OrderDraft::new();
        draft.set_quantity(ProductId::new(1), "3");

        let table = OrderTableView::build(&products, &draft);

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[0].quantity, 3);
        assert_eq!(table.rows[0].subtotal, "$7.50");
        assert_eq!(table.rows[1].quantity, 0);
        assert_eq!(table.rows[1].subtotal, "$0.00");
        assert_eq!(table.grand_total, "$7.50");
    }

    #[test]
    fn test_empty_table_view() {
        let table = OrderTableView::empty();
        assert!(table.rows.is_empty());
        assert_eq!(table.grand_total, "$0.00");
    }

    #[test]
    fn test_customer_view_keeps_values_and_maps_errors() {
        let form = CustomerForm {
            first_name: "P".to_string(),
            email: "pat@example.com".to_string(),
            ..CustomerForm::default()
        };
        let validation = form.validate().unwrap_err();

        let view = CustomerFieldsView::with_errors(&form, forms::field_errors(&validation));

        assert_eq!(view.first_name, "P");
        assert_eq!(view.email, "pat@example.com");
        assert_eq!(
            view.first_name_error.as_deref(),
            Some("First name must be at least 2 characters")
        );
        assert!(view.email_error.is_none());
    }
}
