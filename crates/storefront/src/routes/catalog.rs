//! Product management route handlers.
//!
//! Create and edit go through a modal rendered as an HTMX fragment into the
//! `#product-modal` container; acknowledged mutations retarget the response
//! at `#catalog-content`, which is rebuilt from a fresh catalog fetch. The
//! screen is live at `/products` but deliberately absent from navigation.

use std::collections::HashMap;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{AppendHeaders, Html, IntoResponse, Response},
};
use tracing::instrument;
use validator::Validate;

use fundraiser_core::ProductId;

use crate::api::types::{Product, ProductPayload};
use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::forms::{self, ProductForm};
use crate::state::AppState;

/// One product row in the management table.
#[derive(Clone)]
pub struct CatalogRowView {
    pub id: i32,
    pub number: String,
    pub description: String,
    pub price: String,
}

impl From<&Product> for CatalogRowView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.as_i32(),
            number: product.product_number.to_string(),
            description: product.product_description.clone(),
            price: product.price.to_string(),
        }
    }
}

/// Catalog table display data with its banner slots.
#[derive(Clone)]
pub struct CatalogContentView {
    pub rows: Vec<CatalogRowView>,
    pub toast: Option<String>,
    pub error: Option<String>,
    pub load_error: Option<String>,
}

impl CatalogContentView {
    fn build(products: &[Product], toast: Option<String>, error: Option<String>) -> Self {
        Self {
            rows: products.iter().map(CatalogRowView::from).collect(),
            toast,
            error,
            load_error: None,
        }
    }

    fn load_failed(toast: Option<String>) -> Self {
        Self {
            rows: Vec::new(),
            toast,
            error: None,
            load_error: Some("Failed to load products".to_string()),
        }
    }
}

/// Product editor display data: field values, inline errors, banner.
///
/// `product_id` distinguishes edit from create and carries the update URL.
#[derive(Clone, Default)]
pub struct ProductFormView {
    pub product_id: Option<i32>,
    pub product_number: String,
    pub product_description: String,
    pub price: String,
    pub product_number_error: Option<String>,
    pub product_description_error: Option<String>,
    pub price_error: Option<String>,
    pub error: Option<String>,
}

impl ProductFormView {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: Some(product.id.as_i32()),
            product_number: product.product_number.to_string(),
            product_description: product.product_description.clone(),
            price: product.price.amount().to_string(),
            ..Self::default()
        }
    }

    fn from_form(form: &ProductForm, product_id: Option<i32>) -> Self {
        Self {
            product_id,
            product_number: form.product_number.clone(),
            product_description: form.product_description.clone(),
            price: form.price.clone(),
            ..Self::default()
        }
    }

    fn with_errors(
        form: &ProductForm,
        product_id: Option<i32>,
        mut errors: HashMap<String, String>,
    ) -> Self {
        Self {
            product_number_error: errors.remove("product_number"),
            product_description_error: errors.remove("product_description"),
            price_error: errors.remove("price"),
            ..Self::from_form(form, product_id)
        }
    }

    fn with_banner(form: &ProductForm, product_id: Option<i32>, message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::from_form(form, product_id)
        }
    }
}

/// Product management page template.
#[derive(Template, WebTemplate)]
#[template(path = "catalog/index.html")]
pub struct CatalogIndexTemplate {
    pub content: CatalogContentView,
}

/// Catalog content fragment template (table + banners, HTMX swap target).
#[derive(Template, WebTemplate)]
#[template(path = "partials/catalog_content.html")]
pub struct CatalogContentTemplate {
    pub content: CatalogContentView,
}

/// Product editor modal fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/product_modal.html")]
pub struct ProductModalTemplate {
    pub form: ProductFormView,
}

/// Display the product management page.
///
/// GET /products
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> CatalogIndexTemplate {
    match state.api().get_products().await {
        Ok(products) => CatalogIndexTemplate {
            content: CatalogContentView::build(&products, None, None),
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to load products for management");
            CatalogIndexTemplate {
                content: CatalogContentView::load_failed(None),
            }
        }
    }
}

/// Open the create-product modal (HTMX).
///
/// GET /products/new
#[instrument]
pub async fn new_product() -> ProductModalTemplate {
    ProductModalTemplate {
        form: ProductFormView::default(),
    }
}

/// Open the edit-product modal prefilled from the catalog (HTMX).
///
/// GET /products/{id}/edit
#[instrument(skip(state), fields(product_id = id))]
pub async fn edit_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<ProductModalTemplate> {
    let products = state.api().get_products().await?;
    let product = products
        .iter()
        .find(|p| p.id == ProductId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;

    Ok(ProductModalTemplate {
        form: ProductFormView::from_product(product),
    })
}

/// Close the modal without saving (HTMX).
///
/// GET /products/close
pub async fn close_modal() -> Html<&'static str> {
    Html("")
}

/// Create a product (HTMX).
///
/// POST /products
#[instrument(skip(state))]
pub async fn create(
    State(state): State<AppState>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    if let Err(validation) = form.validate() {
        let errors = forms::field_errors(&validation);
        return Ok(ProductModalTemplate {
            form: ProductFormView::with_errors(&form, None, errors),
        }
        .into_response());
    }

    let payload = ProductPayload::try_from(&form)?;
    match state.api().create_product(&payload).await {
        Ok(created) => {
            add_breadcrumb(
                "catalog",
                "Product created",
                Some(&[("product_id", &created.id.to_string())]),
            );
            Ok(content_after_mutation(&state, "Product created successfully!").await)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create product");
            let message = e
                .server_message()
                .map_or_else(|| "Failed to save product".to_string(), ToString::to_string);
            Ok(ProductModalTemplate {
                form: ProductFormView::with_banner(&form, None, message),
            }
            .into_response())
        }
    }
}

/// Update a product (HTMX).
///
/// PUT /products/{id}
#[instrument(skip(state), fields(product_id = id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Form(form): Form<ProductForm>,
) -> Result<Response> {
    if let Err(validation) = form.validate() {
        let errors = forms::field_errors(&validation);
        return Ok(ProductModalTemplate {
            form: ProductFormView::with_errors(&form, Some(id), errors),
        }
        .into_response());
    }

    let payload = ProductPayload::try_from(&form)?;
    match state.api().update_product(ProductId::new(id), &payload).await {
        Ok(_updated) => {
            add_breadcrumb(
                "catalog",
                "Product updated",
                Some(&[("product_id", &id.to_string())]),
            );
            Ok(content_after_mutation(&state, "Product updated successfully!").await)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to update product");
            let message = e
                .server_message()
                .map_or_else(|| "Failed to save product".to_string(), ToString::to_string);
            Ok(ProductModalTemplate {
                form: ProductFormView::with_banner(&form, Some(id), message),
            }
            .into_response())
        }
    }
}

/// Delete a product after browser confirmation (HTMX).
///
/// DELETE /products/{id}
///
/// The row disappears only once the backend acknowledges; failure leaves
/// the refetched list intact under an error banner.
#[instrument(skip(state), fields(product_id = id))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<i32>) -> CatalogContentTemplate {
    let (toast, error) = match state.api().delete_product(ProductId::new(id)).await {
        Ok(()) => {
            add_breadcrumb(
                "catalog",
                "Product deleted",
                Some(&[("product_id", &id.to_string())]),
            );
            (Some("Product deleted successfully!".to_string()), None)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to delete product");
            let message = e.server_message().map_or_else(
                || "Failed to delete product".to_string(),
                ToString::to_string,
            );
            (None, Some(message))
        }
    };

    match state.api().get_products().await {
        Ok(products) => CatalogContentTemplate {
            content: CatalogContentView::build(&products, toast, error),
        },
        Err(e) => {
            tracing::error!(error = %e, "Failed to reload products after delete");
            CatalogContentTemplate {
                content: CatalogContentView::load_failed(toast),
            }
        }
    }
}

/// Rebuild the catalog content from an authoritative fetch and retarget the
/// response at the content container, closing the modal.
async fn content_after_mutation(state: &AppState, toast: &str) -> Response {
    let content = match state.api().get_products().await {
        Ok(products) => CatalogContentView::build(&products, Some(toast.to_string()), None),
        Err(e) => {
            tracing::error!(error = %e, "Failed to reload products after save");
            CatalogContentView::load_failed(Some(toast.to_string()))
        }
    };

    (
        AppendHeaders([("HX-Retarget", "#catalog-content"), ("HX-Reswap", "outerHTML")]),
        CatalogContentTemplate { content },
    )
        .into_response()
}
