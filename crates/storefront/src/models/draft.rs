//! The in-progress order composition.
//!
//! One visitor builds one order at a time. The draft lives in the session
//! and is the only state shared between requests. Prices are never stored in
//! it; every total is computed against the product list loaded for the
//! current render.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use fundraiser_core::{Price, ProductId};

use crate::api::types::{OrderItem, Product};

/// Highest quantity a single line may carry; matches the order form's
/// declared input range.
pub const MAX_QUANTITY: u32 = 99;

/// Error resolving a draft against the loaded product list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DraftError {
    /// The draft references a product that is no longer in the catalog.
    #[error("unknown product id: {0}")]
    UnknownProduct(ProductId),
}

/// The order a visitor is composing, keyed by product identifier.
///
/// Entries exist only for positive quantities; setting a quantity to zero or
/// to something unparseable removes the entry. `BTreeMap` keeps iteration
/// (and therefore submitted item order) ascending by product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderDraft {
    quantities: BTreeMap<ProductId, u32>,
}

impl OrderDraft {
    /// Create an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the quantity for a product from raw form input.
    ///
    /// A positive integer sets the entry, clamped to [`MAX_QUANTITY`]; zero,
    /// negative, or unparseable input removes it.
    pub fn set_quantity(&mut self, product_id: ProductId, raw_value: &str) {
        match raw_value.trim().parse::<i64>() {
            Ok(value) if value > 0 => {
                let quantity = u32::try_from(value)
                    .unwrap_or(MAX_QUANTITY)
                    .min(MAX_QUANTITY);
                self.quantities.insert(product_id, quantity);
            }
            _ => {
                self.quantities.remove(&product_id);
            }
        }
    }

    /// Quantity currently selected for a product.
    #[must_use]
    pub fn quantity(&self, product_id: ProductId) -> Option<u32> {
        self.quantities.get(&product_id).copied()
    }

    /// True when no products are selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Number of distinct products selected.
    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Line subtotal for a product, zero when it has no entry.
    #[must_use]
    pub fn subtotal(&self, product: &Product) -> Price {
        self.quantity(product.id)
            .map_or(Price::ZERO, |quantity| product.price.times(quantity))
    }

    /// Sum of line subtotals over the loaded product list.
    ///
    /// Iterating all products rather than all entries is equivalent
    /// (unselected products contribute zero) and matches how the order form
    /// renders, one row per catalog product.
    #[must_use]
    pub fn grand_total(&self, products: &[Product]) -> Price {
        products.iter().map(|product| self.subtotal(product)).sum()
    }

    /// Resolve the draft into order items priced from the loaded list.
    ///
    /// # Errors
    ///
    /// Returns [`DraftError::UnknownProduct`] when an entry references a
    /// product missing from the list (stale draft after a catalog change).
    /// Detected before submission so a stale draft never reaches the backend.
    pub fn to_order_items(&self, products: &[Product]) -> Result<Vec<OrderItem>, DraftError> {
        self.quantities
            .iter()
            .map(|(&product_id, &quantity)| {
                let product = products
                    .iter()
                    .find(|p| p.id == product_id)
                    .ok_or(DraftError::UnknownProduct(product_id))?;
                Ok(OrderItem {
                    product_id,
                    quantity,
                    price: product.price,
                })
            })
            .collect()
    }

    /// Drop every selection.
    pub fn clear(&mut self) {
        self.quantities.clear();
    }
}
