//! Session-held storefront state.
//!
//! The visitor's session carries only the in-progress order draft; product
//! and order lists are re-fetched for every render and never stored.

use tower_sessions::Session;

use crate::error::Result;
use crate::models::draft::OrderDraft;

/// Session keys for storefront data.
pub mod keys {
    /// Key for storing the in-progress order draft.
    pub const ORDER_DRAFT: &str = "order_draft";
}

/// Load the visitor's order draft, defaulting to an empty one.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn load_draft(session: &Session) -> Result<OrderDraft> {
    Ok(session
        .get::<OrderDraft>(keys::ORDER_DRAFT)
        .await?
        .unwrap_or_default())
}

/// Persist the visitor's order draft.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn save_draft(session: &Session, draft: &OrderDraft) -> Result<()> {
    session.insert(keys::ORDER_DRAFT, draft).await?;
    Ok(())
}

/// Remove the visitor's order draft.
///
/// # Errors
///
/// Returns an error if the session store fails.
pub async fn clear_draft(session: &Session) -> Result<()> {
    session.remove::<OrderDraft>(keys::ORDER_DRAFT).await?;
    Ok(())
}
