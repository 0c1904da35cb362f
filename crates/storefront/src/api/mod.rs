//! Fundraiser backend API client.
//!
//! All persistence lives behind a remote HTTP API; every screen loads its
//! data through this module and forwards mutations to it. The client is
//! deliberately thin, with no caching and no retries. A failed request
//! surfaces once to the screen that issued it.

pub mod client;
pub mod types;

pub use client::FundraiserClient;

use thiserror::Error;

/// Errors that can occur when talking to the fundraiser backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed before a response arrived.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned an error response.
    ///
    /// `message` carries the backend's `error` field when the failure body
    /// had one, and is empty otherwise.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// The server-provided error message, when the failure body carried one.
    ///
    /// Screens show this verbatim and fall back to a generic message when it
    /// is absent.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { message, .. } if !message.is_empty() => Some(message.as_str()),
            _ => None,
        }
    }
}
