// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for billcast.

use thiserror::Error;

/// The primary error type used across the billcast pipeline.
///
/// Every fatal error aborts the invocation and is surfaced to whatever
/// scheduler started the job. Malformed cost amounts are not errors; they are
/// counted and logged by the aggregator instead.
#[derive(Debug, Error)]
pub enum BillcastError {
    /// Configuration errors (missing webhook URL, invalid offset, bad TOML).
    #[error("configuration error: {0}")]
    Config(String),

    /// The billing query failed or returned no usable time bucket.
    #[error("fetch error: {message}")]
    Fetch {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The messaging endpoint rejected the message or could not be reached.
    #[error("delivery error: {message}")]
    Delivery {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Payload encoding failed.
    #[error("serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl BillcastError {
    /// Builds a [`BillcastError::Fetch`] without an underlying cause.
    pub fn fetch(message: impl Into<String>) -> Self {
        Self::Fetch {
            message: message.into(),
            source: None,
        }
    }

    /// Builds a [`BillcastError::Delivery`] without an underlying cause.
    pub fn delivery(message: impl Into<String>) -> Self {
        Self::Delivery {
            message: message.into(),
            source: None,
        }
    }
}
