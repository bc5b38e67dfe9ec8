// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cost source trait for billing API integrations.

use async_trait::async_trait;

use crate::error::BillcastError;
use crate::types::ServiceCost;
use crate::window::BillingWindow;

/// Supplies per-service charges for a billing window.
#[async_trait]
pub trait CostSource: Send + Sync {
    /// Human-readable name used in logs.
    fn name(&self) -> &str;

    /// Fetch the window's charges grouped by service, in upstream order.
    ///
    /// Returns [`BillcastError::Fetch`] when the query fails or the response
    /// has no usable time bucket. An empty list is a valid result.
    async fn fetch(&self, window: &BillingWindow) -> Result<Vec<ServiceCost>, BillcastError>;
}
