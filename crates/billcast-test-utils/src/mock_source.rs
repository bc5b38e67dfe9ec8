// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock cost source for deterministic testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use billcast_core::{BillcastError, BillingWindow, CostSource, ServiceCost};

/// A cost source that returns a canned service list or a fetch error.
///
/// Every requested window is recorded for assertions.
#[derive(Clone)]
pub struct MockCostSource {
    result: Result<Vec<ServiceCost>, String>,
    requested: Arc<Mutex<Vec<BillingWindow>>>,
}

impl MockCostSource {
    /// Source that returns `services` from every fetch.
    pub fn with_services(services: Vec<ServiceCost>) -> Self {
        Self {
            result: Ok(services),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Convenience for `(service, amount)` pairs.
    pub fn with_pairs(pairs: &[(&str, &str)]) -> Self {
        Self::with_services(
            pairs
                .iter()
                .map(|(service, amount)| ServiceCost::new(*service, *amount))
                .collect(),
        )
    }

    /// Source whose fetch always fails with `BillcastError::Fetch`.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            result: Err(message.into()),
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Windows passed to `fetch()`, in call order.
    pub async fn requested_windows(&self) -> Vec<BillingWindow> {
        self.requested.lock().await.clone()
    }
}

#[async_trait]
impl CostSource for MockCostSource {
    fn name(&self) -> &str {
        "mock-source"
    }

    async fn fetch(&self, window: &BillingWindow) -> Result<Vec<ServiceCost>, BillcastError> {
        self.requested.lock().await.push(*window);
        self.result.clone().map_err(BillcastError::fetch)
    }
}
