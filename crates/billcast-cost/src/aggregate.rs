// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Reduce per-service charges to a single total.
//!
//! Parsing is permissive: a malformed amount counts as zero and is reported
//! through `Aggregate::skipped` and a `warn!` line instead of failing the
//! report.

use billcast_core::{BillingWindow, CostReport, ServiceCost};
use rust_decimal::Decimal;
use tracing::warn;

/// Sum of all parseable amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Aggregate {
    pub total: Decimal,
    /// Entries whose amount failed to parse or overflowed the total.
    pub skipped: usize,
}

/// Sum the parsed amount of every entry.
pub fn aggregate(services: &[ServiceCost]) -> Aggregate {
    services
        .iter()
        .fold(Aggregate::default(), |mut acc, cost| {
            let Some(amount) = cost.parsed_amount() else {
                warn!(
                    service = %cost.service,
                    amount = %cost.amount,
                    "unparseable cost amount, counting as zero"
                );
                acc.skipped += 1;
                return acc;
            };
            match acc.total.checked_add(amount) {
                Some(total) => acc.total = total,
                None => {
                    warn!(
                        service = %cost.service,
                        amount = %cost.amount,
                        total = %acc.total,
                        "cost amount overflows the running total, counting as zero"
                    );
                    acc.skipped += 1;
                }
            }
            acc
        })
}

/// Aggregate `services` and bundle everything the formatter needs.
pub fn build_report(window: BillingWindow, services: Vec<ServiceCost>) -> CostReport {
    let Aggregate { total, skipped } = aggregate(&services);
    CostReport {
        window,
        total,
        services,
        skipped,
    }
}
