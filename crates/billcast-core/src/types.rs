// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cost data passed between the fetcher, aggregator, and formatter.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::window::BillingWindow;

/// Charges for one billed service in the window.
///
/// The amount is kept as the decimal string the billing API returned so a
/// malformed value can be reported without losing the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCost {
    pub service: String,
    pub amount: String,
}

impl ServiceCost {
    pub fn new(service: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            amount: amount.into(),
        }
    }

    /// Parse the amount as a decimal.
    ///
    /// Accepts plain (`12.34`) and scientific (`1.5E-7`) notation. Thousands
    /// separators and decimal commas are rejected.
    pub fn parsed_amount(&self) -> Option<Decimal> {
        let raw = self.amount.trim();
        if raw.is_empty() || raw.contains(',') {
            return None;
        }
        Decimal::from_str(raw)
            .or_else(|_| Decimal::from_scientific(raw))
            .ok()
    }

    /// Parsed amount, with malformed values counting as zero.
    pub fn amount_or_zero(&self) -> Decimal {
        self.parsed_amount().unwrap_or(Decimal::ZERO)
    }
}

/// Everything the formatter needs for one report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub window: BillingWindow,
    pub total: Decimal,
    /// Upstream order, never re-sorted.
    pub services: Vec<ServiceCost>,
    /// Entries whose amount could not be parsed and were counted as zero.
    pub skipped: usize,
}

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn parses_plain_decimal() {
        assert_eq!(ServiceCost::new("EC2", "60.00").parsed_amount(), Some(dec!(60.00)));
        assert_eq!(ServiceCost::new("EC2", "-0.01").parsed_amount(), Some(dec!(-0.01)));
    }

    #[test]
    fn parses_scientific_notation() {
        let cost = ServiceCost::new("Lambda", "1.5E-7");
        assert_eq!(cost.parsed_amount(), Some(dec!(0.00000015)));
    }

    #[test]
    fn rejects_locale_formats() {
        assert_eq!(ServiceCost::new("S3", "1,234.56").parsed_amount(), None);
        assert_eq!(ServiceCost::new("S3", "12,5").parsed_amount(), None);
    }

    #[test]
    fn malformed_counts_as_zero() {
        let cost = ServiceCost::new("Support", "N/A");
        assert_eq!(cost.parsed_amount(), None);
        assert_eq!(cost.amount_or_zero(), Decimal::ZERO);
        assert_eq!(ServiceCost::new("Tax", "").amount_or_zero(), Decimal::ZERO);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(ServiceCost::new("EC2", " 3.10 ").parsed_amount(), Some(dec!(3.10)));
    }
}
