// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn a cost report into a Block Kit message.
//!
//! The message is one header section with the console link and the total,
//! followed by the services two per section in upstream order. Formatting is
//! pure and cannot fail.

use billcast_config::model::ReportConfig;
use billcast_core::{MessagePayload, SectionBlock, ServiceCost, TextObject};
use rust_decimal::{Decimal, RoundingStrategy};

/// Suffix appended to every amount.
pub const CURRENCY: &str = "USD";

/// Maximum fields Block Kit renders side by side in one section.
pub const FIELDS_PER_SECTION: usize = 2;

const CONSOLE_LABEL: &str = "AWS Billing Management Console";

/// Options that shape the header line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    pub console_url: String,
}

impl From<&ReportConfig> for FormatOptions {
    fn from(config: &ReportConfig) -> Self {
        Self {
            console_url: config.console_url.clone(),
        }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::from(&ReportConfig::default())
    }
}

/// Build the message for a total and its per-service breakdown.
pub fn format_report(
    total: Decimal,
    services: &[ServiceCost],
    options: &FormatOptions,
) -> MessagePayload {
    let header = SectionBlock::text(TextObject::mrkdwn(format!(
        "<{}|{CONSOLE_LABEL}>\n*Total Cost(Monthly)* : {} {CURRENCY}",
        options.console_url,
        money(total)
    )));

    let units: Vec<TextObject> = services.iter().map(service_text).collect();

    let mut blocks = Vec::with_capacity(1 + units.len().div_ceil(FIELDS_PER_SECTION));
    blocks.push(header);
    blocks.extend(
        chunk_pairs(&units)
            .into_iter()
            .map(|pair| SectionBlock::fields(pair.to_vec())),
    );

    MessagePayload { blocks }
}

/// Display unit for one service: bold name, amount on the next line.
pub fn service_text(cost: &ServiceCost) -> TextObject {
    TextObject::mrkdwn(format!(
        "*{}*\n{} {CURRENCY}",
        cost.service,
        money(cost.amount_or_zero())
    ))
}

/// Split `items` into consecutive groups of at most two, keeping order.
///
/// An odd-length input ends with a one-element group.
pub fn chunk_pairs<T>(items: &[T]) -> Vec<&[T]> {
    items.chunks(FIELDS_PER_SECTION).collect()
}

/// Two decimal places, half away from zero.
fn money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.2}")
}
