// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The report pipeline: fetch, aggregate, format, deliver.
//!
//! Stages run strictly in order and any fatal error stops the run before
//! anything is sent.

use billcast_core::{
    BillcastError, BillingWindow, CostReport, CostSource, MessagePayload, MessageSink,
};
use billcast_cost::build_report;
use billcast_slack::{format_report, FormatOptions};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{info, warn};

/// A report that has been fetched and formatted but not yet delivered.
#[derive(Debug, Clone)]
pub struct PreparedReport {
    pub report: CostReport,
    pub payload: MessagePayload,
}

/// Outcome of a delivered report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub window: BillingWindow,
    pub total: Decimal,
    pub services: usize,
    /// Blocks in the message, header included.
    pub sections: usize,
    pub skipped: usize,
}

impl From<&PreparedReport> for ReportSummary {
    fn from(prepared: &PreparedReport) -> Self {
        Self {
            window: prepared.report.window,
            total: prepared.report.total,
            services: prepared.report.services.len(),
            sections: prepared.payload.blocks.len(),
            skipped: prepared.report.skipped,
        }
    }
}

/// Fetch, aggregate, and format without delivering.
pub async fn prepare_report(
    source: &dyn CostSource,
    window: BillingWindow,
    options: &FormatOptions,
) -> Result<PreparedReport, BillcastError> {
    info!(%window, source = source.name(), "fetching service costs");
    let services = source.fetch(&window).await?;

    let report = build_report(window, services);
    if report.skipped > 0 {
        warn!(
            skipped = report.skipped,
            "some service amounts were unparseable and counted as zero"
        );
    }

    let payload = format_report(report.total, &report.services, options);
    Ok(PreparedReport { report, payload })
}

/// Run one full invocation against `source` and `sink`.
pub async fn run_report(
    source: &dyn CostSource,
    sink: &dyn MessageSink,
    window: BillingWindow,
    options: &FormatOptions,
) -> Result<ReportSummary, BillcastError> {
    let prepared = prepare_report(source, window, options).await?;

    sink.deliver(&prepared.payload).await?;

    let summary = ReportSummary::from(&prepared);
    info!(
        %window,
        sink = sink.name(),
        total = %summary.total,
        services = summary.services,
        sections = summary.sections,
        "report delivered"
    );
    Ok(summary)
}
