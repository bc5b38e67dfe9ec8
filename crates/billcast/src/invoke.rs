// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Config-driven invocations shared by the CLI and the Lambda handler.
//!
//! Adapters are passed in so each entry point can build real ones and tests
//! can pass mocks.

use std::io::Write;

use billcast_config::BillcastConfig;
use billcast_core::{BillcastError, BillingWindow, CostSource, MessageSink};
use billcast_slack::FormatOptions;
use chrono::{DateTime, Utc};
use tracing::info;

use crate::report::{prepare_report, run_report, PreparedReport, ReportSummary};

/// The billing month containing `now` in the configured offset.
pub fn current_window(
    config: &BillcastConfig,
    now: DateTime<Utc>,
) -> Result<BillingWindow, BillcastError> {
    let offset = config.report.offset().ok_or_else(|| {
        BillcastError::Config(format!(
            "report.utc_offset `{}` is not a UTC offset",
            config.report.utc_offset
        ))
    })?;
    BillingWindow::current(now, offset)
}

/// Report the month containing `now` and deliver it to `sink`.
pub async fn invoke(
    config: &BillcastConfig,
    source: &dyn CostSource,
    sink: &dyn MessageSink,
    now: DateTime<Utc>,
) -> Result<ReportSummary, BillcastError> {
    let window = current_window(config, now)?;
    run_report(source, sink, window, &FormatOptions::from(&config.report)).await
}

/// Build the report for the month containing `now` and write the payload
/// JSON to `out` instead of delivering it.
pub async fn dry_run(
    config: &BillcastConfig,
    source: &dyn CostSource,
    out: &mut (dyn Write + Send),
    now: DateTime<Utc>,
) -> Result<PreparedReport, BillcastError> {
    let window = current_window(config, now)?;
    let prepared = prepare_report(source, window, &FormatOptions::from(&config.report)).await?;

    serde_json::to_writer_pretty(&mut *out, &prepared.payload)?;
    writeln!(out)
        .and_then(|()| out.flush())
        .map_err(|e| BillcastError::Internal(format!("failed to write payload: {e}")))?;

    info!(
        total = %prepared.report.total,
        services = prepared.report.services.len(),
        "dry run, message not posted"
    );
    Ok(prepared)
}

#[cfg(test)]
mod tests {
    use billcast_core::MessagePayload;
    use billcast_test_utils::{MockCostSource, RecordingSink};
    use chrono::TimeZone;
    use rust_decimal_macros::dec;

    use super::*;

    /// 2026-10-31T16:00Z is already November 1st in Tokyo.
    fn month_end_utc() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 31, 16, 0, 0).unwrap()
    }

    #[test]
    fn window_uses_configured_offset() {
        let mut config = BillcastConfig::default();
        let window = current_window(&config, month_end_utc()).unwrap();
        assert_eq!(window.start_param(), "2026-11-01");
        assert_eq!(window.end_param(), "2026-11-30");

        config.report.utc_offset = "+00:00".to_string();
        let window = current_window(&config, month_end_utc()).unwrap();
        assert_eq!(window.start_param(), "2026-10-01");
    }

    #[test]
    fn bad_offset_is_config_error() {
        let mut config = BillcastConfig::default();
        config.report.utc_offset = "Asia/Tokyo".to_string();
        let err = current_window(&config, month_end_utc()).unwrap_err();
        assert!(matches!(err, BillcastError::Config(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn invoke_delivers_for_the_current_month() {
        let source = MockCostSource::with_pairs(&[("EC2", "3.00"), ("S3", "1.50")]);
        let sink = RecordingSink::new();

        let summary = invoke(&BillcastConfig::default(), &source, &sink, month_end_utc())
            .await
            .unwrap();

        assert_eq!(summary.total, dec!(4.50));
        assert_eq!(summary.sections, 2);
        assert_eq!(sink.delivered_count().await, 1);
        assert_eq!(source.requested_windows().await[0].start_param(), "2026-11-01");
    }

    #[tokio::test]
    async fn invoke_surfaces_fetch_errors() {
        let source = MockCostSource::failing("ExpiredTokenException");
        let sink = RecordingSink::new();

        let err = invoke(&BillcastConfig::default(), &source, &sink, month_end_utc())
            .await
            .unwrap_err();

        assert!(matches!(err, BillcastError::Fetch { .. }));
        assert_eq!(sink.delivered_count().await, 0);
    }

    #[tokio::test]
    async fn dry_run_writes_payload_json() {
        let source = MockCostSource::with_pairs(&[("EC2", "3.00")]);
        let mut out = Vec::new();

        let prepared = dry_run(&BillcastConfig::default(), &source, &mut out, month_end_utc())
            .await
            .unwrap();

        let written: MessagePayload = serde_json::from_slice(&out).unwrap();
        assert_eq!(written, prepared.payload);
        assert_eq!(written.blocks.len(), 2);
        assert!(out.ends_with(b"\n"));
    }

    #[tokio::test]
    async fn dry_run_failure_writes_nothing() {
        let source = MockCostSource::failing("AccessDeniedException");
        let mut out = Vec::new();

        let err = dry_run(&BillcastConfig::default(), &source, &mut out, month_end_utc())
            .await
            .unwrap_err();

        assert!(matches!(err, BillcastError::Fetch { .. }));
        assert!(out.is_empty());
    }
}
