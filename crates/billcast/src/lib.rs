// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! billcast - posts this month's AWS charges per service to Slack.
//!
//! The binaries wire configuration to [`invoke::invoke`]; the pipeline
//! itself lives here so it can be driven with mock adapters in tests.

pub mod invoke;
#[cfg(feature = "lambda")]
pub mod lambda;
pub mod logging;
pub mod report;

pub use invoke::{current_window, dry_run, invoke};
pub use logging::init_tracing;
pub use report::{prepare_report, run_report, PreparedReport, ReportSummary};
