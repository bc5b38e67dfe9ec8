// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slack output for billcast: Block Kit formatting and webhook delivery.

pub mod format;
pub mod webhook;

pub use format::{chunk_pairs, format_report, FormatOptions};
pub use webhook::SlackWebhook;
