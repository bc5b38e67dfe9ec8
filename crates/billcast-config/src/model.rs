// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for billcast.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// Top-level billcast configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BillcastConfig {
    /// Logging settings.
    #[serde(default)]
    pub log: LogConfig,

    /// Report window and header settings.
    #[serde(default)]
    pub report: ReportConfig,

    /// AWS Cost Explorer settings.
    #[serde(default)]
    pub aws: AwsConfig,

    /// Slack webhook delivery settings.
    #[serde(default)]
    pub slack: SlackConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Report configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// UTC offset in which "this month" is evaluated, e.g. `+09:00`.
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,

    /// Link target for the header line.
    #[serde(default = "default_console_url")]
    pub console_url: String,
}

impl ReportConfig {
    /// Parsed reference offset, or `None` if `utc_offset` is malformed.
    ///
    /// Validation rejects malformed offsets, so a validated config always
    /// returns `Some`.
    pub fn offset(&self) -> Option<FixedOffset> {
        self.utc_offset.trim().parse().ok()
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            utc_offset: default_utc_offset(),
            console_url: default_console_url(),
        }
    }
}

fn default_utc_offset() -> String {
    // Asia/Tokyo; no DST so a fixed offset is exact.
    "+09:00".to_string()
}

fn default_console_url() -> String {
    "https://console.aws.amazon.com/billing/home".to_string()
}

/// AWS Cost Explorer configuration.
///
/// Credentials come from the SDK's default provider chain.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AwsConfig {
    /// Region for the Cost Explorer endpoint.
    #[serde(default = "default_region")]
    pub region: String,

    /// Override for the Cost Explorer endpoint URL.
    #[serde(default)]
    pub endpoint_url: Option<String>,
}

impl Default for AwsConfig {
    fn default() -> Self {
        Self {
            region: default_region(),
            endpoint_url: None,
        }
    }
}

fn default_region() -> String {
    "us-east-1".to_string()
}

/// Slack webhook configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SlackConfig {
    /// Incoming webhook URL. Required unless running with `--dry-run`.
    #[serde(default)]
    pub webhook_url: Option<String>,

    /// HTTP timeout for the webhook POST, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            webhook_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    30
}
