// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./billcast.toml` > `~/.config/billcast/billcast.toml` >
//! `/etc/billcast/billcast.toml` with environment variable overrides via `BILLCAST_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::BillcastConfig;

/// Local config file name, also used under the XDG and system directories.
pub const CONFIG_FILE: &str = "billcast.toml";

/// System-wide config path.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/billcast/billcast.toml";

/// Webhook variable read for compatibility with existing deployments.
pub const LEGACY_WEBHOOK_ENV: &str = "SLACK_WEBHOOK_URL";

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/billcast/billcast.toml` (system-wide)
/// 3. `~/.config/billcast/billcast.toml` (user XDG config)
/// 4. `./billcast.toml` (local directory)
/// 5. `SLACK_WEBHOOK_URL`
/// 6. `BILLCAST_*` environment variables
pub fn load_config() -> Result<BillcastConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<BillcastConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BillcastConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BillcastConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BillcastConfig::default()))
        .merge(Toml::file(path))
        .merge(legacy_env_provider())
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(BillcastConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(legacy_env_provider())
        .merge(env_provider())
}

/// `~/.config/billcast/billcast.toml`, if the platform has a config dir.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("billcast").join(CONFIG_FILE))
}

/// Map `BILLCAST_<SECTION>_<KEY>` onto `<section>.<key>`.
///
/// Uses `Env::map()` rather than `Env::split("_")` because key names contain
/// underscores: `BILLCAST_SLACK_WEBHOOK_URL` must become `slack.webhook_url`.
fn env_provider() -> Env {
    Env::prefixed("BILLCAST_").map(|key| {
        let mapped = key
            .as_str()
            .replacen("log_", "log.", 1)
            .replacen("report_", "report.", 1)
            .replacen("aws_", "aws.", 1)
            .replacen("slack_", "slack.", 1);
        mapped.into()
    })
}

/// `SLACK_WEBHOOK_URL` -> `slack.webhook_url`.
fn legacy_env_provider() -> Env {
    Env::raw()
        .only(&[LEGACY_WEBHOOK_ENV])
        .map(|_| "slack.webhook_url".into())
}
