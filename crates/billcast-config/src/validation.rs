// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.

use crate::diagnostic::ConfigError;
use crate::model::BillcastConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &BillcastConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.log.level.trim().to_lowercase().as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "log.level `{}` must be one of {}",
                config.log.level,
                LOG_LEVELS.join(", ")
            ),
        });
    }

    if config.report.offset().is_none() {
        errors.push(ConfigError::Validation {
            message: format!(
                "report.utc_offset `{}` is not a UTC offset like `+09:00`",
                config.report.utc_offset
            ),
        });
    }

    if !is_http_url(&config.report.console_url) {
        errors.push(ConfigError::Validation {
            message: format!(
                "report.console_url `{}` must be an http(s) URL",
                config.report.console_url
            ),
        });
    }

    if config.aws.region.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "aws.region must not be empty".to_string(),
        });
    }

    if let Some(endpoint) = &config.aws.endpoint_url
        && !is_http_url(endpoint)
    {
        errors.push(ConfigError::Validation {
            message: format!("aws.endpoint_url `{endpoint}` must be an http(s) URL"),
        });
    }

    // Absence is checked by the binary, which knows whether this is a dry run.
    if let Some(webhook) = &config.slack.webhook_url
        && !is_http_url(webhook)
    {
        errors.push(ConfigError::Validation {
            message: "slack.webhook_url must be an http(s) URL".to_string(),
        });
    }

    if config.slack.timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "slack.timeout_secs must be greater than 0".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn is_http_url(value: &str) -> bool {
    let value = value.trim();
    ["https://", "http://"]
        .iter()
        .any(|scheme| value.len() > scheme.len() && value.starts_with(scheme))
}
