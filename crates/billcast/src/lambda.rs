// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AWS Lambda entry point, for deployments started by a scheduled rule.
//!
//! The event body is ignored: every invocation reports the month containing
//! the invocation time. A failed report is returned as the function error so
//! the invocation shows up as failed.

use std::sync::Arc;

use billcast_config::BillcastConfig;
use billcast_core::BillcastError;
use billcast_cost::CostExplorerSource;
use billcast_slack::SlackWebhook;
use chrono::Utc;
use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::invoke::invoke;
use crate::report::ReportSummary;

/// Handle one scheduled event with the real AWS and Slack adapters.
pub async fn handle_scheduled_event(
    config: &BillcastConfig,
) -> Result<ReportSummary, BillcastError> {
    let sink = SlackWebhook::from_config(&config.slack)?;
    let source = CostExplorerSource::from_config(&config.aws).await;
    invoke(config, &source, &sink, Utc::now()).await
}

/// Run the Lambda runtime loop until the execution environment shuts down.
pub async fn serve(config: BillcastConfig) -> Result<(), lambda_runtime::Error> {
    let config = Arc::new(config);
    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let config = Arc::clone(&config);
        async move {
            info!(request_id = %event.context.request_id, "scheduled invocation");
            handle_scheduled_event(&config)
                .await
                .map_err(lambda_runtime::Error::from)
        }
    }))
    .await
}
