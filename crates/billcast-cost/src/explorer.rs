// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! AWS Cost Explorer cost source.
//!
//! Issues one `GetCostAndUsage` request for the billing window: monthly
//! granularity, `UnblendedCost`, grouped by the `SERVICE` dimension. Only the
//! first time bucket is reported.

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_config::retry::RetryConfig;
use aws_sdk_costexplorer::Client;
use aws_sdk_costexplorer::error::DisplayErrorContext;
use aws_sdk_costexplorer::operation::get_cost_and_usage::GetCostAndUsageOutput;
use aws_sdk_costexplorer::types::{
    DateInterval, Granularity, GroupDefinition, GroupDefinitionType,
};
use billcast_config::model::AwsConfig;
use billcast_core::{BillcastError, BillingWindow, CostSource, ServiceCost};
use tracing::{debug, info, warn};

/// Metric requested and read back from each group.
pub const COST_METRIC: &str = "UnblendedCost";

/// Dimension used to group costs.
pub const GROUP_BY_DIMENSION: &str = "SERVICE";

/// Service name used when a group carries no key.
const UNKNOWN_SERVICE: &str = "Unknown";

/// Cost Explorer client wrapper.
#[derive(Debug, Clone)]
pub struct CostExplorerSource {
    client: Client,
}

impl CostExplorerSource {
    /// Build a client from the SDK's default credential chain.
    ///
    /// SDK-level retries are disabled; each invocation makes one attempt.
    pub async fn from_config(config: &AwsConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .retry_config(RetryConfig::disabled());
        if let Some(endpoint) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;
        info!(region = %config.region, "cost explorer client configured");
        Self::from_client(Client::new(&sdk_config))
    }

    /// Wrap an already configured client.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CostSource for CostExplorerSource {
    fn name(&self) -> &str {
        "aws-cost-explorer"
    }

    async fn fetch(&self, window: &BillingWindow) -> Result<Vec<ServiceCost>, BillcastError> {
        let period = DateInterval::builder()
            .start(window.start_param())
            .end(window.end_param())
            .build()
            .map_err(|e| BillcastError::Fetch {
                message: format!("invalid billing window {window}: {e}"),
                source: Some(Box::new(e)),
            })?;

        debug!(%window, "requesting cost and usage");
        let output = self
            .client
            .get_cost_and_usage()
            .time_period(period)
            .granularity(Granularity::Monthly)
            .metrics(COST_METRIC)
            .group_by(
                GroupDefinition::builder()
                    .r#type(GroupDefinitionType::Dimension)
                    .key(GROUP_BY_DIMENSION)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| BillcastError::Fetch {
                message: format!(
                    "failed to get usage charges for each service: {}",
                    DisplayErrorContext(&e)
                ),
                source: Some(Box::new(e)),
            })?;

        let services = services_from_output(&output)?;
        info!(%window, services = services.len(), "fetched service costs");
        Ok(services)
    }
}

/// Convert the first time bucket's groups into `ServiceCost` entries.
///
/// A response without any time bucket is an error, not an empty report.
pub fn services_from_output(
    output: &GetCostAndUsageOutput,
) -> Result<Vec<ServiceCost>, BillcastError> {
    let bucket = output
        .results_by_time()
        .first()
        .ok_or_else(|| BillcastError::fetch("cost and usage response contained no time buckets"))?;

    if output.next_page_token().is_some() {
        warn!("cost and usage response is paginated; only the first page is reported");
    }

    Ok(bucket
        .groups()
        .iter()
        .map(|group| {
            let service = group
                .keys()
                .first()
                .map(String::as_str)
                .unwrap_or(UNKNOWN_SERVICE);
            let amount = group
                .metrics()
                .and_then(|metrics| metrics.get(COST_METRIC))
                .and_then(|metric| metric.amount())
                .unwrap_or_default();
            ServiceCost::new(service, amount)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use aws_sdk_costexplorer::types::{Group, MetricValue, ResultByTime};
    use tracing_test::traced_test;

    use super::*;

    fn group(service: &str, amount: &str) -> Group {
        Group::builder()
            .keys(service)
            .metrics(
                COST_METRIC,
                MetricValue::builder().amount(amount).unit("USD").build(),
            )
            .build()
    }

    #[test]
    fn first_bucket_groups_keep_order() {
        let output = GetCostAndUsageOutput::builder()
            .results_by_time(
                ResultByTime::builder()
                    .groups(group("Amazon Simple Storage Service", "40.00"))
                    .groups(group("Amazon Elastic Compute Cloud - Compute", "60.00"))
                    .build(),
            )
            .results_by_time(ResultByTime::builder().groups(group("Ignored", "1")).build())
            .build();

        let services = services_from_output(&output).unwrap();
        assert_eq!(
            services,
            vec![
                ServiceCost::new("Amazon Simple Storage Service", "40.00"),
                ServiceCost::new("Amazon Elastic Compute Cloud - Compute", "60.00"),
            ]
        );
    }

    #[test]
    fn no_time_bucket_is_a_fetch_error() {
        let output = GetCostAndUsageOutput::builder().build();
        let err = services_from_output(&output).unwrap_err();
        assert!(matches!(err, BillcastError::Fetch { .. }), "got {err:?}");
        assert!(err.to_string().contains("no time buckets"));
    }

    #[test]
    fn empty_bucket_is_an_empty_list() {
        let output = GetCostAndUsageOutput::builder()
            .results_by_time(ResultByTime::builder().build())
            .build();
        assert!(services_from_output(&output).unwrap().is_empty());
    }

    #[test]
    fn missing_key_and_metric_fall_back() {
        let output = GetCostAndUsageOutput::builder()
            .results_by_time(
                ResultByTime::builder()
                    .groups(Group::builder().build())
                    .groups(
                        Group::builder()
                            .keys("Tax")
                            .metrics(
                                "BlendedCost",
                                MetricValue::builder().amount("3.00").build(),
                            )
                            .build(),
                    )
                    .build(),
            )
            .build();

        let services = services_from_output(&output).unwrap();
        assert_eq!(services[0], ServiceCost::new("Unknown", ""));
        assert_eq!(services[1], ServiceCost::new("Tax", ""));
        assert!(services.iter().all(|s| s.parsed_amount().is_none()));
    }

    #[traced_test]
    #[test]
    fn paginated_response_warns() {
        let output = GetCostAndUsageOutput::builder()
            .results_by_time(ResultByTime::builder().groups(group("EC2", "1")).build())
            .next_page_token("page-2")
            .build();
        assert_eq!(services_from_output(&output).unwrap().len(), 1);
        assert!(logs_contain("only the first page is reported"));
    }
}
