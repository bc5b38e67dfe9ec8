// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cost fetching and aggregation for billcast.
//!
//! This crate provides:
//! - **Cost Explorer source**: one grouped-by-service query per billing window
//! - **Aggregation**: permissive summation of service amounts into a total

pub mod aggregate;
pub mod explorer;

pub use aggregate::{aggregate, build_report, Aggregate};
pub use explorer::{services_from_output, CostExplorerSource};
