// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for billcast integration tests.
//!
//! Provides mock adapters for fast, deterministic tests without AWS or Slack.
//!
//! # Components
//!
//! - [`MockCostSource`] - Cost source with a canned result and call log
//! - [`RecordingSink`] - Message sink that captures delivered payloads

pub mod mock_sink;
pub mod mock_source;

pub use mock_sink::RecordingSink;
pub use mock_source::MockCostSource;
