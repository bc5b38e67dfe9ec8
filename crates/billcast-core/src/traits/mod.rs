// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapter traits at the two I/O edges of the pipeline.
//!
//! Both use `#[async_trait]` so the binary can hold them as trait objects.

pub mod sink;
pub mod source;

pub use sink::MessageSink;
pub use source::CostSource;
