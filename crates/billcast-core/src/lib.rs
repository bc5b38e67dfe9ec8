// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for billcast.
//!
//! This crate provides the error type, the cost and message types shared by
//! every stage, and the adapter traits for the billing source and the chat
//! delivery sink.

pub mod error;
pub mod message;
pub mod traits;
pub mod types;
pub mod window;

// Re-export key items at crate root for ergonomic imports.
pub use error::BillcastError;
pub use message::{MessagePayload, SectionBlock, TextObject};
pub use traits::{CostSource, MessageSink};
pub use types::{CostReport, ServiceCost};
pub use window::BillingWindow;
