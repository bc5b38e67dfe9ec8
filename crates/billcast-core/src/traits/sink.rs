// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Message sink trait for chat delivery endpoints.

use async_trait::async_trait;

use crate::error::BillcastError;
use crate::message::MessagePayload;

/// Delivers a formatted message. Exactly one attempt, no retry.
#[async_trait]
pub trait MessageSink: Send + Sync {
    fn name(&self) -> &str;

    async fn deliver(&self, payload: &MessagePayload) -> Result<(), BillcastError>;
}
