// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording message sink for deterministic testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use billcast_core::{BillcastError, MessagePayload, MessageSink};

/// A sink that captures every payload passed to `deliver()`.
///
/// A rejecting sink still records the attempt before failing, so tests can
/// tell "never attempted" apart from "attempted and failed".
#[derive(Clone, Default)]
pub struct RecordingSink {
    delivered: Arc<Mutex<Vec<MessagePayload>>>,
    reject_with: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sink whose deliveries fail with `BillcastError::Delivery`.
    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            delivered: Arc::new(Mutex::new(Vec::new())),
            reject_with: Some(message.into()),
        }
    }

    /// All payloads passed to `deliver()`.
    pub async fn delivered(&self) -> Vec<MessagePayload> {
        self.delivered.lock().await.clone()
    }

    pub async fn delivered_count(&self) -> usize {
        self.delivered.lock().await.len()
    }
}

#[async_trait]
impl MessageSink for RecordingSink {
    fn name(&self) -> &str {
        "recording-sink"
    }

    async fn deliver(&self, payload: &MessagePayload) -> Result<(), BillcastError> {
        self.delivered.lock().await.push(payload.clone());
        match &self.reject_with {
            Some(message) => Err(BillcastError::delivery(message.clone())),
            None => Ok(()),
        }
    }
}
