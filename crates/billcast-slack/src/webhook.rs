// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Slack incoming-webhook delivery.
//!
//! The payload is JSON-encoded and POSTed form-encoded under the `payload`
//! parameter. Any status >= 400 is a delivery failure. One attempt only.

use std::time::Duration;

use async_trait::async_trait;
use billcast_config::model::SlackConfig;
use billcast_core::{BillcastError, MessagePayload, MessageSink};
use tracing::{debug, info};

/// Form parameter carrying the JSON message.
pub const PAYLOAD_PARAM: &str = "payload";

/// Posts messages to a Slack incoming webhook.
#[derive(Debug, Clone)]
pub struct SlackWebhook {
    client: reqwest::Client,
    url: String,
}

impl SlackWebhook {
    /// Create a webhook sink for `url` with the given request timeout.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, BillcastError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| BillcastError::Delivery {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Create a webhook sink from the `[slack]` config section.
    ///
    /// Fails with [`BillcastError::Config`] when no webhook URL is configured.
    pub fn from_config(config: &SlackConfig) -> Result<Self, BillcastError> {
        let url = config.webhook_url.as_deref().ok_or_else(|| {
            BillcastError::Config(
                "slack.webhook_url is not set (use BILLCAST_SLACK_WEBHOOK_URL or SLACK_WEBHOOK_URL)"
                    .to_string(),
            )
        })?;
        Self::new(url, Duration::from_secs(config.timeout_secs))
    }
}

#[async_trait]
impl MessageSink for SlackWebhook {
    fn name(&self) -> &str {
        "slack-webhook"
    }

    async fn deliver(&self, payload: &MessagePayload) -> Result<(), BillcastError> {
        let json = serde_json::to_string(payload)?;
        debug!(blocks = payload.blocks.len(), bytes = json.len(), "posting message");

        let response = self
            .client
            .post(&self.url)
            .form(&[(PAYLOAD_PARAM, json.as_str())])
            .send()
            .await
            .map_err(|e| {
                // The webhook URL embeds its secret; keep it out of messages.
                let e = e.without_url();
                BillcastError::Delivery {
                    message: format!("webhook request failed: {e}"),
                    source: Some(Box::new(e)),
                }
            })?;

        let status = response.status();
        // Body is read before the status check so failures carry Slack's reason.
        let body = response.text().await.map_err(|e| {
            let e = e.without_url();
            BillcastError::Delivery {
                message: format!("failed to read webhook response (status {status}): {e}"),
                source: Some(Box::new(e)),
            }
        })?;

        if status.as_u16() >= 400 {
            return Err(BillcastError::delivery(format!(
                "error sending message ({body}), status: {status}"
            )));
        }

        info!(status = %status, blocks = payload.blocks.len(), "message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use billcast_core::{SectionBlock, TextObject};
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use super::*;

    fn sink(server: &MockServer) -> SlackWebhook {
        SlackWebhook::new(format!("{}/services/T/B/X", server.uri()), Duration::from_secs(5))
            .unwrap()
    }

    fn payload() -> MessagePayload {
        MessagePayload {
            blocks: vec![
                SectionBlock::text(TextObject::mrkdwn("*Total* : 1.00 USD")),
                SectionBlock::fields(vec![TextObject::mrkdwn("*EC2*\n1.00 USD")]),
            ],
        }
    }

    #[tokio::test]
    async fn posts_form_encoded_payload() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/services/T/B/X"))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("payload="))
            .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
            .expect(1)
            .mount(&server)
            .await;

        sink(&server).deliver(&payload()).await.unwrap();

        let requests: Vec<Request> = server.received_requests().await.unwrap();
        let form: Vec<(String, String)> = url::form_urlencoded::parse(&requests[0].body)
            .into_owned()
            .collect();
        assert_eq!(form.len(), 1);
        assert_eq!(form[0].0, PAYLOAD_PARAM);
        let sent: MessagePayload = serde_json::from_str(&form[0].1).unwrap();
        assert_eq!(sent, payload());
    }

    #[tokio::test]
    async fn client_error_is_delivery_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(400).set_body_string("invalid_blocks"))
            .expect(1)
            .mount(&server)
            .await;

        let err = sink(&server).deliver(&payload()).await.unwrap_err();
        assert!(matches!(err, BillcastError::Delivery { .. }), "got {err:?}");
        let msg = err.to_string();
        assert!(msg.contains("invalid_blocks"), "got: {msg}");
        assert!(msg.contains("400"), "got: {msg}");
    }

    #[tokio::test]
    async fn server_error_is_not_retried() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .expect(1)
            .mount(&server)
            .await;

        let err = sink(&server).deliver(&payload()).await.unwrap_err();
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn no_content_is_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(204))
            .mount(&server)
            .await;

        assert!(sink(&server).deliver(&payload()).await.is_ok());
    }

    /// Serves one request, answering 200 with a body shorter than its
    /// declared length, then hangs up.
    async fn truncated_body_server() -> String {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            loop {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
                let text = String::from_utf8_lossy(&request);
                if let Some(end) = text.find("\r\n\r\n") {
                    let length = text[..end]
                        .lines()
                        .find_map(|l| {
                            l.to_ascii_lowercase()
                                .strip_prefix("content-length:")
                                .map(|v| v.trim().parse::<usize>().unwrap())
                        })
                        .unwrap_or(0);
                    if request.len() >= end + 4 + length {
                        break;
                    }
                }
            }
            stream
                .write_all(b"HTTP/1.1 200 OK\r\ncontent-length: 100\r\n\r\nok")
                .await
                .unwrap();
            stream.shutdown().await.unwrap();
        });

        format!("http://{addr}/services/T/B/X")
    }

    #[tokio::test]
    async fn unreadable_response_body_is_delivery_error() {
        let url = truncated_body_server().await;
        let sink = SlackWebhook::new(url, Duration::from_secs(5)).unwrap();

        let err = sink.deliver(&payload()).await.unwrap_err();
        match err {
            BillcastError::Delivery { message, source } => {
                assert!(message.contains("failed to read webhook response"), "got: {message}");
                assert!(source.is_some());
            }
            other => panic!("expected delivery error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_delivery_error() {
        let sink = SlackWebhook::new("http://127.0.0.1:9/hook", Duration::from_secs(2)).unwrap();
        let err = sink.deliver(&payload()).await.unwrap_err();
        match err {
            BillcastError::Delivery { source, .. } => assert!(source.is_some()),
            other => panic!("expected delivery error, got {other:?}"),
        }
    }

    #[test]
    fn missing_webhook_url_is_config_error() {
        let err = SlackWebhook::from_config(&SlackConfig::default()).unwrap_err();
        assert!(matches!(err, BillcastError::Config(_)));
    }
}
