// SPDX-FileCopyrightText: 2026 Billcast Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Block Kit message payload types.
//!
//! See <https://api.slack.com/reference/messaging/payload>.

use serde::{Deserialize, Serialize};

/// Block type used for every block billcast emits.
pub const SECTION: &str = "section";

/// Text object type used for every text billcast emits.
pub const MRKDWN: &str = "mrkdwn";

/// A complete chat message: one header section, then service sections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePayload {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<SectionBlock>,
}

/// A section block carrying either one `text` or a list of `fields`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<TextObject>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<TextObject>,
}

impl SectionBlock {
    /// Section with a single free-text body.
    pub fn text(text: TextObject) -> Self {
        Self {
            block_type: SECTION.to_string(),
            text: Some(text),
            fields: Vec::new(),
        }
    }

    /// Section with paired short fields.
    pub fn fields(fields: Vec<TextObject>) -> Self {
        Self {
            block_type: SECTION.to_string(),
            text: None,
            fields,
        }
    }
}

/// A composition text object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextObject {
    #[serde(rename = "type")]
    pub text_type: String,
    pub text: String,
}

impl TextObject {
    pub fn mrkdwn(text: impl Into<String>) -> Self {
        Self {
            text_type: MRKDWN.to_string(),
            text: text.into(),
        }
    }
}
