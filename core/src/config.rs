//! Caller-tunable settings for both helpers.
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a
//! valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::http::DEFAULT_CONTENT_TYPE;

/// Which response statuses are handed on to decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Only 2xx responses are accepted; anything else is a `Status` error.
    #[default]
    SuccessOnly,
    /// Every fully received response is accepted regardless of status.
    AcceptAny,
}

impl StatusPolicy {
    pub fn accepts(self, status: u16) -> bool {
        match self {
            StatusPolicy::SuccessOnly => (200..300).contains(&status),
            StatusPolicy::AcceptAny => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestOptions {
    pub status_policy: StatusPolicy,
    /// Used when a call passes no content type.
    pub default_content_type: String,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            status_policy: StatusPolicy::default(),
            default_content_type: DEFAULT_CONTENT_TYPE.to_string(),
        }
    }
}

impl RequestOptions {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn with_status_policy(mut self, status_policy: StatusPolicy) -> Self {
        self.status_policy = status_policy;
        self
    }
}

pub const DEFAULT_HIGHLIGHT_DELAY_MS: u64 = 2000;
pub const DEFAULT_HIGHLIGHT_BORDER: &str = "2px solid #f0ad4e";
pub const DEFAULT_HIGHLIGHT_BACKGROUND: &str = "#fcf8e3";

/// Style values applied by `Highlighter` and how long they stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub delay_ms: u64,
    pub border: String,
    pub background: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_HIGHLIGHT_DELAY_MS,
            border: DEFAULT_HIGHLIGHT_BORDER.to_string(),
            background: DEFAULT_HIGHLIGHT_BACKGROUND.to_string(),
        }
    }
}

impl HighlightConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}
