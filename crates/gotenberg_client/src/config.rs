use std::fs;
use std::path::Path;

use gotenberg_core::{HeaderOptions, WebhookOptions};
use serde::{Deserialize, Serialize};

use crate::ClientError;

/// Everything needed to build an [`Executor`](crate::Executor), in the
/// shape of a JSON document:
///
/// ```json
/// { "url": "http://localhost:3000", "headers": { "trace": "job-1" } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    /// Origin of the Gotenberg instance.
    pub url: String,
    #[serde(default)]
    pub headers: HeaderOptions,
    #[serde(default)]
    pub webhook: Option<WebhookOptions>,
}

impl ClientConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: HeaderOptions::default(),
            webhook: None,
        }
    }

    pub fn from_json_str(text: &str) -> Result<Self, ClientError> {
        serde_json::from_str(text).map_err(|err| ClientError::Config(err.to_string()))
    }

    pub fn from_path(path: &Path) -> Result<Self, ClientError> {
        let text = fs::read_to_string(path).map_err(|source| ClientError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }
}
