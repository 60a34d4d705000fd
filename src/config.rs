use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{InvokerError, Result};
use crate::interfaces::serializer::FormatType;

/// What to do when the endpoint answers with anything other than 200.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusPolicy {
    /// Deliver an empty reply; nothing is read from the response.
    #[default]
    EmptyReply,
    /// Raise a fault carrying the status code.
    Fault,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InvokerConfig {
    pub endpoint: String,
    pub format: Option<FormatType>,
    pub pretty: Option<bool>,
    pub status_policy: Option<StatusPolicy>,
}

impl InvokerConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            format: None,
            pretty: None,
            status_policy: None,
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .map_err(|e| InvokerError::Config(e.to_string()))?;
        let config: InvokerConfig =
            serde_json::from_str(&content).map_err(|e| InvokerError::Config(e.to_string()))?;
        Ok(config)
    }

    pub fn format(&self) -> FormatType {
        self.format.unwrap_or_default()
    }

    pub fn status_policy(&self) -> StatusPolicy {
        self.status_policy.unwrap_or_default()
    }
}
