use serde::{Deserialize, Serialize};

use crate::error::{JmxError, Result};

/// Connector settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JmxConnectorConfig {
    pub connector_id: String,
    /// Whether resolved tables read live MBean state rather than a snapshot.
    #[serde(default = "default_live_data")]
    pub live_data: bool,
}

fn default_live_data() -> bool {
    true
}

impl JmxConnectorConfig {
    pub fn new(connector_id: impl Into<String>) -> Self {
        Self {
            connector_id: connector_id.into(),
            live_data: default_live_data(),
        }
    }

    pub fn with_live_data(mut self, live_data: bool) -> Self {
        self.live_data = live_data;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.connector_id.is_empty() {
            return Err(JmxError::Config("connectorId must not be empty".to_string()));
        }
        Ok(())
    }
}
