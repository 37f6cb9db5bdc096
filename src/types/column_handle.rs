use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{require_non_empty, JmxError, Result};
use crate::traits::ColumnHandle;
use crate::types::{ColumnMetadata, JmxType};

/// Identifies one column of a JMX table: an MBean attribute, or the node column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "ColumnHandleFields")]
pub struct JmxColumnHandle {
    connector_id: String,
    column_name: String,
    column_type: JmxType,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ColumnHandleFields {
    connector_id: String,
    column_name: String,
    column_type: JmxType,
}

impl TryFrom<ColumnHandleFields> for JmxColumnHandle {
    type Error = JmxError;

    fn try_from(fields: ColumnHandleFields) -> Result<Self> {
        Self::new(fields.connector_id, fields.column_name, fields.column_type)
    }
}

impl JmxColumnHandle {
    pub fn new(
        connector_id: impl Into<String>,
        column_name: impl Into<String>,
        column_type: JmxType,
    ) -> Result<Self> {
        Ok(Self {
            connector_id: require_non_empty(connector_id.into(), "connectorId")?,
            column_name: require_non_empty(column_name.into(), "columnName")?,
            column_type,
        })
    }

    pub fn connector_id(&self) -> &str {
        &self.connector_id
    }

    pub fn column_type(&self) -> JmxType {
        self.column_type
    }
}

impl ColumnHandle for JmxColumnHandle {
    fn column_name(&self) -> &str {
        &self.column_name
    }

    fn column_metadata(&self) -> ColumnMetadata {
        ColumnMetadata::new(self.column_name.clone(), self.column_type)
    }
}

impl fmt::Display for JmxColumnHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JmxColumnHandle{{connectorId={}, columnName={}, columnType={}}}",
            self.connector_id, self.column_name, self.column_type
        )
    }
}
