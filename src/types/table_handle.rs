use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{require_non_empty, JmxError, Result};
use crate::metadata::JMX_SCHEMA_NAME;
use crate::traits::{ColumnHandle, ConnectorTableHandle};
use crate::types::{ConnectorTableMetadata, JmxColumnHandle, SchemaTableName};

/// Identifies one JMX-backed table for the engine.
///
/// A handle is an immutable value: it is compared, hashed and serialized by
/// all four of its fields, and it is passed through planning and execution
/// without the engine looking inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "TableHandleFields")]
pub struct JmxTableHandle {
    connector_id: String,
    object_name: String,
    column_handles: Vec<JmxColumnHandle>,
    live_data: bool,
}

/// Serialized form of a handle, validated through [`JmxTableHandle::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TableHandleFields {
    connector_id: String,
    object_name: String,
    column_handles: Vec<JmxColumnHandle>,
    // Handles serialized before the flag existed always read live data.
    #[serde(default = "default_live_data")]
    live_data: bool,
}

fn default_live_data() -> bool {
    true
}

impl TryFrom<TableHandleFields> for JmxTableHandle {
    type Error = JmxError;

    fn try_from(fields: TableHandleFields) -> Result<Self> {
        Self::from_parts(
            fields.connector_id,
            fields.object_name,
            fields.column_handles,
            fields.live_data,
        )
    }
}

impl JmxTableHandle {
    /// Creates a handle, copying `column_handles` into handle-owned storage.
    ///
    /// Fails with [`JmxError::InvalidArgument`] if `connector_id` or
    /// `object_name` is empty.
    pub fn new(
        connector_id: impl Into<String>,
        object_name: impl Into<String>,
        column_handles: &[JmxColumnHandle],
        live_data: bool,
    ) -> Result<Self> {
        Self::from_parts(
            connector_id.into(),
            object_name.into(),
            column_handles.to_vec(),
            live_data,
        )
    }

    /// Creates a handle that reads live data.
    ///
    /// Only kept so that handles created before `live_data` existed keep
    /// their meaning; new code should call [`JmxTableHandle::new`].
    #[deprecated(note = "use JmxTableHandle::new and pass live_data explicitly")]
    pub fn legacy(
        connector_id: impl Into<String>,
        object_name: impl Into<String>,
        column_handles: &[JmxColumnHandle],
    ) -> Result<Self> {
        Self::new(connector_id, object_name, column_handles, default_live_data())
    }

    fn from_parts(
        connector_id: String,
        object_name: String,
        column_handles: Vec<JmxColumnHandle>,
        live_data: bool,
    ) -> Result<Self> {
        Ok(Self {
            connector_id: require_non_empty(connector_id, "connectorId")?,
            object_name: require_non_empty(object_name, "objectName")?,
            column_handles,
            live_data,
        })
    }

    pub fn connector_id(&self) -> &str {
        &self.connector_id
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Returns the column handles in output order.
    pub fn column_handles(&self) -> &[JmxColumnHandle] {
        &self.column_handles
    }

    pub fn is_live_data(&self) -> bool {
        self.live_data
    }

    /// Derives the table metadata from the object name and the column list.
    pub fn table_metadata(&self) -> ConnectorTableMetadata {
        ConnectorTableMetadata::new(
            SchemaTableName::new(JMX_SCHEMA_NAME, self.object_name.clone()),
            self.column_handles
                .iter()
                .map(|column| column.column_metadata())
                .collect(),
        )
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl ConnectorTableHandle for JmxTableHandle {
    fn connector_id(&self) -> &str {
        JmxTableHandle::connector_id(self)
    }
}

impl fmt::Display for JmxTableHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "JmxTableHandle{{connectorId={}, objectName={}, columnHandles=[",
            self.connector_id, self.object_name
        )?;
        for (i, column) in self.column_handles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", column)?;
        }
        write!(f, "], liveData={}}}", self.live_data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::JmxType;

    fn uptime() -> JmxColumnHandle {
        JmxColumnHandle::new("jmx", "Uptime", JmxType::Bigint).unwrap()
    }

    #[test]
    fn test_rejects_empty_connector_id() {
        let err = JmxTableHandle::new("", "java.lang:type=Runtime", &[], true).unwrap_err();
        match err {
            JmxError::InvalidArgument(message) => assert_eq!(message, "connectorId is empty"),
            _ => panic!("Expected InvalidArgument error"),
        }
    }

    #[test]
    fn test_rejects_empty_object_name() {
        let err = JmxTableHandle::new("jmx", "", &[], true).unwrap_err();
        match err {
            JmxError::InvalidArgument(message) => assert_eq!(message, "objectName is empty"),
            _ => panic!("Expected InvalidArgument error"),
        }
    }

    #[test]
    fn test_empty_column_list_is_allowed() {
        let handle = JmxTableHandle::new("jmx", "java.lang:type=Runtime", &[], false).unwrap();
        assert!(handle.column_handles().is_empty());
        assert!(handle.table_metadata().columns.is_empty());
    }

    #[test]
    fn test_display_lists_all_fields() {
        let handle =
            JmxTableHandle::new("jmx", "java.lang:type=Runtime", &[uptime()], false).unwrap();
        assert_eq!(
            handle.to_string(),
            "JmxTableHandle{connectorId=jmx, objectName=java.lang:type=Runtime, \
             columnHandles=[JmxColumnHandle{connectorId=jmx, columnName=Uptime, columnType=BIGINT}], \
             liveData=false}"
        );
    }

    #[test]
    fn test_wire_field_names() {
        let handle =
            JmxTableHandle::new("jmx", "java.lang:type=Runtime", &[uptime()], false).unwrap();
        let json = serde_json::to_value(&handle).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "connectorId": "jmx",
                "objectName": "java.lang:type=Runtime",
                "columnHandles": [
                    {"connectorId": "jmx", "columnName": "Uptime", "columnType": "BIGINT"}
                ],
                "liveData": false,
            })
        );
    }

    #[test]
    fn test_missing_live_data_defaults_to_true() {
        let handle = JmxTableHandle::from_json(
            r#"{"connectorId":"jmx","objectName":"java.lang:type=Runtime","columnHandles":[]}"#,
        )
        .unwrap();
        assert!(handle.is_live_data());
    }

    #[test]
    fn test_deserialize_rejects_missing_or_null_fields() {
        let missing_object_name = r#"{"connectorId":"jmx","columnHandles":[],"liveData":true}"#;
        assert!(matches!(
            JmxTableHandle::from_json(missing_object_name),
            Err(JmxError::Serialization(_))
        ));

        let null_columns =
            r#"{"connectorId":"jmx","objectName":"a:b=c","columnHandles":null,"liveData":true}"#;
        assert!(matches!(
            JmxTableHandle::from_json(null_columns),
            Err(JmxError::Serialization(_))
        ));

        let null_connector =
            r#"{"connectorId":null,"objectName":"a:b=c","columnHandles":[],"liveData":true}"#;
        assert!(matches!(
            JmxTableHandle::from_json(null_connector),
            Err(JmxError::Serialization(_))
        ));
    }

    #[test]
    fn test_deserialize_validates_like_constructor() {
        let err = JmxTableHandle::from_json(
            r#"{"connectorId":"","objectName":"a:b=c","columnHandles":[],"liveData":true}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("connectorId is empty"));
    }
}
