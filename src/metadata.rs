use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::config::JmxConnectorConfig;
use crate::error::Result;
use crate::traits::{ColumnHandle, MBeanSource};
use crate::types::{
    ConnectorTableMetadata, JmxColumnHandle, JmxTableHandle, JmxType, MBeanInfo, SchemaTableName,
};

/// The single schema all MBean tables live in.
pub const JMX_SCHEMA_NAME: &str = "jmx";

/// Leading column of every JMX table, naming the node the MBean was read on.
pub const NODE_COLUMN_NAME: &str = "node";

/// Metadata catalog of the connector.
/// Resolves table names into [`JmxTableHandle`]s by describing MBeans through a source.
pub struct JmxMetadata {
    config: JmxConnectorConfig,
    source: Arc<dyn MBeanSource>,
}

impl JmxMetadata {
    /// Create a catalog over the given source.
    /// Fails if the configuration is invalid.
    pub fn new(config: JmxConnectorConfig, source: Arc<dyn MBeanSource>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, source })
    }

    pub fn connector_id(&self) -> &str {
        &self.config.connector_id
    }

    pub fn list_schema_names(&self) -> Vec<String> {
        vec![JMX_SCHEMA_NAME.to_string()]
    }

    /// List the tables of `schema`, or of every schema when `None`.
    pub async fn list_tables(&self, schema: Option<&str>) -> Result<Vec<SchemaTableName>> {
        if let Some(schema) = schema {
            if schema != JMX_SCHEMA_NAME {
                return Ok(Vec::new());
            }
        }

        let mut names = self.source.query_names().await?;
        names.sort();
        Ok(names
            .into_iter()
            .map(|name| SchemaTableName::new(JMX_SCHEMA_NAME, name))
            .collect())
    }

    /// Resolve a table name into a handle.
    /// Returns `None` if the schema is unknown or no MBean has that object name.
    pub async fn get_table_handle(&self, table: &SchemaTableName) -> Result<Option<JmxTableHandle>> {
        if table.schema_name != JMX_SCHEMA_NAME {
            debug!(table = %table, "unknown schema");
            return Ok(None);
        }

        let Some(object_name) = self.find_object_name(&table.table_name).await? else {
            debug!(table = %table, "no MBean registered under this name");
            return Ok(None);
        };

        let Some(info) = self.source.describe(&object_name).await? else {
            debug!(object_name = %object_name, "MBean unregistered before it could be described");
            return Ok(None);
        };

        let columns = self.columns_for(&info)?;
        debug!(
            object_name = %info.object_name,
            columns = columns.len(),
            live_data = self.config.live_data,
            "resolved table handle"
        );
        JmxTableHandle::new(
            self.connector_id(),
            info.object_name,
            &columns,
            self.config.live_data,
        )
        .map(Some)
    }

    pub fn get_table_metadata(&self, handle: &JmxTableHandle) -> ConnectorTableMetadata {
        handle.table_metadata()
    }

    /// Column handles of a table, keyed by column name.
    pub fn get_column_handles(&self, handle: &JmxTableHandle) -> BTreeMap<String, JmxColumnHandle> {
        handle
            .column_handles()
            .iter()
            .map(|column| (column.column_name().to_string(), column.clone()))
            .collect()
    }

    /// Object names are matched ignoring ASCII case; the source's spelling is returned.
    async fn find_object_name(&self, table_name: &str) -> Result<Option<String>> {
        let names = self.source.query_names().await?;
        if names.iter().any(|name| name == table_name) {
            return Ok(Some(table_name.to_string()));
        }
        Ok(names
            .into_iter()
            .find(|name| name.eq_ignore_ascii_case(table_name)))
    }

    fn columns_for(&self, info: &MBeanInfo) -> Result<Vec<JmxColumnHandle>> {
        let mut columns = vec![JmxColumnHandle::new(
            self.connector_id(),
            NODE_COLUMN_NAME,
            JmxType::Varchar,
        )?];

        for attribute in &info.attributes {
            if !attribute.readable {
                continue;
            }
            match attribute.column_type() {
                Some(column_type) => columns.push(JmxColumnHandle::new(
                    self.connector_id(),
                    attribute.name.clone(),
                    column_type,
                )?),
                None => debug!(
                    object_name = %info.object_name,
                    attribute = %attribute.name,
                    type_name = %attribute.type_name,
                    "skipping attribute of unsupported type"
                ),
            }
        }
        Ok(columns)
    }
}
