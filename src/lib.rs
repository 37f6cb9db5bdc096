//! jmx-connector - JMX MBeans exposed as query engine tables
//!
//! # Example
//! ```ignore
//! use jmx_connector::{JmxConnectorConfig, JmxMetadata, SchemaTableName};
//!
//! let metadata = JmxMetadata::new(JmxConnectorConfig::new("jmx"), source)?;
//!
//! // Resolve a table into a handle the engine can pass around
//! let handle = metadata
//!     .get_table_handle(&SchemaTableName::new("jmx", "java.lang:type=Runtime"))
//!     .await?
//!     .expect("MBean is registered");
//!
//! let table = handle.table_metadata();
//! let json = handle.to_json()?;
//! ```

pub mod config;
pub mod error;
pub mod metadata;
pub mod sources;
pub mod traits;
pub mod types;

// Re-export main types for convenient access
pub use config::JmxConnectorConfig;
pub use error::{JmxError, Result};
pub use metadata::{JmxMetadata, JMX_SCHEMA_NAME, NODE_COLUMN_NAME};
pub use traits::{ColumnHandle, ConnectorTableHandle, MBeanSource};
pub use types::{
    ColumnMetadata, ConnectorTableMetadata, JmxColumnHandle, JmxTableHandle, JmxType,
    MBeanAttributeInfo, MBeanInfo, SchemaTableName,
};
