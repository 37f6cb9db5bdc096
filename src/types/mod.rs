mod column_handle;
mod mbean;
mod table_handle;
mod table_metadata;

pub use column_handle::JmxColumnHandle;
pub use mbean::{MBeanAttributeInfo, MBeanInfo};
pub use table_handle::JmxTableHandle;
pub use table_metadata::{ColumnMetadata, ConnectorTableMetadata, JmxType, SchemaTableName};
