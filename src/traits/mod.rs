mod column;
mod source;
mod table;

pub use column::ColumnHandle;
pub use source::MBeanSource;
pub use table::ConnectorTableHandle;
