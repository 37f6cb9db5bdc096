use crate::types::ColumnMetadata;

/// Trait representing one column of a connector table.
/// The engine only sees column handles through this accessor.
pub trait ColumnHandle {
    /// Returns the column name as exposed to the engine.
    fn column_name(&self) -> &str;

    /// Returns the engine-facing metadata for this column.
    fn column_metadata(&self) -> ColumnMetadata;
}
