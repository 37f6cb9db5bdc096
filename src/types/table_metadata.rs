use std::fmt;

use serde::{Deserialize, Serialize};

/// SQL type of a JMX table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum JmxType {
    Bigint,
    Boolean,
    Double,
    Varchar,
    Timestamp,
}

impl JmxType {
    /// Returns the SQL name of this type.
    pub fn sql_name(&self) -> &'static str {
        match self {
            JmxType::Bigint => "BIGINT",
            JmxType::Boolean => "BOOLEAN",
            JmxType::Double => "DOUBLE",
            JmxType::Varchar => "VARCHAR",
            JmxType::Timestamp => "TIMESTAMP",
        }
    }

    /// Maps a JMX attribute type name to the column type used for it.
    /// Returns `None` for attribute types that cannot be exposed as a column.
    pub fn from_attribute_type(type_name: &str) -> Option<Self> {
        match type_name {
            "long" | "int" | "short" | "byte" | "java.lang.Long" | "java.lang.Integer"
            | "java.lang.Short" | "java.lang.Byte" => Some(JmxType::Bigint),
            "boolean" | "java.lang.Boolean" => Some(JmxType::Boolean),
            "double" | "float" | "java.lang.Double" | "java.lang.Float" => Some(JmxType::Double),
            "java.lang.String" => Some(JmxType::Varchar),
            _ => None,
        }
    }
}

impl fmt::Display for JmxType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sql_name())
    }
}

/// Engine-facing description of a single column.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnMetadata {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: JmxType,
    #[serde(default)]
    pub hidden: bool,
}

impl ColumnMetadata {
    pub fn new(name: impl Into<String>, column_type: JmxType) -> Self {
        Self {
            name: name.into(),
            column_type,
            hidden: false,
        }
    }
}

/// A table name qualified by its schema.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaTableName {
    pub schema_name: String,
    pub table_name: String,
}

impl SchemaTableName {
    pub fn new(schema_name: impl Into<String>, table_name: impl Into<String>) -> Self {
        Self {
            schema_name: schema_name.into(),
            table_name: table_name.into(),
        }
    }

    /// Returns the fully qualified name (schema.table).
    pub fn qualified_name(&self) -> String {
        format!("{}.{}", self.schema_name, self.table_name)
    }
}

impl fmt::Display for SchemaTableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.schema_name, self.table_name)
    }
}

/// Table name plus its columns, in output order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnectorTableMetadata {
    pub table: SchemaTableName,
    pub columns: Vec<ColumnMetadata>,
}

impl ConnectorTableMetadata {
    pub fn new(table: SchemaTableName, columns: Vec<ColumnMetadata>) -> Self {
        Self { table, columns }
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_type_mapping() {
        assert_eq!(JmxType::from_attribute_type("long"), Some(JmxType::Bigint));
        assert_eq!(
            JmxType::from_attribute_type("java.lang.Integer"),
            Some(JmxType::Bigint)
        );
        assert_eq!(
            JmxType::from_attribute_type("boolean"),
            Some(JmxType::Boolean)
        );
        assert_eq!(JmxType::from_attribute_type("float"), Some(JmxType::Double));
        assert_eq!(
            JmxType::from_attribute_type("java.lang.String"),
            Some(JmxType::Varchar)
        );
        assert_eq!(
            JmxType::from_attribute_type("javax.management.openmbean.CompositeData"),
            None
        );
    }

    #[test]
    fn test_type_serializes_as_sql_name() {
        let json = serde_json::to_string(&JmxType::Varchar).unwrap();
        assert_eq!(json, "\"VARCHAR\"");
        let parsed: JmxType = serde_json::from_str("\"BIGINT\"").unwrap();
        assert_eq!(parsed, JmxType::Bigint);
    }

    #[test]
    fn test_schema_table_name_display() {
        let name = SchemaTableName::new("jmx", "java.lang:type=Runtime");
        assert_eq!(name.to_string(), "jmx.java.lang:type=Runtime");
        assert_eq!(name.qualified_name(), name.to_string());
    }
}
