use crate::types::JmxType;

/// Description of one MBean attribute as reported by a source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MBeanAttributeInfo {
    pub name: String,
    /// JMX type name, e.g. `long` or `java.lang.String`.
    pub type_name: String,
    pub readable: bool,
}

impl MBeanAttributeInfo {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            readable: true,
        }
    }

    /// Marks this attribute as write-only.
    pub fn write_only(mut self) -> Self {
        self.readable = false;
        self
    }

    /// Column type for this attribute, if it can be exposed as one.
    pub fn column_type(&self) -> Option<JmxType> {
        JmxType::from_attribute_type(&self.type_name)
    }
}

/// Description of a single MBean: its object name and attributes in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MBeanInfo {
    pub object_name: String,
    pub attributes: Vec<MBeanAttributeInfo>,
}

impl MBeanInfo {
    pub fn new(object_name: impl Into<String>, attributes: Vec<MBeanAttributeInfo>) -> Self {
        Self {
            object_name: object_name.into(),
            attributes,
        }
    }
}
