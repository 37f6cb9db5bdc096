use async_trait::async_trait;

use crate::error::Result;
use crate::types::MBeanInfo;

/// Trait for anything that can describe the MBeans of a JMX server.
/// Implementations are responsible for:
/// - Enumerating the registered object names
/// - Describing the attributes of a single MBean
#[async_trait]
pub trait MBeanSource: Send + Sync {
    /// Returns the object names of all registered MBeans.
    async fn query_names(&self) -> Result<Vec<String>>;

    /// Describes the MBean with the given object name, or `None` if it is not registered.
    async fn describe(&self, object_name: &str) -> Result<Option<MBeanInfo>>;
}
