use std::fmt::Debug;
use std::hash::Hash;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Capability the host engine requires of a connector's table handle.
/// The engine treats the handle as opaque: it compares, hashes and
/// serializes it, and nothing else.
pub trait ConnectorTableHandle:
    Debug + Eq + Hash + Serialize + DeserializeOwned + Send + Sync
{
    /// Returns the id of the connector that produced this handle.
    fn connector_id(&self) -> &str;
}
