//! Storage port - durable key-value abstraction

use crate::domain::result::Result;

/// Durable key-value persistence surface
///
/// The banking store's only I/O dependency. Each persisted state shape is
/// one independently-keyed entry written as a full-snapshot overwrite;
/// there is no transaction boundary across keys.
pub trait KeyValueStore {
    /// Read the raw value for a key, `None` when absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value for a key
    fn set(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key; removing an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<()>;
}
