use crate::errors::CoreError;

/// Trait abstraction over the persistent key-value substrate.
///
/// Values are opaque strings (JSON documents in practice). The store layer
/// above decides what the keys mean; implementations only move bytes.
pub trait KeyValueStore {
    /// Short name of the backend (for logs).
    fn name(&self) -> &str;

    /// Read the value under `key`, or `None` if nothing is stored.
    fn get(&self, key: &str) -> Result<Option<String>, CoreError>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), CoreError>;

    /// Delete `key`. Removing a missing key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), CoreError>;
}
