/// Backend implementations
pub mod backend;

/// Trait for key-value storage backend implementations
///
/// The persistence collaborator contract: an opaque string store. Calls are
/// synchronous and expected to return quickly; an asynchronous real backend
/// must be wrapped so the core never blocks on it.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent
    fn get(&self, key: &str) -> crate::Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> crate::Result<()>;
}
