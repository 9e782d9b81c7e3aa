use crate::error::Result;

/// Abstract interface for raw key-value storage.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while `SnippetStorage` handles the "what" (keys, record types, dedup).
pub trait StorageBackend: Send {
    /// Whether a value is stored under `key`.
    fn contains_key(&self, key: &str) -> bool;

    /// Read the raw value for `key`.
    /// Returns Ok(None) if nothing is stored under it.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;

    /// Ask the backend to make previous writes durable.
    ///
    /// `None` means the backend cannot confirm durability; callers only log in that case.
    fn persist(&self) -> Option<Result<()>> {
        None
    }
}
