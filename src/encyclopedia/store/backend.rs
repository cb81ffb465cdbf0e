use crate::error::Result;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while EntryStore handles the "what" (ordering, name checks, logging).
pub trait StorageBackend {
    /// List every entry name present in storage, in no particular order.
    fn list_names(&self) -> Result<Vec<String>>;

    /// Read raw markup for an entry.
    /// Returns Ok(None) if the entry does not exist.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read_content(&self, name: &str) -> Result<Option<String>>;

    /// Write content to storage, replacing any previous content.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write_content(&self, name: &str, content: &str) -> Result<()>;
}
