use super::BackendKind;
use crate::error::Result;
use crate::model::AccessMode;
use std::collections::BTreeMap;
use std::path::Path;

/// Abstract interface for raw store I/O.
/// This trait handles the "how" of storage (file vs memory), while
/// [`Registry`](super::Registry) handles the "what" (existence rules,
/// collisions, anonymous keys).
pub trait StorageBackend {
    /// Held for the lifetime of a session. Dropping it releases the store.
    type Lock;

    /// Where the store lives. For MemBackend, a virtual path.
    fn location(&self) -> &Path;

    /// Identify the format of whatever currently sits at [`location`](Self::location).
    fn probe(&self) -> BackendKind;

    /// Acquire the store: shared for read-only sessions, exclusive for
    /// writable ones. A writable lock materializes a missing store.
    fn lock(&self, mode: AccessMode) -> Result<Self::Lock>;

    /// Read every entry. Called once per session, right after locking.
    fn load(&self, lock: &mut Self::Lock) -> Result<BTreeMap<String, String>>;

    /// Replace the stored entries.
    /// MUST leave either the old or the new content visible to other
    /// sessions, never a mix, even if the commit fails part way.
    fn commit(&self, lock: &mut Self::Lock, entries: &BTreeMap<String, String>) -> Result<()>;
}
