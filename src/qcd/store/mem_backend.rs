use super::backend::StorageBackend;
use super::BackendKind;
use crate::error::{QcdError, Result};
use crate::model::AccessMode;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

#[derive(Debug)]
struct MemState {
    kind: BackendKind,
    entries: Option<BTreeMap<String, String>>,
    commits: usize,
}

/// In-memory store for tests. Clones share the same state, so a test can keep
/// a handle to inspect what a registry committed.
#[derive(Debug, Clone)]
pub struct MemBackend {
    state: Rc<RefCell<MemState>>,
    location: PathBuf,
}

impl Default for MemBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MemBackend {
    /// An existing, empty native store.
    pub fn new() -> Self {
        Self::from_state(BackendKind::Native, Some(BTreeMap::new()))
    }

    /// No store yet; the first writable session creates it.
    pub fn missing() -> Self {
        Self::from_state(BackendKind::Missing, None)
    }

    /// A store written by some other engine.
    pub fn with_kind(kind: BackendKind) -> Self {
        Self::from_state(kind, Some(BTreeMap::new()))
    }

    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self::from_state(BackendKind::Native, Some(map))
    }

    fn from_state(kind: BackendKind, entries: Option<BTreeMap<String, String>>) -> Self {
        Self {
            state: Rc::new(RefCell::new(MemState {
                kind,
                entries,
                commits: 0,
            })),
            location: PathBuf::from("memory://qcddb"),
        }
    }

    /// Committed entries (empty when the store was never created).
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.state.borrow().entries.clone().unwrap_or_default()
    }

    pub fn commits(&self) -> usize {
        self.state.borrow().commits
    }
}

pub struct MemLock {
    mode: AccessMode,
}

impl StorageBackend for MemBackend {
    type Lock = MemLock;

    fn location(&self) -> &Path {
        &self.location
    }

    fn probe(&self) -> BackendKind {
        self.state.borrow().kind
    }

    fn lock(&self, mode: AccessMode) -> Result<MemLock> {
        let mut state = self.state.borrow_mut();
        if state.entries.is_none() {
            if mode == AccessMode::ReadOnly {
                return Err(QcdError::EmptyStore);
            }
            state.entries = Some(BTreeMap::new());
            state.kind = BackendKind::Native;
        }
        Ok(MemLock { mode })
    }

    fn load(&self, _lock: &mut MemLock) -> Result<BTreeMap<String, String>> {
        Ok(self.snapshot())
    }

    fn commit(&self, lock: &mut MemLock, entries: &BTreeMap<String, String>) -> Result<()> {
        if lock.mode != AccessMode::Writable {
            return Err(QcdError::ReadOnlySession);
        }
        let mut state = self.state.borrow_mut();
        state.entries = Some(entries.clone());
        state.commits += 1;
        Ok(())
    }
}
