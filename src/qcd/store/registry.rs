//! Scoped sessions over the label registry.
//!
//! Every command opens exactly one [`Session`], performs one logical
//! operation and closes it. Mutations are buffered in the session and written
//! by [`Session::close`]; a session dropped on an error path writes nothing
//! and still releases the store, since the backend lock is released on drop.

use super::backend::StorageBackend;
use super::BackendKind;
use crate::error::{QcdError, Result};
use crate::model::AccessMode;
use std::collections::{btree_map, BTreeMap};
use tracing::{debug, trace};

/// Opens sessions on a storage backend.
pub struct Registry<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Registry<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Opens a session. Read-only sessions require an existing store and fail
    /// with [`QcdError::EmptyStore`] otherwise; writable sessions create it.
    pub fn open(&self, mode: AccessMode) -> Result<Session<'_, B>> {
        let kind = self.backend.probe();
        debug!(
            path = %self.backend.location().display(),
            backend = %kind,
            ?mode,
            "opening registry"
        );

        if kind == BackendKind::Missing && mode == AccessMode::ReadOnly {
            return Err(QcdError::EmptyStore);
        }
        if !kind.is_openable() {
            return Err(QcdError::UnsupportedFormat {
                path: self.backend.location().to_path_buf(),
                kind,
            });
        }

        let mut lock = self.backend.lock(mode)?;
        let entries = self.backend.load(&mut lock)?;
        Ok(Session {
            backend: &self.backend,
            lock,
            mode,
            kind: BackendKind::Native,
            entries,
            // A brand new store gets its header written even if nothing is added.
            dirty: kind == BackendKind::Missing,
        })
    }
}

/// A locked view of the registry for the duration of one command.
pub struct Session<'a, B: StorageBackend> {
    backend: &'a B,
    lock: B::Lock,
    mode: AccessMode,
    kind: BackendKind,
    entries: BTreeMap<String, String>,
    dirty: bool,
}

impl<'a, B: StorageBackend> Session<'a, B> {
    /// Format of the store this session reads from.
    pub fn backend(&self) -> BackendKind {
        self.kind
    }

    pub fn exists(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Result<String> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| QcdError::NotFound(key.to_string()))
    }

    /// Inserts or silently overwrites `key`.
    pub fn put(&mut self, key: &str, value: &str) -> Result<()> {
        self.ensure_writable()?;
        if key.is_empty() {
            return Err(QcdError::InvalidLabel);
        }
        debug!(key, value, "put");
        self.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        Ok(())
    }

    pub fn remove(&mut self, key: &str) -> Result<()> {
        self.ensure_writable()?;
        if self.entries.remove(key).is_none() {
            return Err(QcdError::NotFound(key.to_string()));
        }
        debug!(key, "remove");
        self.dirty = true;
        Ok(())
    }

    /// The smallest positive integer, as a string, that is not yet a label.
    pub fn allocate_anonymous_key(&self) -> String {
        smallest_free_key(|key| self.exists(key))
    }

    /// Single-pass iteration over every entry. Order is not part of the
    /// contract; sort before display.
    pub fn entries(&self) -> Entries<'_> {
        Entries {
            inner: self.entries.iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Writes pending changes and releases the store.
    pub fn close(mut self) -> Result<()> {
        if self.dirty && self.mode == AccessMode::Writable {
            self.backend.commit(&mut self.lock, &self.entries)?;
        }
        debug!(dirty = self.dirty, "registry closed");
        Ok(())
    }

    fn ensure_writable(&self) -> Result<()> {
        match self.mode {
            AccessMode::Writable => Ok(()),
            AccessMode::ReadOnly => Err(QcdError::ReadOnlySession),
        }
    }
}

/// Iterator returned by [`Session::entries`].
pub struct Entries<'s> {
    inner: btree_map::Iter<'s, String, String>,
}

impl<'s> Iterator for Entries<'s> {
    type Item = (&'s str, &'s str);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Linear probe from 1 upwards. Freed numbers are reused.
pub fn smallest_free_key<F>(is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut n: u64 = 1;
    loop {
        let candidate = n.to_string();
        if !is_taken(&candidate) {
            trace!(key = %candidate, "allocated anonymous key");
            return candidate;
        }
        n += 1;
    }
}
