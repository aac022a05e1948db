use super::backend::StorageBackend;
use super::resolve::{probe, with_suffix, NATIVE_MAGIC};
use super::BackendKind;
use crate::error::{QcdError, Result};
use crate::model::AccessMode;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Serialize)]
struct StoreFileRef<'a> {
    entries: &'a BTreeMap<String, String>,
}

#[derive(Deserialize)]
struct StoreFile {
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

/// The store file on disk.
///
/// Sessions serialize on advisory `fs2` locks taken on a `<store>.lock`
/// sidecar, never on the store itself, because every commit replaces the
/// store file: the new content goes to `<store>.tmp`, is synced, then renamed
/// over the store. Readers see the old file or the new one, never a torn
/// write.
pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn lock_path(&self) -> PathBuf {
        with_suffix(&self.path, ".lock")
    }

    fn tmp_path(&self) -> PathBuf {
        with_suffix(&self.path, ".tmp")
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(QcdError::Io)?;
            }
        }
        Ok(())
    }

    fn decode(&self, bytes: &[u8]) -> Result<BTreeMap<String, String>> {
        if bytes.is_empty() {
            return Ok(BTreeMap::new());
        }
        let body = bytes
            .strip_prefix(NATIVE_MAGIC)
            .ok_or_else(|| QcdError::Corrupt {
                path: self.path.clone(),
                reason: "missing QCDB1 header".to_string(),
            })?;
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(BTreeMap::new());
        }
        let file: StoreFile = serde_json::from_slice(body).map_err(|e| QcdError::Corrupt {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(file.entries)
    }

    fn encode(entries: &BTreeMap<String, String>) -> Result<Vec<u8>> {
        let mut bytes = NATIVE_MAGIC.to_vec();
        serde_json::to_writer_pretty(&mut bytes, &StoreFileRef { entries })
            .map_err(QcdError::Serialization)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn replace_store(&self, bytes: &[u8]) -> Result<()> {
        let tmp = self.tmp_path();
        if let Err(e) = write_synced(&tmp, bytes) {
            let _ = fs::remove_file(&tmp);
            return Err(QcdError::Io(e));
        }
        fs::rename(&tmp, &self.path).map_err(QcdError::Io)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// An acquired advisory lock on the store's `.lock` sidecar.
pub struct FileLock {
    file: File,
    mode: AccessMode,
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}

impl StorageBackend for FsBackend {
    type Lock = FileLock;

    fn location(&self) -> &Path {
        &self.path
    }

    fn probe(&self) -> BackendKind {
        probe(&self.path)
    }

    fn lock(&self, mode: AccessMode) -> Result<FileLock> {
        match mode {
            // Readers never create anything beside a missing store.
            AccessMode::ReadOnly => {
                fs::metadata(&self.path).map_err(QcdError::Io)?;
            }
            AccessMode::Writable => self.ensure_parent()?,
        }

        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(self.lock_path())
            .map_err(QcdError::Io)?;
        match mode {
            AccessMode::ReadOnly => FileExt::lock_shared(&file),
            AccessMode::Writable => FileExt::lock_exclusive(&file),
        }
        .map_err(QcdError::Io)?;
        let lock = FileLock { file, mode };

        if mode == AccessMode::Writable && !self.path.exists() {
            self.replace_store(&Self::encode(&BTreeMap::new())?)?;
        }

        debug!(path = %self.path.display(), ?mode, "store locked");
        Ok(lock)
    }

    fn load(&self, _lock: &mut FileLock) -> Result<BTreeMap<String, String>> {
        let bytes = fs::read(&self.path).map_err(QcdError::Io)?;
        self.decode(&bytes)
    }

    fn commit(&self, lock: &mut FileLock, entries: &BTreeMap<String, String>) -> Result<()> {
        if lock.mode != AccessMode::Writable {
            return Err(QcdError::ReadOnlySession);
        }
        self.replace_store(&Self::encode(entries)?)?;

        debug!(path = %self.path.display(), entries = entries.len(), "store committed");
        Ok(())
    }
}
