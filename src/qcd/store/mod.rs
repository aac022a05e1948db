//! # Storage Layer
//!
//! The label registry is a single persistent map from labels to paths. This
//! module splits it in two halves, the same way the rest of the crate keeps
//! business rules away from raw I/O:
//!
//! - [`backend::StorageBackend`]: the "how" of storage. Locking, loading and
//!   committing the whole map. Implemented by [`fs_backend::FsBackend`] for the
//!   real store file and [`mem_backend::MemBackend`] for tests.
//! - [`registry::Registry`] / [`registry::Session`]: the "what". Opening a
//!   scoped session, existence and collision rules, anonymous key allocation.
//!
//! ## Locating the store
//!
//! [`resolve`] turns the configured file name (usually `~/.qcddb`) into the
//! concrete file to open and identifies its format by reading the header
//! bytes. Only the native format can be opened; stores written by other
//! key-value engines are recognised so the error can say what they are.
//!
//! ## Storage Format
//!
//! ```text
//! QCDB1
//! {
//!   "entries": {
//!     "1": "/home/me/src",
//!     "docs": "/usr/share/doc"
//!   }
//! }
//! ```

use std::fmt;

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod registry;
pub mod resolve;

pub use backend::StorageBackend;
pub use registry::{Entries, Registry, Session};

/// Which engine produced the store file, as identified by [`resolve::probe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// qcd's own format, or an empty file left by an interrupted first write.
    Native,
    Gdbm,
    BerkeleyDb,
    Sqlite,
    /// Split `.dir`/`.dat` stores.
    DumbDbm,
    /// No store file exists yet.
    Missing,
    Unknown,
}

impl BackendKind {
    pub fn is_openable(&self) -> bool {
        matches!(self, BackendKind::Native | BackendKind::Missing)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BackendKind::Native => "qcd",
            BackendKind::Gdbm => "gdbm",
            BackendKind::BerkeleyDb => "berkeley db",
            BackendKind::Sqlite => "sqlite",
            BackendKind::DumbDbm => "dumbdbm",
            BackendKind::Missing => "missing",
            BackendKind::Unknown => "unrecognised",
        };
        f.write_str(name)
    }
}
