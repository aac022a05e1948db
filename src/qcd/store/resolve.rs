//! Locating the store file and identifying its format.

use super::BackendKind;
use directories::BaseDirs;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// First line of every native store file.
pub const NATIVE_MAGIC: &[u8] = b"QCDB1\n";

/// Suffixes a previous run may have left on the configured file name,
/// in order of preference.
const STORE_SUFFIXES: &[&str] = &["", ".db"];

const SQLITE_MAGIC: &[u8] = b"SQLite format 3\0";
const GDBM_MAGICS: &[u32] = &[0x1357_9ace, 0x1357_9acd, 0x1357_9acf];
const BERKELEY_MAGICS: &[u32] = &[0x0006_1561, 0x0005_3162];
const HEADER_LEN: usize = 16;

/// The current user's home directory, if one can be determined.
pub fn home_dir() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.home_dir().to_path_buf())
}

/// Expands a leading `~` or `~/` to `home`. Anything else, including
/// `~user` forms, is returned unchanged.
pub fn expand_home(path: &str, home: Option<&Path>) -> PathBuf {
    match home {
        Some(home) if path == "~" => home.to_path_buf(),
        Some(home) => match path.strip_prefix("~/") {
            Some(rest) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

/// Maps the configured store name to the file that should be opened.
///
/// An existing file named after the configured path, optionally with a `.db`
/// suffix some engines append, is reused. When nothing exists yet the expanded
/// path is returned as is, to be created by the first writable session.
pub fn resolve_store_path(configured: &str, home: Option<&Path>) -> PathBuf {
    let expanded = expand_home(configured, home);
    let Some(base) = expanded.file_name().and_then(|n| n.to_str()) else {
        return expanded;
    };

    for suffix in STORE_SUFFIXES {
        let candidate = expanded.with_file_name(format!("{}{}", base, suffix));
        if candidate.is_file() {
            debug!(path = %candidate.display(), "reusing existing store file");
            return candidate;
        }
    }

    debug!(path = %expanded.display(), "no existing store file");
    expanded
}

/// Identifies the engine that wrote `path` from its header bytes.
pub fn probe(path: &Path) -> BackendKind {
    if path.is_file() {
        return match read_header(path) {
            Ok(header) => classify_header(&header),
            Err(_) => BackendKind::Unknown,
        };
    }
    if path.exists() {
        return BackendKind::Unknown;
    }
    if with_suffix(path, ".dir").is_file() {
        return BackendKind::DumbDbm;
    }
    BackendKind::Missing
}

/// Classifies the leading bytes of a store file.
pub fn classify_header(header: &[u8]) -> BackendKind {
    if header.is_empty() || header.starts_with(NATIVE_MAGIC) {
        return BackendKind::Native;
    }
    if header.starts_with(SQLITE_MAGIC) {
        return BackendKind::Sqlite;
    }
    if word_matches(header, 0, GDBM_MAGICS) {
        return BackendKind::Gdbm;
    }
    if word_matches(header, 12, BERKELEY_MAGICS) {
        return BackendKind::BerkeleyDb;
    }
    BackendKind::Unknown
}

fn read_header(path: &Path) -> std::io::Result<Vec<u8>> {
    let file = File::open(path)?;
    let mut header = Vec::with_capacity(HEADER_LEN);
    file.take(HEADER_LEN as u64).read_to_end(&mut header)?;
    Ok(header)
}

// Engines write their magic in native byte order, so accept both.
fn word_matches(header: &[u8], offset: usize, magics: &[u32]) -> bool {
    let Some(bytes) = header.get(offset..offset + 4) else {
        return false;
    };
    let word = [bytes[0], bytes[1], bytes[2], bytes[3]];
    let le = u32::from_le_bytes(word);
    let be = u32::from_be_bytes(word);
    magics.iter().any(|m| *m == le || *m == be)
}

pub(crate) fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    path.with_file_name(name)
}
