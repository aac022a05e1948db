use crate::store::resolve::resolve_store_path;
use std::path::{Path, PathBuf};

/// Store used when neither `--file` nor `QCD_FILE` is given.
pub const DEFAULT_STORE_FILE: &str = "~/.qcddb";

/// Environment variable overriding the default store file.
pub const STORE_FILE_ENV: &str = "QCD_FILE";

/// Environment variable holding a `tracing` filter directive, e.g. `qcd=debug`.
pub const LOG_ENV: &str = "QCD_LOG";

/// Runtime configuration for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QcdConfig {
    /// Configured store file, before home expansion and suffix discovery.
    pub store_file: String,
    pub verbose: bool,
}

impl Default for QcdConfig {
    fn default() -> Self {
        Self {
            store_file: DEFAULT_STORE_FILE.to_string(),
            verbose: false,
        }
    }
}

impl QcdConfig {
    /// `file` is the `--file` value, which clap falls back to `QCD_FILE` for.
    /// An empty value selects the default store.
    pub fn resolve(file: Option<String>, verbose: bool) -> Self {
        let store_file = file
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_STORE_FILE.to_string());
        Self {
            store_file,
            verbose,
        }
    }

    /// The concrete store file to open.
    pub fn store_path(&self, home: Option<&Path>) -> PathBuf {
        resolve_store_path(&self.store_file, home)
    }
}
