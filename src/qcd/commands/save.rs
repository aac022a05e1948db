use crate::commands::{add, CmdResult, SAVE};
use crate::error::{QcdError, Result};
use crate::store::{Registry, StorageBackend};
use std::io;
use std::path::Path;

/// `save [LABEL]`: `add` with `cwd` appended as the path.
pub fn run<B: StorageBackend>(
    registry: &Registry<B>,
    args: &[String],
    cwd: &Path,
) -> Result<CmdResult> {
    SAVE.check(args)?;

    let cwd = cwd.to_str().ok_or_else(|| {
        QcdError::Io(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("working directory {} is not valid UTF-8", cwd.display()),
        ))
    })?;

    let mut add_args = args.to_vec();
    add_args.push(cwd.to_string());
    add::run(registry, &add_args)
}
