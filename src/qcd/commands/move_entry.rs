use crate::commands::{CmdMessage, CmdResult, MOVE};
use crate::error::{QcdError, Result};
use crate::model::AccessMode;
use crate::store::{Registry, StorageBackend};

/// `move FROM TO`: renames a label, keeping its path.
///
/// Both mutations are buffered in one session and land in a single commit,
/// so an interrupted move never leaves both labels behind.
pub fn run<B: StorageBackend>(registry: &Registry<B>, args: &[String]) -> Result<CmdResult> {
    MOVE.check(args)?;
    let (from, to) = (&args[0], &args[1]);

    let mut session = registry.open(AccessMode::Writable)?;
    if !session.exists(from) {
        return Err(QcdError::NotFound(from.clone()));
    }
    if session.exists(to) {
        return Err(QcdError::Conflict(to.clone()));
    }

    let path = session.get(from)?;
    session.put(to, &path)?;
    session.remove(from)?;
    session.close()?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Moved {} -> {}", from, to)))
        .with_label(to.as_str())
        .with_value(path))
}
