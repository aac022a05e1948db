use crate::commands::{CmdMessage, CmdResult, CHANGE};
use crate::error::{QcdError, Result};
use crate::model::AccessMode;
use crate::store::{Registry, StorageBackend};

/// `change LABEL NEW_PATH`. Unlike `add`, the label must already exist.
pub fn run<B: StorageBackend>(registry: &Registry<B>, args: &[String]) -> Result<CmdResult> {
    CHANGE.check(args)?;
    let (label, path) = (&args[0], &args[1]);

    let mut session = registry.open(AccessMode::Writable)?;
    if !session.exists(label) {
        return Err(QcdError::NotFound(label.clone()));
    }
    session.put(label, path)?;
    session.close()?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Changed {} -> {}", label, path)))
        .with_label(label.as_str())
        .with_value(path.as_str()))
}
