use crate::commands::{CmdMessage, CmdResult, DELETE};
use crate::error::Result;
use crate::model::AccessMode;
use crate::store::{Registry, StorageBackend};

pub fn run<B: StorageBackend>(registry: &Registry<B>, args: &[String]) -> Result<CmdResult> {
    DELETE.check(args)?;
    let label = &args[0];

    let mut session = registry.open(AccessMode::Writable)?;
    session.remove(label)?;
    session.close()?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Deleted {}", label)))
        .with_label(label.as_str()))
}
