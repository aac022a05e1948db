use crate::commands::{CmdResult, GET};
use crate::error::Result;
use crate::model::AccessMode;
use crate::store::{Registry, StorageBackend};

pub fn run<B: StorageBackend>(registry: &Registry<B>, args: &[String]) -> Result<CmdResult> {
    GET.check(args)?;
    let label = &args[0];

    let session = registry.open(AccessMode::ReadOnly)?;
    let path = session.get(label)?;
    session.close()?;

    Ok(CmdResult::default()
        .with_label(label.as_str())
        .with_value(path))
}
