use crate::commands::{CmdMessage, CmdResult, LIST};
use crate::error::Result;
use crate::model::{AccessMode, Entry};
use crate::store::{Registry, StorageBackend};

pub fn run<B: StorageBackend>(registry: &Registry<B>, args: &[String]) -> Result<CmdResult> {
    LIST.check(args)?;

    let session = registry.open(AccessMode::ReadOnly)?;
    let entries = sorted_entries(session.entries());
    let backend = session.backend();
    session.close()?;

    let mut result = CmdResult::default().with_backend(backend);
    if entries.is_empty() {
        result.add_message(CmdMessage::info("The database has no entries."));
    }
    Ok(result.with_entries(entries))
}

/// Collects entries in display order: ascending byte-wise by label.
/// Backends iterate in whatever order suits them, so this is the only place
/// ordering is decided.
pub fn sorted_entries<'a, I>(entries: I) -> Vec<Entry>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut collected: Vec<Entry> = entries.into_iter().map(Entry::from).collect();
    collected.sort_by(|a, b| a.label.cmp(&b.label));
    collected
}
