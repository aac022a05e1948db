use crate::commands::{CmdMessage, CmdResult, ADD};
use crate::error::Result;
use crate::model::AccessMode;
use crate::store::{Registry, StorageBackend};

/// `add [LABEL] PATH`. Without a label the path is stored under the smallest
/// free number. An existing label is overwritten.
pub fn run<B: StorageBackend>(registry: &Registry<B>, args: &[String]) -> Result<CmdResult> {
    ADD.check(args)?;

    let mut session = registry.open(AccessMode::Writable)?;
    let (label, path) = match args {
        [label, path] => (label.clone(), path.as_str()),
        [path] => (session.allocate_anonymous_key(), path.as_str()),
        _ => return Err(ADD.usage()),
    };
    session.put(&label, path)?;
    session.close()?;

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Added {} -> {}", label, path)))
        .with_label(label)
        .with_value(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QcdError;
    use crate::store::mem_backend::MemBackend;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn adds_labelled_entry() {
        let backend = MemBackend::missing();
        let registry = Registry::new(backend.clone());

        let result = run(&registry, &args(&["x", "/tmp"])).unwrap();
        assert_eq!(result.label.as_deref(), Some("x"));
        assert_eq!(backend.snapshot().get("x").map(String::as_str), Some("/tmp"));
    }

    #[test]
    fn unlabelled_entry_gets_first_free_number() {
        let backend = MemBackend::with_entries([("1", "/a"), ("3", "/c")]);
        let registry = Registry::new(backend.clone());

        let result = run(&registry, &args(&["/tmp/only-path"])).unwrap();
        assert_eq!(result.label.as_deref(), Some("2"));
        assert_eq!(
            backend.snapshot().get("2").map(String::as_str),
            Some("/tmp/only-path")
        );
    }

    #[test]
    fn first_unlabelled_entry_is_one() {
        let backend = MemBackend::missing();
        let registry = Registry::new(backend.clone());
        let result = run(&registry, &args(&["/tmp/only-path"])).unwrap();
        assert_eq!(result.label.as_deref(), Some("1"));
    }

    #[test]
    fn overwrites_existing_label() {
        let backend = MemBackend::with_entries([("x", "/old")]);
        let registry = Registry::new(backend.clone());
        run(&registry, &args(&["x", "/new"])).unwrap();
        assert_eq!(backend.snapshot().get("x").map(String::as_str), Some("/new"));
    }

    #[test]
    fn bad_arity_never_creates_the_store() {
        let backend = MemBackend::missing();
        let registry = Registry::new(backend.clone());

        assert!(matches!(run(&registry, &[]), Err(QcdError::Usage { .. })));
        assert!(matches!(
            run(&registry, &args(&["a", "b", "c"])),
            Err(QcdError::Usage { .. })
        ));
        assert_eq!(backend.commits(), 0);
        assert_eq!(backend.probe(), crate::store::BackendKind::Missing);
    }

    #[test]
    fn empty_label_is_rejected() {
        let backend = MemBackend::new();
        let registry = Registry::new(backend.clone());
        assert!(matches!(
            run(&registry, &args(&["", "/tmp"])),
            Err(QcdError::InvalidLabel)
        ));
        assert!(backend.snapshot().is_empty());
    }
}
