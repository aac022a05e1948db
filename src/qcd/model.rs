/// How a session opens the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    ReadOnly,
    Writable,
}

/// One label → path association.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub label: String,
    pub path: String,
}

impl Entry {
    pub fn new(label: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            path: path.into(),
        }
    }
}

impl<'a> From<(&'a str, &'a str)> for Entry {
    fn from((label, path): (&'a str, &'a str)) -> Self {
        Self::new(label, path)
    }
}
