use crate::store::BackendKind;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QcdError {
    #[error("usage: qcd {command} {syntax}")]
    Usage {
        command: &'static str,
        syntax: &'static str,
    },

    #[error("Database is empty! Try adding something!")]
    EmptyStore,

    #[error("{0} does not exist in the database.")]
    NotFound(String),

    #[error("{0} already exists in the database.")]
    Conflict(String),

    #[error("Labels cannot be empty")]
    InvalidLabel,

    #[error("Cannot modify a store opened read-only")]
    ReadOnlySession,

    #[error("{} is not a qcd store (detected: {kind})", path.display())]
    UnsupportedFormat { path: PathBuf, kind: BackendKind },

    #[error("Store file {} is corrupt: {reason}", path.display())]
    Corrupt { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QcdError {
    /// Process exit status for this error: 2 for usage mistakes, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        match self {
            QcdError::Usage { .. } => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, QcdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_errors_exit_with_two() {
        let err = QcdError::Usage {
            command: "move",
            syntax: "FROM TO",
        };
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "usage: qcd move FROM TO");
    }

    #[test]
    fn semantic_errors_exit_with_one() {
        assert_eq!(QcdError::EmptyStore.exit_code(), 1);
        assert_eq!(QcdError::NotFound("x".into()).exit_code(), 1);
        assert_eq!(QcdError::Conflict("y".into()).exit_code(), 1);
    }

    #[test]
    fn messages_name_the_label() {
        assert_eq!(
            QcdError::NotFound("work".into()).to_string(),
            "work does not exist in the database."
        );
        assert_eq!(
            QcdError::Conflict("home".into()).to_string(),
            "home already exists in the database."
        );
    }

    #[test]
    fn unsupported_format_names_detected_kind() {
        let err = QcdError::UnsupportedFormat {
            path: PathBuf::from("/tmp/.qcddb"),
            kind: BackendKind::Unknown,
        };
        assert_eq!(
            err.to_string(),
            "/tmp/.qcddb is not a qcd store (detected: unrecognised)"
        );
    }
}
