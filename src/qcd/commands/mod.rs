//! # Command Layer
//!
//! One module per user-facing operation. Every `run` function follows the same
//! shape:
//!
//! 1. Check the argument count against its [`CommandDef`] *before* touching
//!    the store, so a typo never takes a write lock.
//! 2. Open one [`Session`](crate::store::Session), read-only or writable.
//! 3. Perform the operation and close the session.
//!
//! Nothing here prints or exits; results come back as [`CmdResult`].

use crate::error::{QcdError, Result};
use crate::model::Entry;
use crate::store::BackendKind;
use std::ops::RangeInclusive;

pub mod add;
pub mod change;
pub mod delete;
pub mod get;
pub mod list;
pub mod move_entry;
pub mod save;

/// Name, argument syntax and accepted argument count of a command.
#[derive(Debug, Clone)]
pub struct CommandDef {
    pub name: &'static str,
    pub alias: &'static str,
    pub syntax: &'static str,
    pub about: &'static str,
    pub arity: RangeInclusive<usize>,
}

impl CommandDef {
    pub fn usage(&self) -> QcdError {
        QcdError::Usage {
            command: self.name,
            syntax: self.syntax,
        }
    }

    pub fn check(&self, args: &[String]) -> Result<()> {
        if self.arity.contains(&args.len()) {
            Ok(())
        } else {
            Err(self.usage())
        }
    }
}

pub const ADD: CommandDef = CommandDef {
    name: "add",
    alias: "a",
    syntax: "[LABEL] PATH",
    about: "Add a new entry into the database",
    arity: 1..=2,
};

pub const SAVE: CommandDef = CommandDef {
    name: "save",
    alias: "s",
    syntax: "[LABEL]",
    about: "Add current path into the database",
    arity: 0..=1,
};

pub const CHANGE: CommandDef = CommandDef {
    name: "change",
    alias: "c",
    syntax: "LABEL NEW_PATH",
    about: "Changes the path of an entry in the database",
    arity: 2..=2,
};

pub const MOVE: CommandDef = CommandDef {
    name: "move",
    alias: "m",
    syntax: "FROM TO",
    about: "Rename an entry in the database",
    arity: 2..=2,
};

pub const DELETE: CommandDef = CommandDef {
    name: "delete",
    alias: "d",
    syntax: "LABEL",
    about: "Delete an entry from the database",
    arity: 1..=1,
};

pub const LIST: CommandDef = CommandDef {
    name: "list",
    alias: "l",
    syntax: "",
    about: "List the entries in the database",
    arity: 0..=0,
};

pub const GET: CommandDef = CommandDef {
    name: "get",
    alias: "g",
    syntax: "LABEL",
    about: "Retrieve an entry from the database",
    arity: 1..=1,
};

/// Every registry command, in help order.
pub const ALL: [CommandDef; 7] = [ADD, SAVE, MOVE, CHANGE, DELETE, LIST, GET];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Label the command created, changed or read.
    pub label: Option<String>,
    /// Path stored under `label`.
    pub value: Option<String>,
    /// Listing, already sorted by label.
    pub entries: Vec<Entry>,
    pub backend: Option<BackendKind>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn with_entries(mut self, entries: Vec<Entry>) -> Self {
        self.entries = entries;
        self
    }

    pub fn with_backend(mut self, backend: BackendKind) -> Self {
        self.backend = Some(backend);
        self
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.add_message(message);
        self
    }
}
