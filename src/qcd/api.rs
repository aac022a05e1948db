//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! qcd operation, whatever the UI. It dispatches to `commands::*::run` and
//! returns their structured results; it never prints or exits.
//!
//! `QcdApi<B: StorageBackend>` is generic over the storage backend:
//! - Production: `QcdApi<FsBackend>`
//! - Testing: `QcdApi<MemBackend>`

use crate::commands;
use crate::error::Result;
use crate::store::{Registry, StorageBackend};
use std::path::Path;

pub struct QcdApi<B: StorageBackend> {
    registry: Registry<B>,
}

impl<B: StorageBackend> QcdApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            registry: Registry::new(backend),
        }
    }

    pub fn add(&self, args: &[String]) -> Result<CmdResult> {
        commands::add::run(&self.registry, args)
    }

    pub fn save(&self, args: &[String], cwd: &Path) -> Result<CmdResult> {
        commands::save::run(&self.registry, args, cwd)
    }

    pub fn change(&self, args: &[String]) -> Result<CmdResult> {
        commands::change::run(&self.registry, args)
    }

    pub fn move_entry(&self, args: &[String]) -> Result<CmdResult> {
        commands::move_entry::run(&self.registry, args)
    }

    pub fn delete(&self, args: &[String]) -> Result<CmdResult> {
        commands::delete::run(&self.registry, args)
    }

    pub fn list(&self, args: &[String]) -> Result<CmdResult> {
        commands::list::run(&self.registry, args)
    }

    pub fn get(&self, args: &[String]) -> Result<CmdResult> {
        commands::get::run(&self.registry, args)
    }

    /// Path of the store file this API operates on.
    pub fn store_location(&self) -> &Path {
        self.registry.backend().location()
    }
}

pub use crate::commands::{CmdMessage, CmdResult, CommandDef, MessageLevel};
