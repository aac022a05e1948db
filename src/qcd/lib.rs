//! # qcd Architecture
//!
//! qcd keeps a persistent registry of short labels pointing at directories, so
//! a shell alias can jump back to a bookmarked path. The library holds every
//! rule; the `qcd` binary is one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders listings, handles logging      │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Arity checks, one session per command                    │
//! │  - Returns `CmdResult`, never prints                        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Registry + Session over a StorageBackend                 │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Output streams
//!
//! Only `get` writes to stdout, and only the stored path, so `cd "$(qcd get
//! src)"` works. Listings, help and errors go to stderr.
//!
//! ## Concurrency
//!
//! One command per process. Concurrent invocations are serialized by advisory
//! file locks on the store (shared for reads, exclusive for writes); qcd adds
//! no coordination of its own.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: add, save, change, move, delete, list, get
//! - [`store`]: Registry, sessions, backends, store file discovery
//! - [`model`]: `Entry` and `AccessMode`
//! - [`config`]: Store file selection
//! - [`error`]: Error types and exit codes

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
