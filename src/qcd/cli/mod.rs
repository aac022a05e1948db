//! # CLI Behavior
//!
//! This is **one possible UI client** for qcd. It is the only place that knows
//! about terminal I/O, exit codes and output formatting.
//!
//! ## Streams
//!
//! `get` prints the bare path on stdout and nothing else, so it can be used in
//! command substitution (`cd "$(qcd get src)"`). Everything else that is meant
//! for a human (listings, help, `--verbose` messages, logs) goes to stderr.
//!
//! ## Module Structure
//!
//! - `commands`: Dispatch from parsed arguments to the API, plus output
//! - `render`: Listing table and message formatting
//! - `setup`: Argument parsing via clap, help text
//! - `logging`: tracing subscriber setup

mod commands;
mod logging;
mod render;
pub mod setup;

pub use commands::run;
