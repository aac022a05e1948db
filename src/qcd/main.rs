//! # qcd CLI
//!
//! The binary is intentionally thin: the CLI lives in `cli/`, and this file
//! only invokes `cli::run()` and turns errors into exit statuses.
//!
//! Exit statuses:
//! - `0`: success
//! - `1`: the operation failed (unknown label, label taken, empty store, I/O)
//! - `2`: wrong number of arguments or unknown command

mod cli;

use qcd::error::QcdError;

fn main() {
    if let Err(e) = cli::run() {
        match &e {
            QcdError::Usage { .. } => {
                eprintln!("{}", e);
                eprintln!("Try 'qcd help' for more information.");
            }
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}
