use clap::{Parser, Subcommand};
use qcd::commands::{self, CommandDef};
use qcd::config::{DEFAULT_STORE_FILE, STORE_FILE_ENV};

#[derive(Parser, Debug)]
#[command(
    name = "qcd",
    bin_name = "qcd",
    version,
    disable_help_flag = true,
    disable_help_subcommand = true
)]
#[command(about = "Bookmark directories under short labels", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Specifies which database to use
    #[arg(short, long, global = true, env = STORE_FILE_ENV, value_name = "FILENAME")]
    pub file: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print help
    #[arg(short, long, global = true)]
    pub help: bool,
}

// Arguments are collected as-is; each command checks its own arity so usage
// errors are reported the same way from the library and the binary.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new entry into the database
    #[command(alias = "a")]
    Add { args: Vec<String> },

    /// Add current path into the database
    #[command(alias = "s")]
    Save { args: Vec<String> },

    /// Rename an entry in the database
    #[command(alias = "m")]
    Move { args: Vec<String> },

    /// Changes the path of an entry in the database
    #[command(alias = "c")]
    Change { args: Vec<String> },

    /// Delete an entry from the database
    #[command(alias = "d")]
    Delete { args: Vec<String> },

    /// List the entries in the database
    #[command(alias = "l")]
    List { args: Vec<String> },

    /// Retrieve an entry from the database
    #[command(alias = "g")]
    Get { args: Vec<String> },

    /// Prints this helpful message
    #[command(alias = "h")]
    Help,
}

impl Commands {
    pub fn def(&self) -> Option<CommandDef> {
        match self {
            Commands::Add { .. } => Some(commands::ADD),
            Commands::Save { .. } => Some(commands::SAVE),
            Commands::Move { .. } => Some(commands::MOVE),
            Commands::Change { .. } => Some(commands::CHANGE),
            Commands::Delete { .. } => Some(commands::DELETE),
            Commands::List { .. } => Some(commands::LIST),
            Commands::Get { .. } => Some(commands::GET),
            Commands::Help => None,
        }
    }
}

fn command_line(alias: &str, name: &str, syntax: &str, about: &str) -> String {
    format!(
        "  {:<11} {:<16} {}\n",
        format!("{}, {}", alias, name),
        syntax,
        about
    )
}

/// Help listing every command with its argument syntax.
pub fn get_grouped_help() -> String {
    let mut output = String::new();
    output.push_str(&format!("qcd {}\n", env!("CARGO_PKG_VERSION")));
    output.push_str("Bookmark directories under short labels\n");
    output.push('\n');
    output.push_str("Usage: qcd [OPTIONS] COMMAND [ARGS]...\n");
    output.push('\n');
    output.push_str("Commands:\n");
    for def in commands::ALL.iter() {
        output.push_str(&command_line(def.alias, def.name, def.syntax, def.about));
    }
    output.push_str(&command_line("h", "help", "", "Prints this helpful message"));

    output.push('\n');
    output.push_str("Options:\n");
    output.push_str(&format!(
        "  -f, --file FILENAME  Specifies which database to use (default: {}, env: {})\n",
        DEFAULT_STORE_FILE, STORE_FILE_ENV
    ));
    output.push_str("  -v, --verbose        Verbose output\n");
    output.push_str("  -h, --help           Print help\n");
    output.push_str("  -V, --version        Print version\n");
    output
}

/// Help for a single command, used by `qcd <command> --help`.
pub fn get_command_help(def: &CommandDef) -> String {
    format!(
        "{}\n\nUsage: qcd {} {}\nAlias: {}\n",
        def.about, def.name, def.syntax, def.alias
    )
}
