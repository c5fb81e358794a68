use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "internity", bin_name = "internity", version)]
#[command(
    about = "Keep track of your internship applications",
    long_about = None,
    after_help = "Without COMMAND an interactive session starts. Type 'help' there for the command list."
)]
pub struct Cli {
    /// Use this data file instead of the configured one
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub data_file: Option<PathBuf>,

    /// Read config.json from this directory
    #[arg(long, value_name = "PATH", help_heading = "Options")]
    pub config_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, help_heading = "Options")]
    pub verbose: bool,

    /// Run one command and exit, e.g. `internity list sort/asc`
    #[arg(value_name = "COMMAND", trailing_var_arg = true, allow_hyphen_values = true)]
    pub line: Vec<String>,
}

/// One command understood inside a session.
pub struct LineCommand {
    pub name: &'static str,
    pub about: &'static str,
}

pub const LINE_COMMANDS: &[LineCommand] = &[
    LineCommand {
        name: "add",
        about: "Add a new internship application with company, role, deadline, and pay.",
    },
    LineCommand {
        name: "delete",
        about: "Remove an internship application at the specified index.",
    },
    LineCommand {
        name: "update",
        about: "Update any field of an internship application at the specified index.",
    },
    LineCommand {
        name: "list",
        about: "Display all internship applications, optionally sorted by deadline.",
    },
    LineCommand {
        name: "find",
        about: "Search and list internship applications matching a keyword.",
    },
    LineCommand {
        name: "dashboard",
        about: "View statistics about your internship applications.",
    },
    LineCommand {
        name: "username",
        about: "Set your username for personalised greetings.",
    },
    LineCommand {
        name: "help",
        about: "Display this list again. Your guide to managing internships.",
    },
    LineCommand {
        name: "exit",
        about: "Terminate this session. Your progress will be saved.",
    },
];

/// Command group definitions for help output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandGroup {
    Records,
    Queries,
    Session,
}

impl CommandGroup {
    pub fn heading(&self) -> &'static str {
        match self {
            CommandGroup::Records => "Managing Internships:",
            CommandGroup::Queries => "Viewing Internships:",
            CommandGroup::Session => "Session:",
        }
    }

    pub fn for_command(name: &str) -> Option<Self> {
        match name {
            "add" | "delete" | "update" => Some(CommandGroup::Records),
            "list" | "find" | "dashboard" => Some(CommandGroup::Queries),
            "username" | "help" | "exit" => Some(CommandGroup::Session),
            _ => None,
        }
    }

    /// Returns all groups in display order
    pub fn all() -> &'static [CommandGroup] {
        &[
            CommandGroup::Records,
            CommandGroup::Queries,
            CommandGroup::Session,
        ]
    }
}
