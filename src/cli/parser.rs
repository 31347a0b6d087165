use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for tooltab
/// CLI application to manage a machinist tool table with SQLite
#[derive(Parser)]
#[command(
    name = "tooltab",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple tool-table CLI: manage machinist cutting tools in SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Manage the database (integrity checks, maintenance, stats)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Add a tool record
    Add {
        /// Comma-separated field values in column order:
        /// T,Name,L,R,Type,Description,LCut,Cuts,ROffset,LOffset,PType.
        /// Fewer values are padded with blanks; more than 11 is an error.
        values: String,
    },

    /// Edit a tool record, replacing its fields
    Edit {
        /// Record id
        id: i64,

        /// Comma-separated field values in column order. Positions left out
        /// keep the record's current value.
        values: String,
    },

    /// Delete a tool record by id
    Del {
        /// Record id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(long = "yes", short = 'y')]
        yes: bool,
    },

    /// List the tool table
    List {
        /// Sort by a column (ID, T, Name, L, R, Type, Description, LCut,
        /// Cuts, ROffset, LOffset, PType). Numeric columns sort numerically.
        #[arg(long, short)]
        sort: Option<String>,

        /// Sort descending (with --sort)
        #[arg(long, requires = "sort")]
        desc: bool,

        /// Show only rows where any column contains this text
        /// (case-insensitive)
        #[arg(long, short)]
        filter: Option<String>,
    },

    /// Find rows containing the given text in any column
    Search {
        /// Text to look for (case-insensitive substring)
        text: String,
    },

    /// Export the tool table
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Export only rows matching this text (same rule as list --filter)
        #[arg(long)]
        filter: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        /// Destination file path
        #[arg(long, value_name = "FILE")]
        file: String,
    },
}
