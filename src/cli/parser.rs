use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rAttendance
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "A staff attendance kiosk: check staff in and out, flag late arrivals and short shifts",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the staff directory file (YAML or JSON)
    #[arg(global = true, long = "directory", value_name = "FILE")]
    pub directory: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database, configuration and staff directory template
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Check a staff member in
    In {
        /// Staff ID (case-insensitive)
        id: String,

        /// Timestamp to record instead of now (YYYY-MM-DD HH:MM[:SS])
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Check a staff member out
    Out {
        /// Staff ID (case-insensitive)
        id: String,

        /// Timestamp to record instead of now (YYYY-MM-DD HH:MM[:SS])
        #[arg(long = "at", value_name = "TIMESTAMP")]
        at: Option<String>,
    },

    /// Run the interactive kiosk (reads staff IDs from stdin)
    Kiosk {
        /// Override the simulated scan delay in milliseconds
        #[arg(long = "scan-delay", value_name = "MS")]
        scan_delay: Option<u64>,
    },

    /// Show who is currently checked in
    Status,

    /// Print the attendance log, newest first
    List {
        /// Filter by check-in date.
        ///
        /// Supported formats:
        /// - YYYY                  → entire year (e.g. "2026")
        /// - YYYY-MM              → entire month (e.g. "2026-10")
        /// - YYYY-MM-DD           → specific day (e.g. "2026-10-14")
        ///
        /// Ranges (start:end) in the same format, e.g. "2026-09:2026-10".
        #[arg(long, short)]
        period: Option<String>,
    },

    /// Print the staff directory
    Staff,

    /// Clear all open sessions and the attendance log
    Reset {
        /// Do not ask for confirmation
        #[arg(long)]
        yes: bool,
    },

    /// Export the attendance log for payroll
    Export {
        /// Export format
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Date range to export (same formats as `list --period`, or "all")
        #[arg(long, value_name = "RANGE")]
        range: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
