use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for crewclock
/// CLI application to track crew working hours against work orders with SQLite
#[derive(Parser)]
#[command(
    name = "crewclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track crew clock-in/clock-out, attribute hours to work orders, and compute weekly payroll summaries",
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

    /// Manage the database (integrity checks, statistics)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage workers
    Worker {
        #[command(subcommand)]
        action: WorkerAction,
    },

    /// Manage work orders and assignments
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },

    /// Clock a worker in or out
    Clock {
        #[command(subcommand)]
        action: ClockAction,
    },

    /// Weekly summary for one worker
    Summary {
        /// Worker id
        worker: i64,

        /// Reference date inside the week (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Weekly report for all workers
    Report {
        /// Reference date inside the week (YYYY-MM-DD, default today)
        #[arg(long = "date")]
        date: Option<String>,
    },

    /// Detect and repair inconsistent clock entries
    Repair,

    /// Create a backup copy of the database
    Backup {
        /// Destination file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Compress the backup (gzip)
        #[arg(long)]
        compress: bool,
    },

    /// Export the weekly report
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        /// Reference date inside the week to export (default today)
        #[arg(long = "date")]
        date: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}

#[derive(Subcommand)]
pub enum WorkerAction {
    /// Register a new worker
    Add {
        #[arg(long)]
        name: String,

        #[arg(long, default_value = "", help = "Job title, e.g. Picker, Foreman")]
        position: String,
    },

    /// List all workers
    List,

    /// Mark a worker inactive
    Deactivate {
        /// Worker id
        id: i64,
    },
}

#[derive(Subcommand)]
pub enum OrderAction {
    /// Create a work order
    Add {
        #[arg(long)]
        title: String,
    },

    /// List all work orders
    List,

    /// Update a work order status
    Status {
        /// Work order id
        id: i64,

        #[arg(
            long = "set",
            help = "New status: created, assigned, in-progress, paused, completed, cancelled"
        )]
        set: String,
    },

    /// Record an assignment fact for a worker
    Assign {
        #[arg(long)]
        worker: i64,

        /// Work order id; omit to record an unassignment
        #[arg(long)]
        order: Option<i64>,

        /// Effective-from instant (YYYY-MM-DD HH:MM, default now)
        #[arg(long = "at")]
        at: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum ClockAction {
    /// Open a session for a worker
    In {
        #[arg(long)]
        worker: i64,

        /// Clock-in instant (YYYY-MM-DD HH:MM, default now)
        #[arg(long = "at")]
        at: Option<String>,
    },

    /// Close the worker's open session
    Out {
        #[arg(long)]
        worker: i64,

        /// Clock-out instant (YYYY-MM-DD HH:MM, default now)
        #[arg(long = "at")]
        at: Option<String>,
    },
}
