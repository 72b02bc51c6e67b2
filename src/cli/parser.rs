use clap::{Parser, Subcommand};

/// Command-line interface definition for ttracker
/// CLI application to track work sessions with desktop reminders
#[derive(Parser)]
#[command(
    name = "ttracker",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple time tracking CLI: start and stop work sessions, get periodic reminders, report per day",
    long_about = None
)]
pub struct Cli {
    /// Override the config directory (useful for tests or a custom root)
    #[arg(global = true, long = "dir")]
    pub dir: Option<String>,

    /// Run in test mode (console notifications, no reminder daemon)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start tracking a work session
    Start {
        /// Description of the work session (joined with spaces)
        description: Vec<String>,
    },

    /// Stop tracking and log the completed session
    Stop,

    /// Check the current tracking status
    Status,

    /// Generate a report for one day
    Report {
        /// Date in YYYY-MM-DD format (default: today)
        date: Option<String>,
    },

    /// Internal: run the reminder loop in the foreground
    #[command(hide = true)]
    Daemon,
}
