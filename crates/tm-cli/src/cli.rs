//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Tidemark - reversible schema migrations for DuckDB, checked against models
#[derive(Parser, Debug)]
#[command(name = "tm")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override the database path from tidemark.yml (":memory:" allowed)
    #[arg(short, long, global = true, env = "TIDEMARK_DATABASE")]
    pub database: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Apply migrations up to a target revision
    Upgrade(MigrateArgs),

    /// Revert migrations down to a target revision
    Downgrade(MigrateArgs),

    /// Print the revision recorded in the database
    Current,

    /// List every migration in apply order
    History(HistoryArgs),

    /// Print the database schema snapshot
    Snapshot(SnapshotArgs),

    /// Compare the model schema with the migrated schema at head
    Check,
}

/// Arguments for the upgrade and downgrade commands
#[derive(Args, Debug)]
pub struct MigrateArgs {
    /// Revision id or unique prefix, `head`, `base`, or a relative count
    /// such as `+1` or `-2`
    #[arg(allow_hyphen_values = true)]
    pub target: String,
}

/// Arguments for the history command
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Arguments for the snapshot command
#[derive(Args, Debug)]
pub struct SnapshotArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    /// Leave the bookkeeping table out of the snapshot
    #[arg(long)]
    pub exclude_version_table: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
