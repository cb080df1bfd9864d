//! CLI argument definitions using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::cli::commands::{
    cage::CageCommands, completions::CompletionsArgs, config::ConfigCommands,
    customer::CustomerCommands, job::JobCommands, part::PartCommands, project::ProjectCommands,
    status::StatusArgs, team::TeamCommands, validate::ValidateArgs,
};

#[derive(Parser)]
#[command(name = "wsm")]
#[command(author, version, about = "Workshop manager for classic-car restoration")]
#[command(long_about = "Read-only views over the projects, job tasks, parts, storage cages, customers and staff of a restoration workshop.")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOpts,
}

#[derive(clap::Args, Clone, Debug)]
pub struct GlobalOpts {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "auto")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Wrap text in table columns at this width instead of truncating
    #[arg(long, short = 'w', global = true)]
    pub wrap: Option<usize>,

    /// Fixture directory (default: config, then the built-in set)
    #[arg(long, global = true, env = "WSM_FIXTURES")]
    pub fixtures: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project board and project detail
    #[command(subcommand)]
    Project(ProjectCommands),

    /// Job tasks across every project
    #[command(subcommand)]
    Job(JobCommands),

    /// Parts procurement across every project
    #[command(subcommand)]
    Part(PartCommands),

    /// Storage cages and cage labels
    #[command(subcommand)]
    Cage(CageCommands),

    /// Customer records
    #[command(subcommand)]
    Customer(CustomerCommands),

    /// Staff roster
    #[command(subcommand)]
    Team(TeamCommands),

    /// Show the workshop dashboard
    Status(StatusArgs),

    /// Check fixture consistency
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Automatically detect based on context (text for show, tsv for list)
    #[default]
    Auto,
    /// YAML format (full fidelity)
    Yaml,
    /// Tab-separated values (for piping)
    Tsv,
    /// JSON format (for programming)
    Json,
    /// CSV format (for spreadsheets)
    Csv,
    /// Markdown tables
    Md,
    /// Just IDs, one per line
    Id,
}
