//! Main CLI application structure

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use super::output::{Output, OutputFormat};
use super::{report, task, user};
use crate::ops::Tracker;
use crate::storage::Config;

#[derive(Parser)]
#[command(name = "tally")]
#[command(author, version, about = "Single-user task tracking with a flat JSON store")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Enable verbose output for debugging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Path to the JSON data file
    #[arg(long, global = true, env = "TALLY_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage users
    #[command(subcommand)]
    User(user::UserCommands),

    /// Manage tasks
    #[command(subcommand)]
    Task(task::TaskCommands),

    /// Show task counts per status
    Report,

    /// Show task counts per user
    Summary,

    /// Generate random tasks for existing users
    Simulate {
        /// Number of tasks to generate (defaults to config, then 20)
        count: Option<usize>,

        /// Seed for a reproducible batch
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Delete all users and tasks
    Reset,
}

/// Main entry point for the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let output = Output::new(cli.format, cli.verbose);

    output.verbose("tally starting");

    let config = Config::load(cli.data_file).context("Failed to load configuration")?;
    output.verbose_ctx("config", &format!("Data file: {}", config.data_file.display()));

    let mut tracker = Tracker::open(config.data_file.clone())?;
    output.verbose_ctx(
        "db",
        &format!(
            "Loaded {} users, {} tasks",
            tracker.store().users.len(),
            tracker.store().tasks.len()
        ),
    );

    match cli.command {
        Commands::User(cmd) => user::run(cmd, &mut tracker, &output)?,
        Commands::Task(cmd) => {
            let default_priority = config.default_priority.to_string();
            task::run(cmd, &mut tracker, &output, &default_priority)?
        }
        Commands::Report => report::report(&tracker, &output)?,
        Commands::Summary => report::summary(&tracker, &output)?,
        Commands::Simulate { count, seed } => {
            let count = count.unwrap_or(config.simulate_count);
            output.verbose_ctx("simulate", &format!("Generating {} tasks", count));
            report::simulate(&mut tracker, &output, count, seed)?
        }
        Commands::Reset => report::reset(&mut tracker, &output)?,
    }

    output.verbose("Command completed successfully");
    Ok(())
}
