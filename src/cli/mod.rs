//! # Command-Line Interface
//!
//! User-facing CLI commands and output formatting.
//!
//! ## Command Groups
//!
//! | Group | Purpose | Examples |
//! |-------|---------|----------|
//! | User | People tasks belong to | `user add`, `user list` |
//! | Task | Work item lifecycle | `task add`, `task done`, `task list` |
//! | Analytics | Aggregate counts | `report`, `summary` |
//! | Bulk | Whole-store actions | `simulate`, `reset` |
//!
//! ## Output Formats
//!
//! All commands support `--format` flag:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! ## Verbose Mode
//!
//! Use `--verbose` (or `-v`) for debug output:
//! ```bash
//! tally --verbose report
//! ```
//!
//! ## Entry Point
//!
//! Call [`run()`] to parse arguments and execute the appropriate command.

mod app;
mod output;
mod report;
mod task;
mod user;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
