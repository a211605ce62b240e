//! Task CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::domain::{Task, TaskStatus};
use crate::ops::Tracker;

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a task for a user
    ///
    /// Examples:
    ///   tally task add 3f9a1c0e "Write report"
    ///   tally task add 3f9a1c0e "Write report" --priority high
    Add {
        /// Owning user ID
        user_id: String,

        /// Task title
        title: String,

        /// Priority (low / medium / high); other values are kept as given
        #[arg(long, short)]
        priority: Option<String>,
    },

    /// Mark a task as completed
    Done {
        /// Task ID
        id: String,
    },

    /// List tasks
    List {
        /// Only tasks owned by this user
        #[arg(long)]
        user: Option<String>,

        /// Only tasks with this status (pending / completed)
        #[arg(long)]
        status: Option<TaskStatus>,
    },

    /// Show task details
    Show {
        /// Task ID
        id: String,
    },
}

pub fn run(
    cmd: TaskCommands,
    tracker: &mut Tracker,
    output: &Output,
    default_priority: &str,
) -> Result<()> {
    match cmd {
        TaskCommands::Add {
            user_id,
            title,
            priority,
        } => {
            let priority = priority.as_deref().unwrap_or(default_priority);
            add_task(tracker, output, &user_id, &title, priority)
        }
        TaskCommands::Done { id } => complete_task(tracker, output, &id),
        TaskCommands::List { user, status } => list_tasks(tracker, output, user.as_deref(), status),
        TaskCommands::Show { id } => show_task(tracker, output, &id),
    }
}

fn add_task(
    tracker: &mut Tracker,
    output: &Output,
    user_id: &str,
    title: &str,
    priority: &str,
) -> Result<()> {
    let task = tracker.add_task(user_id, title, priority)?;

    if !task.priority.is_known() {
        output.verbose_ctx("task", &format!("Keeping non-standard priority '{}'", task.priority));
    }

    if output.is_json() {
        output.data(&task);
    } else {
        output.success(&format!("Added task: {} - {}", task.id, task.title));
    }

    Ok(())
}

fn complete_task(tracker: &mut Tracker, output: &Output, id: &str) -> Result<()> {
    let was_complete = tracker.task(id).map(Task::is_complete).unwrap_or(false);
    let task = tracker.complete_task(id)?;

    if was_complete {
        output.verbose_ctx("task", &format!("{} was already completed; re-stamped", task.id));
    }

    if output.is_json() {
        output.data(&task);
    } else {
        output.success(&format!("Completed task: {}", task.id));
    }

    Ok(())
}

fn list_tasks(
    tracker: &Tracker,
    output: &Output,
    user: Option<&str>,
    status: Option<TaskStatus>,
) -> Result<()> {
    let tasks = tracker.tasks(user, status);

    if output.is_json() {
        output.data(&tasks);
    } else if tasks.is_empty() {
        println!("No tasks");
    } else {
        println!(
            "{:<10} {:<10} {:<8} {:<10} TITLE",
            "ID", "STATUS", "PRIORITY", "USER"
        );
        println!("{}", "-".repeat(70));

        for task in tasks {
            println!(
                "{:<10} {:<10} {:<8} {:<10} {}",
                task.id, task.status, task.priority, task.user_id, task.title
            );
        }
    }

    Ok(())
}

fn show_task(tracker: &Tracker, output: &Output, id: &str) -> Result<()> {
    let task = tracker.task(id)?;

    if output.is_json() {
        output.data(task);
        return Ok(());
    }

    println!("Task: {}", task.id);
    println!("Title: {}", task.title);
    println!("Status: {}", task.status);
    println!("Priority: {}", task.priority);
    match tracker.store().user(task.user_id.as_str()) {
        Some(user) => println!("User: {} ({})", user.name, user.id),
        None => println!("User: {} (unknown)", task.user_id),
    }
    println!("Created: {}", task.created_at);
    if let Some(completed) = task.completed_at {
        println!("Completed: {}", completed);
    }

    Ok(())
}
