//! User CLI commands

use anyhow::Result;
use clap::Subcommand;

use super::output::Output;
use crate::ops::Tracker;

#[derive(Subcommand)]
pub enum UserCommands {
    /// Create a user
    Add {
        /// Display name
        name: String,

        /// Email address
        email: String,
    },

    /// List all users
    List,
}

pub fn run(cmd: UserCommands, tracker: &mut Tracker, output: &Output) -> Result<()> {
    match cmd {
        UserCommands::Add { name, email } => add_user(tracker, output, &name, &email),
        UserCommands::List => list_users(tracker, output),
    }
}

fn add_user(tracker: &mut Tracker, output: &Output, name: &str, email: &str) -> Result<()> {
    let user = tracker.create_user(name, email)?;
    output.verbose_ctx("user", &format!("Committed {}", tracker.database().path().display()));

    if output.is_json() {
        output.data(&user);
    } else {
        output.success(&format!("Created user: {} - {}", user.id, user.name));
    }

    Ok(())
}

fn list_users(tracker: &Tracker, output: &Output) -> Result<()> {
    let users = tracker.users();

    if output.is_json() {
        output.data(&users);
    } else if users.is_empty() {
        println!("No users");
    } else {
        println!("{:<10} {:<20} {:<28} CREATED", "ID", "NAME", "EMAIL");
        println!("{}", "-".repeat(80));

        for user in users {
            println!(
                "{:<10} {:<20} {:<28} {}",
                user.id, user.name, user.email, user.created_at
            );
        }
    }

    Ok(())
}
