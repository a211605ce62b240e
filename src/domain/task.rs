//! Task domain model
//!
//! Tasks belong to a user, start out pending and move to completed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::clock::Timestamp;
use super::id::{TaskId, UserId};

/// Status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::Completed => "completed",
        }
    }

    /// Returns true if this status represents completion
    pub fn is_complete(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(TaskStatus::Pending),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(format!(
                "Invalid status '{}': expected 'pending' or 'completed'",
                other
            )),
        }
    }
}

/// Task priority
///
/// Any string is accepted. Operator input goes through
/// [`Priority::parse_lenient`], which trims and lowercases it. Values read
/// back from a document are matched exactly, so anything outside the three
/// known levels is kept as written in [`Priority::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(from = "String", into = "String")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Other(String),
}

impl Priority {
    /// The levels the simulator draws from
    pub const LEVELS: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Normalizes free-form input into a priority
    pub fn parse_lenient(input: &str) -> Self {
        let normalized = input.trim().to_lowercase();
        match normalized.as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Other(normalized),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Other(s) => s,
        }
    }

    /// Returns true for `low`, `medium` and `high`
    pub fn is_known(&self) -> bool {
        !matches!(self, Priority::Other(_))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl From<String> for Priority {
    fn from(value: String) -> Self {
        match value.as_str() {
            "low" => Priority::Low,
            "medium" => Priority::Medium,
            "high" => Priority::High,
            _ => Priority::Other(value),
        }
    }
}

impl From<Priority> for String {
    fn from(priority: Priority) -> Self {
        match priority {
            Priority::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

/// A unit of work owned by a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,

    /// Owning user; checked at creation only
    pub user_id: UserId,

    pub title: String,

    pub priority: Priority,

    pub status: TaskStatus,

    pub created_at: Timestamp,

    /// When the task was last completed; always written, `null` while pending
    pub completed_at: Option<Timestamp>,
}

impl Task {
    /// Creates a pending task
    pub fn new(
        id: TaskId,
        user_id: UserId,
        title: impl Into<String>,
        priority: Priority,
        created_at: Timestamp,
    ) -> Self {
        Self {
            id,
            user_id,
            title: title.into(),
            priority,
            status: TaskStatus::Pending,
            created_at,
            completed_at: None,
        }
    }

    /// Transitions to completed status
    ///
    /// Completing an already-completed task re-stamps `completed_at`.
    pub fn complete(&mut self, at: Timestamp) {
        self.status = TaskStatus::Completed;
        self.completed_at = Some(at);
    }

    pub fn is_complete(&self) -> bool {
        self.status.is_complete()
    }
}
