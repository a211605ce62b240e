//! Error taxonomy shared by the store and the operations layer

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which kind of entity a lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Task,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::User => f.write_str("User"),
            EntityKind::Task => f.write_str("Task"),
        }
    }
}

#[derive(Debug, Error)]
pub enum TrackerError {
    /// The data file exists but is not a valid document. Fatal at startup.
    #[error("Failed to parse data file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0} not found: {1}")]
    NotFound(EntityKind, String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("{0}")]
    Precondition(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize data: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl TrackerError {
    pub fn user_not_found(id: impl Into<String>) -> Self {
        TrackerError::NotFound(EntityKind::User, id.into())
    }

    pub fn task_not_found(id: impl Into<String>) -> Self {
        TrackerError::NotFound(EntityKind::Task, id.into())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TrackerError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrackerError>;
