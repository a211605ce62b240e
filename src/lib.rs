//! tally - A single-user command-line task tracker
//!
//! Users own tasks; tasks go from pending to completed. Everything is kept
//! in one JSON document that is rewritten after each operation.

pub mod cli;
pub mod domain;
pub mod error;
pub mod ops;
pub mod storage;

pub use domain::{Priority, Store, Task, TaskId, TaskStatus, User, UserId};
pub use error::{Result, TrackerError};
pub use ops::Tracker;
pub use storage::Database;
