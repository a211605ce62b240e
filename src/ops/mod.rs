//! Operations layer
//!
//! The functions in [`entities`], [`analytics`] and [`simulate`] work on a
//! borrowed [`Store`](crate::domain::Store) and never do I/O. [`Tracker`]
//! wraps them with a commit at the end of every mutation.

pub mod analytics;
pub mod entities;
pub mod simulate;
mod tracker;

pub use analytics::{productivity_report, user_task_summary, UserTaskCount};
pub use entities::{add_task, complete_task, create_user};
pub use simulate::simulate_activity;
pub use tracker::Tracker;
