//! Domain models for tally
//!
//! Contains the entity model and the in-memory store without any I/O concerns.

mod clock;
mod id;
mod store;
mod task;
mod user;

pub use clock::{Clock, FixedClock, SystemClock, Timestamp, TIMESTAMP_FORMAT};
pub use id::{generate_id, TaskId, UserId, ID_LEN};
pub use store::Store;
pub use task::{Priority, Task, TaskStatus};
pub use user::User;
