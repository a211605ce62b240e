//! Entity lifecycle operations
//!
//! Each function validates its input, then mutates the [`Store`]. Nothing
//! here touches disk; on error the store is left exactly as it was.

use crate::domain::{Clock, Priority, Store, Task, User};
use crate::error::{Result, TrackerError};

fn require_non_empty<'a>(field: &str, value: &'a str) -> Result<&'a str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TrackerError::Validation(format!("{} must not be empty", field)));
    }
    Ok(trimmed)
}

/// Creates a user with a fresh id
pub fn create_user(store: &mut Store, clock: &dyn Clock, name: &str, email: &str) -> Result<User> {
    let name = require_non_empty("name", name)?;
    let email = require_non_empty("email", email)?;

    let user = User::new(store.fresh_user_id(), name, email, clock.now());
    store.insert_user(user.clone());
    Ok(user)
}

/// Creates a pending task for an existing user
///
/// `priority` is lowercased; values other than low/medium/high are kept.
pub fn add_task(
    store: &mut Store,
    clock: &dyn Clock,
    user_id: &str,
    title: &str,
    priority: &str,
) -> Result<Task> {
    let user_id = match store.user(user_id.trim()) {
        Some(user) => user.id.clone(),
        None => return Err(TrackerError::user_not_found(user_id.trim())),
    };
    let title = require_non_empty("title", title)?;

    let task = Task::new(
        store.fresh_task_id(),
        user_id,
        title,
        Priority::parse_lenient(priority),
        clock.now(),
    );
    store.insert_task(task.clone());
    Ok(task)
}

/// Marks a task completed, re-stamping `completed_at` if it already was
pub fn complete_task(store: &mut Store, clock: &dyn Clock, task_id: &str) -> Result<Task> {
    let task_id = task_id.trim();
    let task = store
        .task_mut(task_id)
        .ok_or_else(|| TrackerError::task_not_found(task_id))?;

    task.complete(clock.now());
    Ok(task.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FixedClock, TaskStatus};

    fn clock() -> FixedClock {
        FixedClock::at("2024-06-01 12:00:00").unwrap()
    }

    #[test]
    fn create_user_adds_exactly_one_entry() {
        let mut store = Store::new();
        let clock = clock();

        let first = create_user(&mut store, &clock, "Alice", "a@x.com").unwrap();
        let second = create_user(&mut store, &clock, "Alice", "a@x.com").unwrap();

        // Duplicate names and emails are allowed
        assert_ne!(first.id, second.id);
        assert_eq!(store.users.len(), 2);
        assert_eq!(first.created_at.to_string(), "2024-06-01 12:00:00");
        assert_eq!(store.user(first.id.as_str()), Some(&first));
    }

    #[test]
    fn create_user_rejects_empty_fields() {
        let mut store = Store::new();
        let clock = clock();

        let err = create_user(&mut store, &clock, "  ", "a@x.com").unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));

        let err = create_user(&mut store, &clock, "Alice", "").unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));

        assert!(store.users.is_empty());
    }

    #[test]
    fn create_user_trims_input() {
        let mut store = Store::new();
        let user = create_user(&mut store, &clock(), "  Bob ", " b@x.com").unwrap();

        assert_eq!(user.name, "Bob");
        assert_eq!(user.email, "b@x.com");
    }

    #[test]
    fn add_task_starts_pending() {
        let mut store = Store::new();
        let clock = clock();
        let user = create_user(&mut store, &clock, "Alice", "a@x.com").unwrap();

        let task = add_task(&mut store, &clock, user.id.as_str(), "Write report", "HIGH").unwrap();

        assert_eq!(task.status, TaskStatus::Pending);
        assert!(task.completed_at.is_none());
        assert_eq!(task.priority, Priority::High);
        assert_eq!(task.user_id, user.id);
        assert_eq!(store.tasks.len(), 1);
    }

    #[test]
    fn add_task_keeps_unknown_priority() {
        let mut store = Store::new();
        let clock = clock();
        let user = create_user(&mut store, &clock, "Alice", "a@x.com").unwrap();

        let task = add_task(&mut store, &clock, user.id.as_str(), "Someday", "Whenever").unwrap();
        assert_eq!(task.priority.as_str(), "whenever");
    }

    #[test]
    fn add_task_for_unknown_user_changes_nothing() {
        let mut store = Store::new();
        let clock = clock();
        create_user(&mut store, &clock, "Alice", "a@x.com").unwrap();
        let before = store.clone();

        let err = add_task(&mut store, &clock, "nope0000", "Orphan", "low").unwrap_err();

        assert!(matches!(err, TrackerError::NotFound(crate::error::EntityKind::User, _)));
        assert_eq!(store, before);
    }

    #[test]
    fn add_task_rejects_empty_title() {
        let mut store = Store::new();
        let clock = clock();
        let user = create_user(&mut store, &clock, "Alice", "a@x.com").unwrap();

        let err = add_task(&mut store, &clock, user.id.as_str(), "", "low").unwrap_err();
        assert!(matches!(err, TrackerError::Validation(_)));
        assert!(store.tasks.is_empty());
    }

    #[test]
    fn complete_task_transitions_and_restamps() {
        let mut store = Store::new();
        let clock = clock();
        let user = create_user(&mut store, &clock, "Alice", "a@x.com").unwrap();
        let task = add_task(&mut store, &clock, user.id.as_str(), "Write report", "high").unwrap();

        clock.advance(60);
        let done = complete_task(&mut store, &clock, task.id.as_str()).unwrap();
        assert_eq!(done.status, TaskStatus::Completed);
        assert_eq!(done.completed_at.unwrap().to_string(), "2024-06-01 12:01:00");

        clock.advance(60);
        let again = complete_task(&mut store, &clock, task.id.as_str()).unwrap();
        assert_eq!(again.status, TaskStatus::Completed);
        assert_eq!(again.completed_at.unwrap().to_string(), "2024-06-01 12:02:00");
        assert_ne!(done.completed_at, again.completed_at);

        // created_at is untouched by completion
        assert_eq!(again.created_at, task.created_at);
        assert_eq!(store.task(task.id.as_str()), Some(&again));
    }

    #[test]
    fn complete_unknown_task_is_not_found() {
        let mut store = Store::new();
        let err = complete_task(&mut store, &clock(), "deadbeef").unwrap_err();

        assert!(matches!(err, TrackerError::NotFound(crate::error::EntityKind::Task, _)));
    }
}
