//! In-memory aggregate of all users and tasks
//!
//! The [`Store`] is exactly the persisted document: two maps keyed by id.
//! It has no I/O; see [`Database`](crate::storage::Database) for that.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::id::{TaskId, UserId};
use super::task::Task;
use super::user::User;

/// All users and tasks
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    pub users: BTreeMap<UserId, User>,
    pub tasks: BTreeMap<TaskId, Task>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.tasks.is_empty()
    }

    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.get(id)
    }

    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn task_mut(&mut self, id: &str) -> Option<&mut Task> {
        self.tasks.get_mut(id)
    }

    pub fn has_user(&self, id: &str) -> bool {
        self.users.contains_key(id)
    }

    /// Allocates a user id not already present in the store
    pub fn fresh_user_id(&self) -> UserId {
        loop {
            let id = UserId::generate();
            if !self.users.contains_key(&id) {
                return id;
            }
        }
    }

    /// Allocates a task id not already present in the store
    pub fn fresh_task_id(&self) -> TaskId {
        loop {
            let id = TaskId::generate();
            if !self.tasks.contains_key(&id) {
                return id;
            }
        }
    }

    pub fn insert_user(&mut self, user: User) {
        self.users.insert(user.id.clone(), user);
    }

    pub fn insert_task(&mut self, task: Task) {
        self.tasks.insert(task.id.clone(), task);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Timestamp;

    fn ts() -> Timestamp {
        "2024-01-01 09:00:00".parse().unwrap()
    }

    #[test]
    fn empty_store_serializes_both_keys() {
        let json = serde_json::to_value(Store::new()).unwrap();
        assert_eq!(json, serde_json::json!({ "users": {}, "tasks": {} }));
    }

    #[test]
    fn document_without_tasks_key_is_rejected() {
        assert!(serde_json::from_str::<Store>(r#"{ "users": {} }"#).is_err());
    }

    #[test]
    fn fresh_ids_avoid_existing_keys() {
        let mut store = Store::new();
        for _ in 0..50 {
            let id = store.fresh_user_id();
            assert!(!store.has_user(id.as_str()));
            store.insert_user(User::new(id, "n", "e", ts()));
        }
        assert_eq!(store.users.len(), 50);
    }
}
