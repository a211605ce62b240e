//! Aggregate views over the store

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::domain::{Store, TaskStatus, UserId};

/// Number of tasks owned by one user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserTaskCount {
    pub user_id: UserId,
    pub name: String,
    pub count: usize,
}

/// Counts tasks by status
///
/// Only statuses that occur appear in the result; an empty store yields an
/// empty map.
pub fn productivity_report(store: &Store) -> BTreeMap<TaskStatus, usize> {
    let mut report = BTreeMap::new();
    for task in store.tasks.values() {
        *report.entry(task.status).or_insert(0) += 1;
    }
    report
}

/// Counts tasks per user, ordered by user name then id
///
/// Tasks whose owner is not in the store are skipped.
pub fn user_task_summary(store: &Store) -> Vec<UserTaskCount> {
    let mut counts: HashMap<&UserId, usize> = HashMap::new();
    for task in store.tasks.values() {
        *counts.entry(&task.user_id).or_insert(0) += 1;
    }

    let mut summary: Vec<UserTaskCount> = counts
        .into_iter()
        .filter_map(|(user_id, count)| {
            store.user(user_id.as_str()).map(|user| UserTaskCount {
                user_id: user.id.clone(),
                name: user.name.clone(),
                count,
            })
        })
        .collect();

    summary.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.user_id.cmp(&b.user_id)));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Priority, Task, TaskId, Timestamp, User};

    fn ts() -> Timestamp {
        "2024-01-01 09:00:00".parse().unwrap()
    }

    fn add_user(store: &mut Store, id: &str, name: &str) {
        store.insert_user(User::new(UserId::from(id), name, "x@x.com", ts()));
    }

    fn add_task(store: &mut Store, id: &str, user: &str, completed: bool) {
        let mut task = Task::new(TaskId::from(id), UserId::from(user), "t", Priority::Low, ts());
        if completed {
            task.complete(ts());
        }
        store.insert_task(task);
    }

    #[test]
    fn report_on_empty_store_is_empty() {
        assert!(productivity_report(&Store::new()).is_empty());
    }

    #[test]
    fn report_counts_by_status() {
        let mut store = Store::new();
        add_user(&mut store, "u1", "Alice");
        for i in 0..5 {
            add_task(&mut store, &format!("t{}", i), "u1", i >= 3);
        }

        let report = productivity_report(&store);
        assert_eq!(report.get(&TaskStatus::Pending), Some(&3));
        assert_eq!(report.get(&TaskStatus::Completed), Some(&2));
        assert_eq!(report.len(), 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json, serde_json::json!({ "pending": 3, "completed": 2 }));
    }

    #[test]
    fn report_omits_absent_statuses() {
        let mut store = Store::new();
        add_user(&mut store, "u1", "Alice");
        add_task(&mut store, "t1", "u1", true);

        let report = productivity_report(&store);
        assert_eq!(report.len(), 1);
        assert!(!report.contains_key(&TaskStatus::Pending));
    }

    #[test]
    fn summary_groups_by_user_and_sorts_by_name() {
        let mut store = Store::new();
        add_user(&mut store, "u1", "Carol");
        add_user(&mut store, "u2", "Alice");
        add_user(&mut store, "u3", "Bob");
        add_task(&mut store, "t1", "u1", false);
        add_task(&mut store, "t2", "u2", false);
        add_task(&mut store, "t3", "u1", true);

        let summary = user_task_summary(&store);
        let pairs: Vec<_> = summary.iter().map(|s| (s.name.as_str(), s.count)).collect();

        // Bob has no tasks and does not appear
        assert_eq!(pairs, vec![("Alice", 1), ("Carol", 2)]);
    }

    #[test]
    fn summary_keeps_same_named_users_apart() {
        let mut store = Store::new();
        add_user(&mut store, "u2", "Sam");
        add_user(&mut store, "u1", "Sam");
        add_task(&mut store, "t1", "u1", false);
        add_task(&mut store, "t2", "u2", false);
        add_task(&mut store, "t3", "u2", false);

        let summary = user_task_summary(&store);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].user_id.as_str(), "u1");
        assert_eq!(summary[1].count, 2);
    }

    #[test]
    fn summary_skips_orphaned_tasks() {
        let mut store = Store::new();
        add_user(&mut store, "u1", "Alice");
        add_task(&mut store, "t1", "u1", false);
        add_task(&mut store, "t2", "ghost", false);

        let summary = user_task_summary(&store);
        assert_eq!(summary.len(), 1);
        assert_eq!(summary[0].name, "Alice");
        assert_eq!(summary[0].count, 1);
    }
}
