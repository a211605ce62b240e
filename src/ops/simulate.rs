//! Randomized activity generator
//!
//! Builds a batch of tasks against existing users. The caller supplies the
//! RNG, so a seeded [`StdRng`](rand::rngs::StdRng) reproduces a batch.

use rand::seq::IndexedRandom;
use rand::Rng;

use crate::domain::{Clock, Priority, Store, Task, TaskId, UserId};
use crate::error::{Result, TrackerError};

/// Inserts `count` random tasks and returns their ids in creation order
///
/// Each task gets a uniformly chosen owner and priority, a title of the form
/// `Auto Task NNN`, and a coin flip decides whether it is completed on the
/// spot. Fails without touching the store if there are no users.
pub fn simulate_activity<R: Rng + ?Sized>(
    store: &mut Store,
    clock: &dyn Clock,
    rng: &mut R,
    count: usize,
) -> Result<Vec<TaskId>> {
    let user_ids: Vec<UserId> = store.users.keys().cloned().collect();
    if user_ids.is_empty() {
        return Err(TrackerError::Precondition(
            "Create users first: simulation needs at least one user".to_string(),
        ));
    }

    let mut created = Vec::new();
    for _ in 0..count {
        let Some(user_id) = user_ids.choose(rng).cloned() else {
            break;
        };
        let priority = Priority::LEVELS.choose(rng).cloned().unwrap_or_default();
        let title = format!("Auto Task {}", rng.random_range(100..=999));

        let mut task = Task::new(store.fresh_task_id(), user_id, title, priority, clock.now());
        if rng.random_bool(0.5) {
            task.complete(clock.now());
        }

        created.push(task.id.clone());
        store.insert_task(task);
    }

    Ok(created)
}
