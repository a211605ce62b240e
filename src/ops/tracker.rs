//! The tracker: a [`Database`] plus a clock
//!
//! Every mutating method runs the matching operation against the in-memory
//! store and then commits once. Failed operations never commit.

use std::collections::BTreeMap;
use std::path::PathBuf;

use rand::Rng;

use super::analytics::{self, UserTaskCount};
use super::{entities, simulate};
use crate::domain::{Clock, Store, SystemClock, Task, TaskId, TaskStatus, User};
use crate::error::{Result, TrackerError};
use crate::storage::Database;

pub struct Tracker<C = SystemClock> {
    db: Database,
    clock: C,
}

impl Tracker<SystemClock> {
    /// Opens the data file at `path` using the system clock
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::new(Database::open(path)?, SystemClock))
    }
}

impl<C: Clock> Tracker<C> {
    pub fn new(db: Database, clock: C) -> Self {
        Self { db, clock }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    pub fn store(&self) -> &Store {
        self.db.store()
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn create_user(&mut self, name: &str, email: &str) -> Result<User> {
        let user = entities::create_user(self.db.store_mut(), &self.clock, name, email)?;
        self.db.commit()?;
        Ok(user)
    }

    pub fn add_task(&mut self, user_id: &str, title: &str, priority: &str) -> Result<Task> {
        let task = entities::add_task(self.db.store_mut(), &self.clock, user_id, title, priority)?;
        self.db.commit()?;
        Ok(task)
    }

    pub fn complete_task(&mut self, task_id: &str) -> Result<Task> {
        let task = entities::complete_task(self.db.store_mut(), &self.clock, task_id)?;
        self.db.commit()?;
        Ok(task)
    }

    /// Generates `count` random tasks and commits the batch once
    pub fn simulate_activity<R: Rng + ?Sized>(
        &mut self,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<TaskId>> {
        let created = simulate::simulate_activity(self.db.store_mut(), &self.clock, rng, count)?;
        self.db.commit()?;
        Ok(created)
    }

    /// Wipes all users and tasks
    pub fn reset(&mut self) -> Result<()> {
        self.db.reset()
    }

    pub fn productivity_report(&self) -> BTreeMap<TaskStatus, usize> {
        analytics::productivity_report(self.store())
    }

    pub fn user_task_summary(&self) -> Vec<UserTaskCount> {
        analytics::user_task_summary(self.store())
    }

    pub fn user(&self, id: &str) -> Result<&User> {
        self.store()
            .user(id.trim())
            .ok_or_else(|| TrackerError::user_not_found(id.trim()))
    }

    pub fn task(&self, id: &str) -> Result<&Task> {
        self.store()
            .task(id.trim())
            .ok_or_else(|| TrackerError::task_not_found(id.trim()))
    }

    /// All users, oldest first
    pub fn users(&self) -> Vec<&User> {
        let mut users: Vec<&User> = self.store().users.values().collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        users
    }

    /// Tasks matching the optional owner and status filters, oldest first
    pub fn tasks(&self, user_id: Option<&str>, status: Option<TaskStatus>) -> Vec<&Task> {
        let mut tasks: Vec<&Task> = self
            .store()
            .tasks
            .values()
            .filter(|t| user_id.map_or(true, |u| t.user_id.as_str() == u))
            .filter(|t| status.map_or(true, |s| t.status == s))
            .collect();
        tasks.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        tasks
    }
}
