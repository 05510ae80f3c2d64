//! Deferred-task scheduling.
//!
//! Panel transitions and input feedback happen after fixed delays. Instead of
//! fire-and-forget timers, each delayed effect is queued here with a due
//! time taken from the injected [`Clock`]. The owner polls with
//! [`Scheduler::pop_due`] and every entry can be cancelled by its [`TaskId`].

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use crate::clock::Clock;

/// Handle for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TaskId(u64);

/// A task together with the time it becomes due.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledTask<T> {
    /// Handle returned when the task was scheduled.
    pub id: TaskId,
    /// Earliest time the task may fire.
    pub due_at: DateTime<Utc>,
    /// The deferred work.
    pub task: T,
}

/// Queue of deferred tasks ordered by due time.
#[derive(Debug)]
pub struct Scheduler<T> {
    next_id: u64,
    pending: Vec<ScheduledTask<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            next_id: 1,
            pending: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    /// Creates an empty scheduler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `task` to become due at `due_at`.
    pub fn schedule(&mut self, due_at: DateTime<Utc>, task: T) -> TaskId {
        let id = TaskId(self.next_id);
        self.next_id += 1;
        self.pending.push(ScheduledTask { id, due_at, task });
        id
    }

    /// Queues `task` to become due `delay` after the clock's current time.
    pub fn schedule_after(&mut self, clock: &dyn Clock, delay: Duration, task: T) -> TaskId {
        self.schedule(clock.now() + delay, task)
    }

    /// Removes a pending task. Returns `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        let before = self.pending.len();
        self.pending.retain(|t| t.id != id);
        self.pending.len() != before
    }

    /// Removes every pending task and returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.pending.len();
        self.pending.clear();
        dropped
    }

    /// Removes and returns the earliest task due at or before `now`. Tasks
    /// with equal due times come out in scheduling order.
    pub fn pop_due(&mut self, now: DateTime<Utc>) -> Option<ScheduledTask<T>> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, t)| t.due_at <= now)
            .min_by_key(|(_, t)| (t.due_at, t.id.0))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(index))
    }

    /// Earliest due time among pending tasks.
    #[must_use]
    pub fn next_due(&self) -> Option<DateTime<Utc>> {
        self.pending.iter().map(|t| t.due_at).min()
    }

    /// Iterates over pending tasks in no particular order.
    pub fn pending(&self) -> impl Iterator<Item = &ScheduledTask<T>> {
        self.pending.iter()
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
