//! Deferred callbacks for the highlighter's reversal step.
//!
//! # Design
//! `TokioScheduler` runs tasks on a tokio runtime after a real (or paused)
//! sleep. `ManualScheduler` keeps its own virtual clock that only moves when
//! `advance` is called, so tests decide exactly when a task fires. Tasks due
//! at the same instant run in the order they were scheduled.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;

pub type Task = Box<dyn FnOnce() + Send + 'static>;

pub trait Scheduler {
    /// Run `task` once, `delay` from now. There is no cancellation.
    fn schedule(&self, delay: Duration, task: Task);
}

impl<S: Scheduler + ?Sized> Scheduler for &S {
    fn schedule(&self, delay: Duration, task: Task) {
        (**self).schedule(delay, task)
    }
}

impl<S: Scheduler + ?Sized> Scheduler for Arc<S> {
    fn schedule(&self, delay: Duration, task: Task) {
        (**self).schedule(delay, task)
    }
}

#[derive(Debug, Clone)]
pub struct TokioScheduler {
    handle: Handle,
}

impl TokioScheduler {
    pub fn new(handle: Handle) -> Self {
        Self { handle }
    }

    /// Bind to the runtime the caller is running on.
    ///
    /// Returns `None` outside a tokio runtime.
    pub fn current() -> Option<Self> {
        Handle::try_current().ok().map(Self::new)
    }
}

impl Scheduler for TokioScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            task();
        });
    }
}

struct Pending {
    due: Duration,
    seq: u64,
    task: Task,
}

#[derive(Default)]
struct ManualState {
    now: Duration,
    next_seq: u64,
    pending: Vec<Pending>,
}

/// Virtual-time scheduler. Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Arc<Mutex<ManualState>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the virtual clock.
    pub fn now(&self) -> Duration {
        self.lock().now
    }

    pub fn pending(&self) -> usize {
        self.lock().pending.len()
    }

    /// Move the clock forward by `by`, running every task that falls due.
    ///
    /// Tasks run without the scheduler lock held, so they may schedule
    /// further work; anything that falls due within the window also runs.
    pub fn advance(&self, by: Duration) {
        let target = self.lock().now + by;
        while let Some(task) = self.pop_due(target) {
            task();
        }
        self.lock().now = target;
    }

    fn pop_due(&self, target: Duration) -> Option<Task> {
        let mut state = self.lock();
        let index = state
            .pending
            .iter()
            .enumerate()
            .filter(|(_, pending)| pending.due <= target)
            .min_by_key(|(_, pending)| (pending.due, pending.seq))
            .map(|(index, _)| index)?;
        let pending = state.pending.swap_remove(index);
        state.now = pending.due;
        Some(pending.task)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, ManualState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Scheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Task) {
        let mut state = self.lock();
        let due = state.now + delay;
        let seq = state.next_seq;
        state.next_seq += 1;
        state.pending.push(Pending { due, seq, task });
    }
}
