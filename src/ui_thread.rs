//! The designated UI thread and its deferred task queue.
//!
//! Widgets must only be touched from the thread that owns them. A
//! [`UiThread`] captures that thread's identity so bindings can check the
//! calling context before registering listeners, and gives other threads
//! a way to hand work back to the UI loop.
//!
//! ```ignore
//! // On the UI thread, during startup:
//! let ui = UiThread::current();
//!
//! // Each frame, after dispatching input:
//! ui.run_pending();
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, LazyLock, Mutex, PoisonError};
use std::thread::{self, ThreadId};

use crate::error::{Result, WrongContextError};
use crate::observer::Observer;

type Task = Box<dyn FnOnce() + Send>;

/// Tasks posted for one UI thread, run in FIFO order by `run_pending`.
#[derive(Default)]
struct TaskQueue {
    tasks: Mutex<Vec<Task>>,
}

/// One queue per UI thread, shared by every `UiThread` handle for it.
/// Entries are never removed, so work posted after a handle is dropped
/// still reaches the next handle that drains that thread.
static TASK_QUEUES: LazyLock<Mutex<HashMap<ThreadId, Arc<TaskQueue>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

fn queue_for(id: ThreadId) -> Arc<TaskQueue> {
    TASK_QUEUES
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .entry(id)
        .or_default()
        .clone()
}

/// Handle to the designated UI-owning thread.
///
/// Cheap to clone. Every handle for the same thread, including ones from
/// separate [`UiThread::current`] calls, shares one task queue.
#[derive(Clone)]
pub struct UiThread {
    id: ThreadId,
    queue: Arc<TaskQueue>,
}

impl UiThread {
    /// Designate the calling thread as the UI thread.
    pub fn current() -> Self {
        let id = thread::current().id();
        Self {
            id,
            queue: queue_for(id),
        }
    }

    pub fn id(&self) -> ThreadId {
        self.id
    }

    /// Returns `true` when called on the designated UI thread.
    pub fn is_current(&self) -> bool {
        thread::current().id() == self.id
    }

    /// Fail with [`WrongContextError`] unless called on the UI thread.
    pub fn check(&self) -> Result<()> {
        if self.is_current() {
            Ok(())
        } else {
            Err(WrongContextError::on_current_thread(self.id))
        }
    }

    /// Queue a task to run on the UI thread during the next
    /// [`run_pending`](Self::run_pending). Safe to call from any thread.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) {
        self.lock_tasks().push(Box::new(task));
    }

    /// Run every queued task and return how many ran.
    ///
    /// Off the UI thread this does nothing and returns 0. Tasks posted
    /// while draining are picked up by the next call.
    pub fn run_pending(&self) -> usize {
        if !self.is_current() {
            return 0;
        }

        let tasks = std::mem::take(&mut *self.lock_tasks());
        let count = tasks.len();
        for task in tasks {
            task();
        }

        if count > 0 {
            log::trace!("Ran {} pending UI task(s)", count);
        }
        count
    }

    pub fn has_pending(&self) -> bool {
        !self.lock_tasks().is_empty()
    }

    fn lock_tasks(&self) -> std::sync::MutexGuard<'_, Vec<Task>> {
        self.queue
            .tasks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for UiThread {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UiThread")
            .field("id", &self.id)
            .field("has_pending", &self.has_pending())
            .finish()
    }
}

/// Verify the calling thread, reporting a violation to `observer`.
///
/// Returns `true` if the caller may proceed. On the wrong thread the
/// observer receives a single [`WrongContextError`] and `false` is
/// returned; nothing panics.
pub fn check_ui_thread<T>(ui: &UiThread, observer: &dyn Observer<T>) -> bool {
    match ui.check() {
        Ok(()) => true,
        Err(err) => {
            observer.on_error(err);
            false
        }
    }
}
