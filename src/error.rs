use std::thread::{self, ThreadId};

use thiserror::Error;

/// A subscription or UI call was made off the designated UI thread.
///
/// Delivered through [`Observer::on_error`](crate::Observer::on_error)
/// rather than raised as a panic.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected to be called on the UI thread but was {thread_name}")]
pub struct WrongContextError {
    expected: ThreadId,
    actual: ThreadId,
    thread_name: String,
}

impl WrongContextError {
    /// Build an error describing the calling thread.
    pub(crate) fn on_current_thread(expected: ThreadId) -> Self {
        let current = thread::current();
        Self {
            expected,
            actual: current.id(),
            thread_name: current.name().unwrap_or("<unnamed>").to_string(),
        }
    }

    /// The designated UI thread.
    pub fn expected(&self) -> ThreadId {
        self.expected
    }

    /// The thread the call was actually made on.
    pub fn actual(&self) -> ThreadId {
        self.actual
    }

    pub fn thread_name(&self) -> &str {
        &self.thread_name
    }
}

pub type Result<T> = std::result::Result<T, WrongContextError>;
