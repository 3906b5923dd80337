//! Identity-keyed listener list shared by the widget-side traits.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Thread-safe list of listeners with identity-based removal.
///
/// `L` is normally a trait object such as `dyn OnScrollListener<W>`.
/// Dispatch helpers for each listener kind live next to the trait.
pub struct ListenerSet<L: ?Sized> {
    entries: Mutex<Vec<Arc<L>>>,
}

impl<L: ?Sized> Default for ListenerSet<L> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(Vec::new()),
        }
    }
}

impl<L: ?Sized> ListenerSet<L> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, listener: Arc<L>) {
        self.lock().push(listener);
    }

    /// Remove `listener` by identity. Returns `false` if it wasn't registered.
    pub fn remove(&self, listener: &Arc<L>) -> bool {
        let mut entries = self.lock();
        let Some(index) = entries
            .iter()
            .position(|entry| std::ptr::addr_eq(Arc::as_ptr(entry), Arc::as_ptr(listener)))
        else {
            return false;
        };
        entries.remove(index);
        true
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Copy of the current entries in registration order.
    ///
    /// Listeners may add or remove entries while being notified, so
    /// dispatch iterates a snapshot and never holds the lock across a
    /// callback.
    pub fn snapshot(&self) -> Vec<Arc<L>> {
        self.lock().clone()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Arc<L>>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<L: ?Sized> fmt::Debug for ListenerSet<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerSet")
            .field("len", &self.len())
            .finish()
    }
}
