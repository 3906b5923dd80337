//! Shared subscribe path for widget listener bindings.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::observer::Observer;
use crate::subscription::Subscription;
use crate::ui_thread::{UiThread, check_ui_thread};

/// The two things a forwarding listener needs: who to push to, and
/// whether it is still allowed to.
pub(crate) struct Forward<T> {
    observer: Arc<dyn Observer<T>>,
    disposed: Arc<AtomicBool>,
}

impl<T> Forward<T> {
    /// Push `value` unless the owning subscription has been disposed.
    pub(crate) fn next(&self, value: T) {
        if !self.disposed.load(Ordering::Acquire) {
            self.observer.on_next(value);
        }
    }
}

/// How a listener kind is added to and removed from its widget.
pub(crate) struct Registration<V: ?Sized, L: ?Sized> {
    pub(crate) add: fn(&V, Arc<L>),
    pub(crate) remove: fn(&V, &Arc<L>),
}

/// Check the thread, register the listener built by `listener`, and
/// return a subscription that removes it again.
///
/// Off the UI thread the observer gets a single error and the widget is
/// never touched.
pub(crate) fn attach<V, T, L>(
    view: &Arc<V>,
    ui: &UiThread,
    observer: Arc<dyn Observer<T>>,
    registration: Registration<V, L>,
    listener: impl FnOnce(Forward<T>) -> Arc<L>,
) -> Subscription
where
    V: Send + Sync + 'static,
    T: 'static,
    L: ?Sized + Send + Sync + 'static,
{
    if !check_ui_thread(ui, &*observer) {
        return Subscription::disposed();
    }

    let disposed = Arc::new(AtomicBool::new(false));
    let listener = listener(Forward {
        observer,
        disposed: disposed.clone(),
    });

    (registration.add)(view, listener.clone());
    log::trace!("Listener registered");

    let view = view.clone();
    let remove = registration.remove;
    Subscription::new(disposed, ui.clone(), move || {
        remove(&view, &listener);
        log::trace!("Listener removed");
    })
}
