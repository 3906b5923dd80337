//! Handle for one live binding between a stream and a widget.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::ui_thread::UiThread;

/// Work that detaches a listener from its widget.
struct Teardown {
    ui: UiThread,
    task: Box<dyn FnOnce() + Send>,
}

/// A live attachment between an observer and a widget's listener set.
///
/// The subscription moves from active to disposed exactly once, either
/// through [`dispose`](Self::dispose) or when it is dropped. Disposal
/// stops delivery immediately and removes the widget listener exactly
/// once. Removal runs inline on the UI thread; from any other thread it is
/// posted to the [`UiThread`] queue and runs on the next
/// [`UiThread::run_pending`].
#[must_use = "dropping a Subscription disposes it immediately"]
pub struct Subscription {
    disposed: Arc<AtomicBool>,
    teardown: Option<Teardown>,
}

impl Subscription {
    /// An active subscription whose disposal runs `teardown` on `ui`.
    ///
    /// `disposed` is shared with the listener, which checks it before
    /// forwarding each value.
    pub(crate) fn new(
        disposed: Arc<AtomicBool>,
        ui: UiThread,
        teardown: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            disposed,
            teardown: Some(Teardown {
                ui,
                task: Box::new(teardown),
            }),
        }
    }

    /// A subscription that was never attached to anything.
    pub fn disposed() -> Self {
        Self {
            disposed: Arc::new(AtomicBool::new(true)),
            teardown: None,
        }
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::Acquire)
    }

    /// Stop delivery and detach the listener. Later calls do nothing.
    pub fn dispose(&mut self) {
        if self.disposed.swap(true, Ordering::AcqRel) {
            return;
        }

        let Some(Teardown { ui, task }) = self.teardown.take() else {
            return;
        };

        if ui.is_current() {
            task();
        } else {
            log::debug!("Subscription disposed off the UI thread, deferring listener removal");
            ui.post(task);
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize;
    use std::thread;

    fn counting_subscription(ui: &UiThread) -> (Subscription, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let runs_clone = runs.clone();
        let sub = Subscription::new(Arc::new(AtomicBool::new(false)), ui.clone(), move || {
            runs_clone.fetch_add(1, Ordering::SeqCst);
        });
        (sub, runs)
    }

    #[test]
    fn test_dispose_runs_teardown_once() {
        let ui = UiThread::current();
        let (mut sub, runs) = counting_subscription(&ui);
        assert!(!sub.is_disposed());

        for _ in 0..5 {
            sub.dispose();
        }

        assert!(sub.is_disposed());
        assert_eq!(runs.load(Ordering::SeqCst), 1);

        drop(sub);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_drop_disposes() {
        let ui = UiThread::current();
        let (sub, runs) = counting_subscription(&ui);
        drop(sub);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_dispose_off_thread_defers_teardown() {
        let ui = UiThread::current();
        let (sub, runs) = counting_subscription(&ui);
        let flag = sub.disposed.clone();

        thread::spawn(move || {
            let mut sub = sub;
            sub.dispose();
            sub.dispose();
        })
        .join()
        .unwrap();

        // Delivery is cut off right away, removal waits for the UI loop
        assert!(flag.load(Ordering::SeqCst));
        assert_eq!(runs.load(Ordering::SeqCst), 0);

        assert_eq!(ui.run_pending(), 1);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
        assert_eq!(ui.run_pending(), 0);
    }

    #[test]
    fn test_disposed_subscription() {
        let mut sub = Subscription::disposed();
        assert!(sub.is_disposed());
        sub.dispose();
        assert!(sub.is_disposed());
    }
}
