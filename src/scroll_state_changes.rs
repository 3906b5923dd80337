//! Stream of scroll phase changes for a scrollable widget.

use std::sync::Arc;

use crate::binding::{Forward, attach};
use crate::observer::{Observable, Observer};
use crate::scroll_view::{OnScrollListener, ScrollView, scroll_registration};
use crate::subscription::Subscription;
use crate::ui_thread::UiThread;

/// Create a stream of scroll state changes on `view`.
///
/// Subscribing registers a listener on the widget; disposing the returned
/// [`Subscription`] removes it. Subscriptions must be made on `ui`,
/// otherwise the observer receives a
/// [`WrongContextError`](crate::WrongContextError) and nothing is
/// registered.
///
/// **Warning:** the stream and every live subscription keep a strong
/// reference to `view`. Dispose subscriptions to release it.
pub fn scroll_state_changes<W: ScrollView>(view: Arc<W>, ui: UiThread) -> ScrollStateChanges<W> {
    ScrollStateChanges { view, ui }
}

/// Lazily subscribed stream of raw scroll state codes.
///
/// See [`ScrollState`](crate::ScrollState) for the conventional codes.
pub struct ScrollStateChanges<W> {
    view: Arc<W>,
    ui: UiThread,
}

impl<W: ScrollView> Observable for ScrollStateChanges<W> {
    type Item = i32;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<i32> + 'static,
    {
        let observer: Arc<dyn Observer<i32>> = Arc::new(observer);
        attach(
            &self.view,
            &self.ui,
            observer,
            scroll_registration(),
            |forward| -> Arc<dyn OnScrollListener<W>> { Arc::new(StateListener(forward)) },
        )
    }
}

struct StateListener(Forward<i32>);

impl<W: ?Sized> OnScrollListener<W> for StateListener {
    fn on_scroll_state_changed(&self, _view: &W, new_state: i32) {
        self.0.next(new_state);
    }
}
