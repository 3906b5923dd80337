//! Stream of scroll deltas for a scrollable widget.

use std::sync::Arc;

use crate::binding::{Forward, attach};
use crate::observer::{Observable, Observer};
use crate::scroll_view::{OnScrollListener, ScrollView, scroll_registration};
use crate::subscription::Subscription;
use crate::ui_thread::UiThread;

/// A scroll by `dx` horizontal and `dy` vertical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScrollEvent {
    pub dx: i32,
    pub dy: i32,
}

/// Create a stream of scroll events on `view`.
///
/// Same lifecycle as [`scroll_state_changes`](crate::scroll_state_changes):
/// lazy, UI-thread only, and the widget is kept alive until every
/// subscription is disposed.
pub fn scroll_events<W: ScrollView>(view: Arc<W>, ui: UiThread) -> ScrollEvents<W> {
    ScrollEvents { view, ui }
}

pub struct ScrollEvents<W> {
    view: Arc<W>,
    ui: UiThread,
}

impl<W: ScrollView> Observable for ScrollEvents<W> {
    type Item = ScrollEvent;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<ScrollEvent> + 'static,
    {
        let observer: Arc<dyn Observer<ScrollEvent>> = Arc::new(observer);
        attach(
            &self.view,
            &self.ui,
            observer,
            scroll_registration(),
            |forward| -> Arc<dyn OnScrollListener<W>> { Arc::new(ScrolledListener(forward)) },
        )
    }
}

struct ScrolledListener(Forward<ScrollEvent>);

impl<W: ?Sized> OnScrollListener<W> for ScrolledListener {
    fn on_scrolled(&self, _view: &W, dx: i32, dy: i32) {
        self.0.next(ScrollEvent { dx, dy });
    }
}
