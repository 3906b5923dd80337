//! Reactive bindings for scrollable widgets.
//!
//! Turns a widget's scroll, child attach and adapter data callbacks into
//! lazily subscribed, push-based streams. Each subscription checks that it
//! is made on the UI thread and registers one listener on the widget. It
//! forwards callbacks to its [`Observer`] and removes the listener exactly
//! once when disposed.
//!
//! ```ignore
//! let ui = UiThread::current();
//! let mut sub = scroll_state_changes(list.clone(), ui.clone()).subscribe(MyObserver);
//!
//! // ... the widget reports SCROLL_STATE_DRAGGING, SCROLL_STATE_IDLE ...
//!
//! sub.dispose();
//! ```

mod binding;
mod child_attach;
mod data_changes;
mod error;
mod listeners;
mod observer;
mod scroll_events;
mod scroll_state;
mod scroll_state_changes;
mod scroll_view;
mod subscription;
mod ui_thread;

pub use child_attach::{
    ChildAttachListeners, ChildAttachStateChangeEvent, ChildAttachStateChanges, ChildAttachView,
    OnChildAttachStateChangeListener, child_attach_state_change_events,
};
pub use data_changes::{
    AdapterDataObserver, AdapterDataObservers, DataChanges, ListAdapter, data_changes,
};
pub use error::{Result, WrongContextError};
pub use listeners::ListenerSet;
pub use observer::{Observable, Observer};
pub use scroll_events::{ScrollEvent, ScrollEvents, scroll_events};
pub use scroll_state::{
    SCROLL_STATE_DRAGGING, SCROLL_STATE_IDLE, SCROLL_STATE_SETTLING, ScrollState,
};
pub use scroll_state_changes::{ScrollStateChanges, scroll_state_changes};
pub use scroll_view::{OnScrollListener, ScrollListeners, ScrollView};
pub use subscription::Subscription;
pub use ui_thread::{UiThread, check_ui_thread};

pub mod prelude {
    pub use crate::{
        AdapterDataObserver, ChildAttachStateChangeEvent, ChildAttachView, ListAdapter,
        Observable, Observer, OnChildAttachStateChangeListener, OnScrollListener, ScrollEvent,
        ScrollListeners, ScrollState, ScrollView, Subscription, UiThread, WrongContextError,
        child_attach_state_change_events, data_changes, scroll_events, scroll_state_changes,
    };
}
