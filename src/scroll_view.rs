//! The widget side of a scroll binding.
//!
//! A scrollable widget exposes its scroll notifications by implementing
//! [`ScrollView`]. Bindings register an [`OnScrollListener`] when
//! subscribed and remove the same `Arc` again when disposed, so widgets
//! must compare listeners by identity.
//!
//! Widget authors who don't already keep a listener list can embed
//! [`ScrollListeners`]:
//!
//! ```ignore
//! struct List {
//!     listeners: ScrollListeners<List>,
//! }
//!
//! impl ScrollView for List {
//!     fn add_on_scroll_listener(&self, listener: Arc<dyn OnScrollListener<Self>>) {
//!         self.listeners.add(listener);
//!     }
//!
//!     fn remove_on_scroll_listener(&self, listener: &Arc<dyn OnScrollListener<Self>>) {
//!         self.listeners.remove(listener);
//!     }
//! }
//!
//! // In the widget's event handling:
//! self.listeners.dispatch_scroll_state_changed(self, SCROLL_STATE_DRAGGING);
//! ```

use std::sync::Arc;

use crate::binding::Registration;
use crate::listeners::ListenerSet;

/// Callbacks invoked by a scrollable widget.
///
/// Both methods default to doing nothing so a listener only overrides
/// what it cares about.
pub trait OnScrollListener<W: ?Sized>: Send + Sync {
    /// The widget's scroll phase changed to `new_state`.
    ///
    /// The code is owned by the widget; see [`ScrollState`](crate::ScrollState)
    /// for the conventional values.
    fn on_scroll_state_changed(&self, view: &W, new_state: i32) {
        let _ = (view, new_state);
    }

    /// The widget scrolled by `dx`/`dy` pixels.
    fn on_scrolled(&self, view: &W, dx: i32, dy: i32) {
        let _ = (view, dx, dy);
    }
}

/// A widget that reports scroll changes to registered listeners.
///
/// Implementations are expected to be touched only on their UI thread;
/// the `Send + Sync` bound lets handles travel so that misuse can be
/// detected and reported instead of being unrepresentable.
pub trait ScrollView: Send + Sync + 'static {
    fn add_on_scroll_listener(&self, listener: Arc<dyn OnScrollListener<Self>>);

    /// Remove a listener previously passed to
    /// [`add_on_scroll_listener`](Self::add_on_scroll_listener).
    ///
    /// Must be a no-op if the listener is not registered, e.g. because the
    /// widget was torn down in the meantime.
    fn remove_on_scroll_listener(&self, listener: &Arc<dyn OnScrollListener<Self>>);
}

pub(crate) fn scroll_registration<W: ScrollView>() -> Registration<W, dyn OnScrollListener<W>> {
    Registration {
        add: W::add_on_scroll_listener,
        remove: W::remove_on_scroll_listener,
    }
}

/// Scroll listener registry for widgets to embed.
pub type ScrollListeners<W> = ListenerSet<dyn OnScrollListener<W>>;

impl<W: ?Sized> ListenerSet<dyn OnScrollListener<W>> {
    /// Notify every listener, in registration order, of a state change.
    pub fn dispatch_scroll_state_changed(&self, view: &W, new_state: i32) {
        for listener in self.snapshot() {
            listener.on_scroll_state_changed(view, new_state);
        }
    }

    /// Notify every listener, in registration order, of a scroll delta.
    pub fn dispatch_scrolled(&self, view: &W, dx: i32, dy: i32) {
        for listener in self.snapshot() {
            listener.on_scrolled(view, dx, dy);
        }
    }
}
