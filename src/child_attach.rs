//! Stream of child attach and detach events for a container widget.
//!
//! Recycling containers attach child views as they scroll into the
//! viewport and detach them as they leave. The widget decides what a
//! child handle is through [`ChildAttachView::Child`].

use std::sync::Arc;

use crate::binding::{Forward, Registration, attach};
use crate::listeners::ListenerSet;
use crate::observer::{Observable, Observer};
use crate::subscription::Subscription;
use crate::ui_thread::UiThread;

/// Callbacks invoked when a container attaches or detaches a child.
pub trait OnChildAttachStateChangeListener<W: ChildAttachView + ?Sized>: Send + Sync {
    fn on_child_view_attached(&self, view: &W, child: &W::Child) {
        let _ = (view, child);
    }

    fn on_child_view_detached(&self, view: &W, child: &W::Child) {
        let _ = (view, child);
    }
}

/// A container that reports child attachment to registered listeners.
pub trait ChildAttachView: Send + Sync + 'static {
    /// Handle the container uses for its children.
    type Child;

    fn add_on_child_attach_state_change_listener(
        &self,
        listener: Arc<dyn OnChildAttachStateChangeListener<Self>>,
    );

    /// Must be a no-op if the listener is not registered.
    fn remove_on_child_attach_state_change_listener(
        &self,
        listener: &Arc<dyn OnChildAttachStateChangeListener<Self>>,
    );
}

/// Child attach listener registry for widgets to embed.
pub type ChildAttachListeners<W> = ListenerSet<dyn OnChildAttachStateChangeListener<W>>;

impl<W: ChildAttachView + ?Sized> ListenerSet<dyn OnChildAttachStateChangeListener<W>> {
    pub fn dispatch_child_attached(&self, view: &W, child: &W::Child) {
        for listener in self.snapshot() {
            listener.on_child_view_attached(view, child);
        }
    }

    pub fn dispatch_child_detached(&self, view: &W, child: &W::Child) {
        for listener in self.snapshot() {
            listener.on_child_view_detached(view, child);
        }
    }
}

/// A child entered or left its container.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ChildAttachStateChangeEvent<C> {
    Attached(C),
    Detached(C),
}

impl<C> ChildAttachStateChangeEvent<C> {
    pub fn child(&self) -> &C {
        match self {
            ChildAttachStateChangeEvent::Attached(child)
            | ChildAttachStateChangeEvent::Detached(child) => child,
        }
    }

    pub fn is_attached(&self) -> bool {
        matches!(self, ChildAttachStateChangeEvent::Attached(_))
    }
}

/// Create a stream of child attach state changes on `view`.
///
/// Same lifecycle as [`scroll_state_changes`](crate::scroll_state_changes).
/// Child handles are cloned into each event.
pub fn child_attach_state_change_events<W>(
    view: Arc<W>,
    ui: UiThread,
) -> ChildAttachStateChanges<W>
where
    W: ChildAttachView,
    W::Child: Clone + 'static,
{
    ChildAttachStateChanges { view, ui }
}

pub struct ChildAttachStateChanges<W> {
    view: Arc<W>,
    ui: UiThread,
}

impl<W> Observable for ChildAttachStateChanges<W>
where
    W: ChildAttachView,
    W::Child: Clone + 'static,
{
    type Item = ChildAttachStateChangeEvent<W::Child>;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<Self::Item> + 'static,
    {
        let observer: Arc<dyn Observer<Self::Item>> = Arc::new(observer);
        let registration: Registration<W, dyn OnChildAttachStateChangeListener<W>> =
            Registration {
                add: W::add_on_child_attach_state_change_listener,
                remove: W::remove_on_child_attach_state_change_listener,
            };
        attach(
            &self.view,
            &self.ui,
            observer,
            registration,
            |forward| -> Arc<dyn OnChildAttachStateChangeListener<W>> {
                Arc::new(ChildListener(forward))
            },
        )
    }
}

struct ChildListener<C>(Forward<ChildAttachStateChangeEvent<C>>);

impl<W> OnChildAttachStateChangeListener<W> for ChildListener<W::Child>
where
    W: ChildAttachView + ?Sized,
    W::Child: Clone,
{
    fn on_child_view_attached(&self, _view: &W, child: &W::Child) {
        self.0.next(ChildAttachStateChangeEvent::Attached(child.clone()));
    }

    fn on_child_view_detached(&self, _view: &W, child: &W::Child) {
        self.0.next(ChildAttachStateChangeEvent::Detached(child.clone()));
    }
}
