//! Stream of data set changes for a list adapter.

use std::sync::{Arc, Weak};

use crate::binding::{Forward, Registration, attach};
use crate::listeners::ListenerSet;
use crate::observer::{Observable, Observer};
use crate::subscription::Subscription;
use crate::ui_thread::UiThread;

/// Notified when an adapter's backing data changes.
pub trait AdapterDataObserver: Send + Sync {
    fn on_changed(&self);
}

/// The data source feeding a recycling list.
pub trait ListAdapter: Send + Sync + 'static {
    fn register_adapter_data_observer(&self, observer: Arc<dyn AdapterDataObserver>);

    /// Must be a no-op if the observer is not registered.
    fn unregister_adapter_data_observer(&self, observer: &Arc<dyn AdapterDataObserver>);
}

/// Adapter observer registry for adapters to embed.
pub type AdapterDataObservers = ListenerSet<dyn AdapterDataObserver>;

impl ListenerSet<dyn AdapterDataObserver> {
    /// Tell every observer the data set changed.
    pub fn notify_changed(&self) {
        for observer in self.snapshot() {
            observer.on_changed();
        }
    }
}

/// Create a stream of data changes on `adapter`.
///
/// Each subscriber first receives the adapter itself, then the adapter
/// again after every change. Otherwise the lifecycle matches
/// [`scroll_state_changes`](crate::scroll_state_changes).
pub fn data_changes<A: ListAdapter>(adapter: Arc<A>, ui: UiThread) -> DataChanges<A> {
    DataChanges { adapter, ui }
}

pub struct DataChanges<A> {
    adapter: Arc<A>,
    ui: UiThread,
}

impl<A: ListAdapter> Observable for DataChanges<A> {
    type Item = Arc<A>;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<Arc<A>> + 'static,
    {
        let observer: Arc<dyn Observer<Arc<A>>> = Arc::new(observer);
        let registration: Registration<A, dyn AdapterDataObserver> = Registration {
            add: A::register_adapter_data_observer,
            remove: A::unregister_adapter_data_observer,
        };
        // Weak: the adapter owns the listener for as long as it is registered.
        let adapter = Arc::downgrade(&self.adapter);
        let subscription = attach(
            &self.adapter,
            &self.ui,
            observer.clone(),
            registration,
            |forward| -> Arc<dyn AdapterDataObserver> {
                Arc::new(ChangeListener { adapter, forward })
            },
        );

        if !subscription.is_disposed() {
            observer.on_next(self.adapter.clone());
        }
        subscription
    }
}

struct ChangeListener<A> {
    adapter: Weak<A>,
    forward: Forward<Arc<A>>,
}

impl<A: Send + Sync> AdapterDataObserver for ChangeListener<A> {
    fn on_changed(&self) {
        if let Some(adapter) = self.adapter.upgrade() {
            self.forward.next(adapter);
        }
    }
}
