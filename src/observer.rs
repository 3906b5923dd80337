//! Push-based consumer side of a binding stream.

use crate::error::WrongContextError;
use crate::subscription::Subscription;

/// Receives values pushed by an [`Observable`].
///
/// Observers are shared with listeners that live inside a widget, so they
/// must be `Send + Sync`. Values are only ever delivered on the UI thread.
pub trait Observer<T>: Send + Sync {
    /// Called for each value, in the order the widget reported them.
    fn on_next(&self, value: T);

    /// Called at most once, when the subscription could not be set up.
    /// No values follow an error.
    fn on_error(&self, error: WrongContextError);
}

impl<T, O: Observer<T> + ?Sized> Observer<T> for std::sync::Arc<O> {
    fn on_next(&self, value: T) {
        (**self).on_next(value);
    }

    fn on_error(&self, error: WrongContextError) {
        (**self).on_error(error);
    }
}

/// A lazily subscribed source of values.
///
/// Nothing happens until [`subscribe`](Observable::subscribe) is called.
/// Every call creates an independent [`Subscription`].
pub trait Observable {
    type Item;

    fn subscribe<O>(&self, observer: O) -> Subscription
    where
        O: Observer<Self::Item> + 'static;
}
