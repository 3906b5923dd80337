#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::atomic::{AtomicI32, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use scroll_bindings::{
    AdapterDataObserver, AdapterDataObservers, ChildAttachListeners, ChildAttachView,
    ListAdapter, OnChildAttachStateChangeListener, OnScrollListener, Observer, ScrollListeners,
    ScrollView, WrongContextError,
};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A scrollable list with a fixed content extent, standing in for a real
/// widget. Counts listener registrations so tests can check the bridge's
/// side effects.
pub struct FakeScrollView {
    listeners: ScrollListeners<FakeScrollView>,
    child_listeners: ChildAttachListeners<FakeScrollView>,
    children: Mutex<Vec<u32>>,
    adds: AtomicUsize,
    removes: AtomicUsize,
    offset_x: AtomicI32,
    offset_y: AtomicI32,
    max_offset: i32,
}

impl FakeScrollView {
    pub fn new(max_offset: i32) -> Arc<Self> {
        Arc::new(Self {
            listeners: ScrollListeners::new(),
            child_listeners: ChildAttachListeners::new(),
            children: Mutex::new(Vec::new()),
            adds: AtomicUsize::new(0),
            removes: AtomicUsize::new(0),
            offset_x: AtomicI32::new(0),
            offset_y: AtomicI32::new(0),
            max_offset,
        })
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn child_listener_count(&self) -> usize {
        self.child_listeners.len()
    }

    /// Replace the visible children, detaching the old ones first.
    pub fn set_children(&self, children: Vec<u32>) {
        let old = std::mem::replace(&mut *self.children.lock().unwrap(), children.clone());
        for child in &old {
            self.child_listeners.dispatch_child_detached(self, child);
        }
        for child in &children {
            self.child_listeners.dispatch_child_attached(self, child);
        }
    }

    pub fn add_calls(&self) -> usize {
        self.adds.load(Ordering::SeqCst)
    }

    pub fn remove_calls(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }

    /// Simulate the native scroll phase machinery reporting `state`.
    pub fn report_state(&self, state: i32) {
        self.listeners.dispatch_scroll_state_changed(self, state);
    }

    /// Scroll by the requested amount, clamped to the content. Listeners
    /// are only notified if the view actually moved.
    pub fn scroll_by(&self, dx: i32, dy: i32) {
        let moved_x = Self::clamped_move(&self.offset_x, dx, self.max_offset);
        let moved_y = Self::clamped_move(&self.offset_y, dy, self.max_offset);
        if moved_x != 0 || moved_y != 0 {
            self.listeners.dispatch_scrolled(self, moved_x, moved_y);
        }
    }

    /// Tear the widget down behind the bridge's back.
    pub fn detach(&self) {
        self.listeners.clear();
        self.child_listeners.clear();
    }

    fn clamped_move(offset: &AtomicI32, delta: i32, max: i32) -> i32 {
        let old = offset.load(Ordering::SeqCst);
        let new = (old + delta).clamp(0, max);
        offset.store(new, Ordering::SeqCst);
        new - old
    }
}

impl ScrollView for FakeScrollView {
    fn add_on_scroll_listener(&self, listener: Arc<dyn OnScrollListener<Self>>) {
        self.adds.fetch_add(1, Ordering::SeqCst);
        self.listeners.add(listener);
    }

    fn remove_on_scroll_listener(&self, listener: &Arc<dyn OnScrollListener<Self>>) {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.listeners.remove(listener);
    }
}

impl ChildAttachView for FakeScrollView {
    type Child = u32;

    fn add_on_child_attach_state_change_listener(
        &self,
        listener: Arc<dyn OnChildAttachStateChangeListener<Self>>,
    ) {
        self.adds.fetch_add(1, Ordering::SeqCst);
        self.child_listeners.add(listener);
    }

    fn remove_on_child_attach_state_change_listener(
        &self,
        listener: &Arc<dyn OnChildAttachStateChangeListener<Self>>,
    ) {
        self.removes.fetch_add(1, Ordering::SeqCst);
        self.child_listeners.remove(listener);
    }
}

/// A list adapter whose data can be marked as changed.
#[derive(Default)]
pub struct FakeAdapter {
    observers: AdapterDataObservers,
    unregisters: AtomicUsize,
}

impl FakeAdapter {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn notify_data_set_changed(&self) {
        self.observers.notify_changed();
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn unregister_calls(&self) -> usize {
        self.unregisters.load(Ordering::SeqCst)
    }
}

impl ListAdapter for FakeAdapter {
    fn register_adapter_data_observer(&self, observer: Arc<dyn AdapterDataObserver>) {
        self.observers.add(observer);
    }

    fn unregister_adapter_data_observer(&self, observer: &Arc<dyn AdapterDataObserver>) {
        self.unregisters.fetch_add(1, Ordering::SeqCst);
        self.observers.remove(observer);
    }
}

#[derive(Debug)]
pub enum Notification<T> {
    Next(T),
    Error(WrongContextError),
}

/// Observer that records everything it is sent.
pub struct RecordingObserver<T> {
    events: Mutex<VecDeque<Notification<T>>>,
}

impl<T> RecordingObserver<T> {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            events: Mutex::new(VecDeque::new()),
        })
    }

    fn take_event(&self) -> Notification<T> {
        self.events
            .lock()
            .unwrap()
            .pop_front()
            .expect("no event received")
    }

    #[track_caller]
    pub fn take_next(&self) -> T {
        match self.take_event() {
            Notification::Next(value) => value,
            Notification::Error(err) => panic!("expected a value, got error: {err}"),
        }
    }

    #[track_caller]
    pub fn take_error(&self) -> WrongContextError {
        match self.take_event() {
            Notification::Error(err) => err,
            Notification::Next(_) => panic!("expected an error, got a value"),
        }
    }

    #[track_caller]
    pub fn assert_no_more_events(&self) {
        let remaining = self.events.lock().unwrap().len();
        assert_eq!(remaining, 0, "expected no more events, {remaining} pending");
    }
}

impl<T: Send> Observer<T> for RecordingObserver<T> {
    fn on_next(&self, value: T) {
        self.events
            .lock()
            .unwrap()
            .push_back(Notification::Next(value));
    }

    fn on_error(&self, error: WrongContextError) {
        self.events
            .lock()
            .unwrap()
            .push_back(Notification::Error(error));
    }
}
