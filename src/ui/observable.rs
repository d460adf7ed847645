//! Observable value with synchronous subscriber notification.
//!
//! Views read the current value with [`Observable::get`] and register for
//! changes with [`Observable::subscribe`]. Only the owning controller can
//! write. Every accepted write is delivered to all subscribers before the
//! next write is applied, so subscribers see changes in write order.

use std::cell::Cell;
use std::collections::VecDeque;
use std::sync::{Arc, Weak};

use parking_lot::{Mutex, ReentrantMutex};

type Callback<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Slot<S> {
    value: S,
    next_id: u64,
    subscribers: Vec<(u64, Callback<S>)>,
    /// Accepted values not yet delivered, oldest first.
    pending: VecDeque<S>,
}

struct Shared<S> {
    /// Serializes write + delivery across threads. Reentrant so a subscriber
    /// may write on the same thread; the flag marks an active delivery loop.
    dispatch: ReentrantMutex<Cell<bool>>,
    slot: Mutex<Slot<S>>,
}

/// Ends a delivery loop, even when a callback panics.
struct Delivering<'a, S> {
    shared: &'a Shared<S>,
    active: &'a Cell<bool>,
}

impl<S> Drop for Delivering<'_, S> {
    fn drop(&mut self) {
        self.active.set(false);
        self.shared.slot.lock().pending.clear();
    }
}

pub struct Observable<S> {
    shared: Arc<Shared<S>>,
}

impl<S> Clone for Observable<S> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Observable<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let slot = self.shared.slot.lock();
        f.debug_struct("Observable")
            .field("value", &slot.value)
            .field("subscribers", &slot.subscribers.len())
            .finish()
    }
}

impl<S> Observable<S>
where
    S: Clone + PartialEq + Send + Sync + 'static,
{
    pub(crate) fn new(initial: S) -> Self {
        Self {
            shared: Arc::new(Shared {
                dispatch: ReentrantMutex::new(Cell::new(false)),
                slot: Mutex::new(Slot {
                    value: initial,
                    next_id: 0,
                    subscribers: Vec::new(),
                    pending: VecDeque::new(),
                }),
            }),
        }
    }

    /// Snapshot of the current value.
    pub fn get(&self) -> S {
        self.shared.slot.lock().value.clone()
    }

    /// Registers `callback` for every subsequent change.
    ///
    /// The current value is not replayed; read it with [`Observable::get`].
    /// The callback stays registered until the returned [`Subscription`]
    /// is dropped or unsubscribed.
    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = {
            let mut slot = self.shared.slot.lock();
            let id = slot.next_id;
            slot.next_id += 1;
            slot.subscribers.push((id, Arc::new(callback)));
            id
        };

        let weak: Weak<Shared<S>> = Arc::downgrade(&self.shared);
        Subscription {
            cancel: Some(Box::new(move || {
                if let Some(shared) = weak.upgrade() {
                    shared.slot.lock().subscribers.retain(|(sid, _)| *sid != id);
                }
            })),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.shared.slot.lock().subscribers.len()
    }

    pub(crate) fn set(&self, value: S) -> bool {
        self.update(|_| value)
    }

    /// Replaces the value with `f(current)` and notifies subscribers.
    ///
    /// Returns false, without notifying, when the new value equals the old.
    /// A write made from inside a subscriber is queued and delivered by the
    /// outermost call once the current value has reached every subscriber.
    pub(crate) fn update<F>(&self, f: F) -> bool
    where
        F: FnOnce(S) -> S,
    {
        let dispatch = self.shared.dispatch.lock();

        {
            let mut slot = self.shared.slot.lock();
            let next = f(slot.value.clone());
            if next == slot.value {
                return false;
            }
            slot.value = next.clone();
            slot.pending.push_back(next);
        }

        if dispatch.get() {
            return true;
        }
        dispatch.set(true);
        let _delivering = Delivering {
            shared: &self.shared,
            active: &dispatch,
        };

        loop {
            let (snapshot, callbacks) = {
                let mut slot = self.shared.slot.lock();
                let Some(snapshot) = slot.pending.pop_front() else {
                    break;
                };
                let callbacks: Vec<Callback<S>> = slot
                    .subscribers
                    .iter()
                    .map(|(_, callback)| Arc::clone(callback))
                    .collect();
                (snapshot, callbacks)
            };

            // Slot lock released: callbacks may read, write, subscribe or
            // unsubscribe.
            for callback in callbacks {
                callback(&snapshot);
            }
        }
        true
    }
}

/// Handle that keeps a subscriber registered.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl Subscription {
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}
