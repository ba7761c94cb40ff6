//! Synchronous publisher/subscriber cell.
//!
//! A `Publisher` holds a current value and an ordered list of callbacks.
//! `publish` stores the value and runs every callback in registration order
//! before returning. A publish issued from inside one of this publisher's own
//! callbacks is queued and delivered once the current round finishes, so each
//! callback always runs to completion before the next value is dispatched.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`); there is no locking and
//! no suspension.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Handle returned by [`Publisher::subscribe`]
pub type SubscriptionId = u64;

type Callback<T> = Rc<dyn Fn(&T)>;

pub struct Publisher<T> {
    current: RefCell<T>,
    subscribers: RefCell<Vec<(SubscriptionId, Callback<T>)>>,
    next_id: Cell<SubscriptionId>,
    queue: RefCell<VecDeque<T>>,
    dispatching: Cell<bool>,
}

impl<T: Clone> Publisher<T> {
    pub fn new(initial: T) -> Self {
        Self {
            current: RefCell::new(initial),
            subscribers: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
            queue: RefCell::new(VecDeque::new()),
            dispatching: Cell::new(false),
        }
    }

    /// Last published value (or the initial one)
    pub fn current(&self) -> T {
        self.current.borrow().clone()
    }

    /// Register a callback. It sees values published from now on, not the current one.
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> SubscriptionId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Remove a callback. Returns false if the id was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = self.subscribers.borrow_mut();
        let before = subscribers.len();
        subscribers.retain(|(sid, _)| *sid != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.borrow().len()
    }

    pub fn publish(&self, value: T) {
        self.queue.borrow_mut().push_back(value);
        if self.dispatching.replace(true) {
            // Delivered by the outer publish once its current round is done.
            return;
        }

        loop {
            let next = self.queue.borrow_mut().pop_front();
            let Some(value) = next else {
                break;
            };
            *self.current.borrow_mut() = value.clone();

            // Snapshot the list so callbacks may subscribe/unsubscribe freely.
            let callbacks: Vec<Callback<T>> = self
                .subscribers
                .borrow()
                .iter()
                .map(|(_, cb)| Rc::clone(cb))
                .collect();
            for callback in callbacks {
                callback(&value);
            }
        }

        self.dispatching.set(false);
    }
}

impl<T: Clone + Default> Default for Publisher<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Publisher<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Publisher")
            .field("current", &self.current.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}
