//! Subscription registry for engine events.
//!
//! Listeners register a predicate and a callback and get back a
//! [`Subscription`] handle. Dropping the handle does nothing; teardown is
//! always an explicit [`Observer::unsubscribe`] so lifecycles stay visible
//! in the code that owns them.

#[cfg(test)]
#[path = "observer_test.rs"]
mod observer_test;

/// Handle returned by [`Observer::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type Predicate<E> = Box<dyn Fn(&E) -> bool>;
type Callback<E> = Box<dyn FnMut(&E)>;

struct Listener<E> {
    id: u64,
    predicate: Predicate<E>,
    callback: Callback<E>,
}

/// Ordered set of listeners for events of type `E`.
///
/// Callbacks run synchronously, in registration order, on the thread that
/// calls [`Observer::emit`].
pub struct Observer<E> {
    next_id: u64,
    listeners: Vec<Listener<E>>,
}

impl<E> Default for Observer<E> {
    fn default() -> Self {
        Self { next_id: 0, listeners: Vec::new() }
    }
}

impl<E> std::fmt::Debug for Observer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observer")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl<E> Observer<E> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `callback` for every event accepted by `predicate`.
    pub fn subscribe<P, C>(&mut self, predicate: P, callback: C) -> Subscription
    where
        P: Fn(&E) -> bool + 'static,
        C: FnMut(&E) + 'static,
    {
        let id = self.next_id;
        self.next_id += 1;
        self.listeners.push(Listener { id, predicate: Box::new(predicate), callback: Box::new(callback) });
        Subscription(id)
    }

    /// Register `callback` for every event.
    pub fn subscribe_all<C>(&mut self, callback: C) -> Subscription
    where
        C: FnMut(&E) + 'static,
    {
        self.subscribe(|_| true, callback)
    }

    /// Remove a listener. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|l| l.id != subscription.0);
        self.listeners.len() != before
    }

    /// Deliver `event` to every matching listener. Returns how many ran.
    pub fn emit(&mut self, event: &E) -> usize {
        let mut delivered = 0;
        for listener in &mut self.listeners {
            if (listener.predicate)(event) {
                (listener.callback)(event);
                delivered += 1;
            }
        }
        delivered
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Drop every listener.
    pub fn clear(&mut self) {
        self.listeners.clear();
    }
}
