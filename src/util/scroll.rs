//! One passive window `scroll` listener fanned out to subscribers.

use std::cell::RefCell;
use std::rc::Rc;

use viewport::observer::{Observer, Subscription};
use web_sys::Window;

use crate::error::DomError;
use crate::util::dom;
use crate::util::listener::EventListener;

/// Scroll offset at the time of the event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTick {
    pub scroll_y: f64,
}

#[derive(Debug)]
pub struct ScrollHub {
    observers: Rc<RefCell<Observer<ScrollTick>>>,
    _listener: EventListener,
}

impl ScrollHub {
    pub fn attach(window: &Window) -> Result<Self, DomError> {
        let observers: Rc<RefCell<Observer<ScrollTick>>> = Rc::new(RefCell::new(Observer::new()));
        let emit_to = Rc::clone(&observers);
        let source = window.clone();
        let listener = EventListener::passive(window, "scroll", move |_| {
            let tick = ScrollTick { scroll_y: dom::scroll_y(&source) };
            emit_to.borrow_mut().emit(&tick);
        })?;
        Ok(Self { observers, _listener: listener })
    }

    pub fn subscribe<C>(&self, callback: C) -> Subscription
    where
        C: FnMut(&ScrollTick) + 'static,
    {
        self.observers.borrow_mut().subscribe_all(callback)
    }

    pub fn unsubscribe(&self, subscription: Subscription) -> bool {
        self.observers.borrow_mut().unsubscribe(subscription)
    }

    pub fn subscriber_count(&self) -> usize {
        self.observers.borrow().len()
    }
}
