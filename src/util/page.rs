//! Ownership root for everything a page installs.
//!
//! Components hand their listeners, observers, loops and inserted nodes to
//! the [`Page`]; dropping the page detaches all of them.

use viewport::observer::Subscription;
use web_sys::{Document, Element, Window};

use crate::error::DomError;
use crate::util::created_nodes::CreatedNodes;
use crate::util::dom;
use crate::util::frame_loop::FrameLoop;
use crate::util::intersection::ObservedSet;
use crate::util::listener::EventListener;
use crate::util::scroll::{ScrollHub, ScrollTick};

#[derive(Debug)]
pub struct Page {
    pub window: Window,
    pub document: Document,
    scroll: ScrollHub,
    scroll_subscriptions: Vec<Subscription>,
    listeners: Vec<EventListener>,
    observers: Vec<ObservedSet>,
    loops: Vec<FrameLoop>,
    nodes: CreatedNodes<Element>,
}

impl Page {
    pub fn attach() -> Result<Self, DomError> {
        let window = dom::window()?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        let scroll = ScrollHub::attach(&window)?;
        Ok(Self {
            window,
            document,
            scroll,
            scroll_subscriptions: Vec::new(),
            listeners: Vec::new(),
            observers: Vec::new(),
            loops: Vec::new(),
            nodes: CreatedNodes::new(),
        })
    }

    pub fn listen(&mut self, listener: EventListener) {
        self.listeners.push(listener);
    }

    pub fn observe(&mut self, observed: ObservedSet) {
        self.observers.push(observed);
    }

    pub fn animate(&mut self, frame_loop: FrameLoop) {
        self.loops.push(frame_loop);
    }

    /// Remove `node` from the document when the page is torn down.
    pub fn adopt(&mut self, node: impl Into<Element>) {
        self.nodes.adopt(node.into());
    }

    /// Run `callback` on every window scroll until the page is torn down.
    pub fn on_scroll<C>(&mut self, callback: C)
    where
        C: FnMut(&ScrollTick) + 'static,
    {
        let subscription = self.scroll.subscribe(callback);
        self.scroll_subscriptions.push(subscription);
    }

    /// Installed handles, for the boot summary.
    pub fn handle_count(&self) -> usize {
        self.listeners.len()
            + self.observers.len()
            + self.loops.len()
            + self.scroll_subscriptions.len()
            + self.nodes.len()
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        for subscription in self.scroll_subscriptions.drain(..) {
            self.scroll.unsubscribe(subscription);
        }
        for frame_loop in &self.loops {
            frame_loop.stop();
        }
        let removed = self.nodes.detach_all();
        log::debug!(
            "page detached: {} listeners, {} observers, {} loops, {removed} nodes",
            self.listeners.len(),
            self.observers.len(),
            self.loops.len()
        );
    }
}
