//! Nodes a page inserted into the document, removed again on teardown.

#[cfg(test)]
#[path = "created_nodes_test.rs"]
mod created_nodes_test;

/// Something that can take itself out of the document.
pub trait Detach {
    fn detach(&self);
}

#[cfg(feature = "hydrate")]
impl Detach for web_sys::Element {
    fn detach(&self) {
        self.remove();
    }
}

/// Owns inserted nodes; dropping it detaches them, newest first.
#[derive(Debug)]
pub struct CreatedNodes<N: Detach> {
    nodes: Vec<N>,
}

impl<N: Detach> CreatedNodes<N> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    pub fn adopt(&mut self, node: N) {
        self.nodes.push(node);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Detach every adopted node. Returns how many were removed.
    pub fn detach_all(&mut self) -> usize {
        let count = self.nodes.len();
        while let Some(node) = self.nodes.pop() {
            node.detach();
        }
        count
    }
}

impl<N: Detach> Default for CreatedNodes<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Detach> Drop for CreatedNodes<N> {
    fn drop(&mut self) {
        self.detach_all();
    }
}
