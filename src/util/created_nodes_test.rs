use std::cell::RefCell;
use std::rc::Rc;

use super::*;

struct Node {
    name: &'static str,
    removed: Rc<RefCell<Vec<&'static str>>>,
}

impl Detach for Node {
    fn detach(&self) {
        self.removed.borrow_mut().push(self.name);
    }
}

fn node(name: &'static str, removed: &Rc<RefCell<Vec<&'static str>>>) -> Node {
    Node { name, removed: Rc::clone(removed) }
}

#[test]
fn drop_detaches_newest_first() {
    let removed = Rc::new(RefCell::new(Vec::new()));
    {
        let mut nodes = CreatedNodes::new();
        nodes.adopt(node("style", &removed));
        nodes.adopt(node("mobile-menu", &removed));
        nodes.adopt(node("position-indicator", &removed));
        assert_eq!(nodes.len(), 3);
        assert!(removed.borrow().is_empty());
    }
    assert_eq!(*removed.borrow(), vec!["position-indicator", "mobile-menu", "style"]);
}

#[test]
fn detach_all_runs_once() {
    let removed = Rc::new(RefCell::new(Vec::new()));
    let mut nodes = CreatedNodes::new();
    nodes.adopt(node("style", &removed));
    assert_eq!(nodes.detach_all(), 1);
    assert!(nodes.is_empty());
    drop(nodes);
    assert_eq!(*removed.borrow(), vec!["style"]);
}
