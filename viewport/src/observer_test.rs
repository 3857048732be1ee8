use std::cell::RefCell;
use std::rc::Rc;

use super::*;

fn recorder() -> (Rc<RefCell<Vec<i32>>>, impl FnMut(&i32) + 'static) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    (seen, move |v: &i32| sink.borrow_mut().push(*v))
}

#[test]
fn emit_reaches_all_subscribers() {
    let mut obs = Observer::new();
    let (seen, cb) = recorder();
    obs.subscribe_all(cb);
    assert_eq!(obs.emit(&7), 1);
    assert_eq!(*seen.borrow(), vec![7]);
}

#[test]
fn predicate_filters_events() {
    let mut obs = Observer::new();
    let (seen, cb) = recorder();
    obs.subscribe(|v: &i32| *v % 2 == 0, cb);
    obs.emit(&1);
    obs.emit(&2);
    obs.emit(&3);
    obs.emit(&4);
    assert_eq!(*seen.borrow(), vec![2, 4]);
}

#[test]
fn callbacks_run_in_registration_order() {
    let order = Rc::new(RefCell::new(Vec::new()));
    let mut obs: Observer<()> = Observer::new();
    for tag in ["first", "second", "third"] {
        let order = Rc::clone(&order);
        obs.subscribe_all(move |()| order.borrow_mut().push(tag));
    }
    obs.emit(&());
    assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
}

#[test]
fn unsubscribe_stops_delivery() {
    let mut obs = Observer::new();
    let (seen, cb) = recorder();
    let sub = obs.subscribe_all(cb);
    obs.emit(&1);
    assert!(obs.unsubscribe(sub));
    obs.emit(&2);
    assert_eq!(*seen.borrow(), vec![1]);
    assert!(obs.is_empty());
}

#[test]
fn unsubscribe_twice_reports_false() {
    let mut obs: Observer<i32> = Observer::new();
    let sub = obs.subscribe_all(|_| {});
    assert!(obs.unsubscribe(sub));
    assert!(!obs.unsubscribe(sub));
}

#[test]
fn unsubscribe_leaves_other_listeners() {
    let mut obs = Observer::new();
    let (a_seen, a) = recorder();
    let (b_seen, b) = recorder();
    let sub_a = obs.subscribe_all(a);
    obs.subscribe_all(b);
    obs.unsubscribe(sub_a);
    obs.emit(&5);
    assert!(a_seen.borrow().is_empty());
    assert_eq!(*b_seen.borrow(), vec![5]);
    assert_eq!(obs.len(), 1);
}

#[test]
fn subscriptions_are_distinct() {
    let mut obs: Observer<i32> = Observer::new();
    let a = obs.subscribe_all(|_| {});
    let b = obs.subscribe_all(|_| {});
    assert_ne!(a, b);
}

#[test]
fn clear_removes_everything() {
    let mut obs: Observer<i32> = Observer::new();
    obs.subscribe_all(|_| {});
    obs.subscribe_all(|_| {});
    obs.clear();
    assert_eq!(obs.emit(&1), 0);
}
