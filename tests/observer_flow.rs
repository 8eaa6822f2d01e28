//! End-to-end workflows: declaration, subscription, firing, and lifetimes.

use std::cell::RefCell;
use std::rc::Rc;

use evoke::{Event, EventError, Handler, Subject};

struct Counter {
    log: Vec<i32>,
}

fn on_tick_body(counter: &mut Counter, n: &i32) -> Result<(), EventError> {
    counter.log.push(*n);
    Ok(())
}

fn counter() -> Subject<Counter> {
    Subject::new(Counter { log: Vec::new() })
}

#[test]
fn counter_scenario() {
    let on_tick = Event::new("on_tick", on_tick_body);
    let c = counter();
    c.event(&on_tick)
        .connect_fn(|subject, n| subject.borrow_mut().log.push(-*n));

    c.event(&on_tick).fire(5).unwrap();
    assert_eq!(c.borrow().log, [5, -5]);

    c.event(&on_tick).fire(3).unwrap();
    assert_eq!(c.borrow().log, [5, -5, 3, -3]);
}

#[test]
fn subscriptions_never_cross_instances() {
    let on_tick = Event::new("on_tick", on_tick_body);
    let c1 = counter();
    let c2 = counter();

    let fired = Rc::new(RefCell::new(0u32));
    let fired_in = Rc::clone(&fired);
    c1.event(&on_tick)
        .connect_fn(move |_, _| *fired_in.borrow_mut() += 1);

    c2.event(&on_tick).fire(1).unwrap();
    assert_eq!(c2.borrow().log, [1]);
    assert_eq!(*fired.borrow(), 0);

    c1.event(&on_tick).fire(2).unwrap();
    assert_eq!(*fired.borrow(), 1);
}

#[test]
fn bindings_are_identity_stable_per_instance() {
    let on_tick = Event::new("on_tick", on_tick_body);
    let a = counter();
    let b = counter();

    assert!(a.event(&on_tick).same(&a.event(&on_tick)));
    assert!(!a.event(&on_tick).same(&b.event(&on_tick)));
}

#[test]
fn handlers_see_exact_arguments() {
    let shout = Event::new(
        "shout",
        |state: &mut Vec<String>, args: &(String, usize)| {
            state.push(args.0.repeat(args.1));
            Ok(())
        },
    );
    let subject = Subject::new(Vec::new());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in = Rc::clone(&seen);
    subject
        .event(&shout)
        .connect_fn(move |_, args: &(String, usize)| seen_in.borrow_mut().push(args.clone()));

    subject.event(&shout).fire(("ha".to_string(), 3)).unwrap();
    assert_eq!(*subject.borrow(), ["hahaha".to_string()]);
    assert_eq!(*seen.borrow(), [("ha".to_string(), 3)]);
}

#[test]
fn class_level_access_bypasses_handlers() {
    let on_tick = Event::new("on_tick", on_tick_body);
    assert_eq!(on_tick.name(), "on_tick");

    // Calling the undecorated body directly: no subject, no handlers.
    let mut raw = Counter { log: Vec::new() };
    (on_tick.body())(&mut raw, &9).unwrap();
    assert_eq!(raw.log, [9]);
}

#[test]
fn disconnect_missing_leaves_list_intact() {
    let on_tick = Event::new("on_tick", on_tick_body);
    let c = counter();
    let bound = c.event(&on_tick);
    let kept = bound.connect_fn(|_, _| {});

    let absent = Handler::from_fn(|_: &Subject<Counter>, _: &i32| {});
    assert!(bound.disconnect(&absent).is_err());
    assert_eq!(bound.handler_count(), 1);
    assert!(bound.is_connected(&kept));
}

#[test]
fn bound_events_do_not_keep_subjects_alive() {
    let on_tick = Event::new("on_tick", on_tick_body);
    let c = counter();
    let weak = c.downgrade();
    let bound = c.event(&on_tick);
    bound.connect_fn(|_, _| {});

    // The binding (cached on the subject) plus our clone must not extend
    // the instance's lifetime.
    drop(c);
    assert!(weak.upgrade().is_none());

    let err = bound.fire(1).unwrap_err();
    assert!(matches!(err, EventError::SubjectDropped { event: "on_tick" }));
}

#[test]
fn handler_failure_aborts_remaining_notifications() {
    let on_tick = Event::new("on_tick", on_tick_body);
    let c = counter();
    let bound = c.event(&on_tick);

    bound.connect_fn(|subject, _| subject.borrow_mut().log.push(10));
    bound.connect(Handler::new(|_: &Subject<Counter>, _: &i32| {
        Err(EventError::aborted("stop right there"))
    }));
    bound.connect_fn(|subject, _| subject.borrow_mut().log.push(30));

    let err = bound.fire(1).unwrap_err();
    assert_eq!(err.to_string(), "event aborted: stop right there");
    // Body and first handler ran; third handler never did.
    assert_eq!(c.borrow().log, [1, 10]);
}
