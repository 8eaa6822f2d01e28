//! # Static events: the observer pattern over free functions.
//!
//! Not every event hangs off an instance. [`StaticEvent`] wraps a free
//! function the way [`Event`](crate::Event) wraps a method: firing runs the
//! function, then notifies handlers with the same arguments. Because there
//! is no instance, there is no descriptor/binding split — a static event
//! carries its single handler list directly.
//!
//! The firing contract is identical to [`BoundEvent`](crate::BoundEvent):
//! body first, handlers in insertion order, fail-fast, live iteration.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::error::EventError;
use crate::handlers::StaticHandler;

/// The free function wrapped by a [`StaticEvent`].
pub type StaticEventBody<A> = fn(&A) -> Result<(), EventError>;

struct StaticCore<A> {
    name: &'static str,
    body: StaticEventBody<A>,
    handlers: RefCell<Vec<StaticHandler<A>>>,
}

/// An event over a free function with arguments `A`.
///
/// Clones share identity and the handler list.
///
/// ### Example
/// ```
/// use evoke::{EventError, StaticEvent, StaticHandler};
///
/// fn announce(msg: &String) -> Result<(), EventError> {
///     println!("{msg}");
///     Ok(())
/// }
///
/// let on_announce = StaticEvent::new("announce", announce);
/// let h = StaticHandler::from_fn(|msg: &String| {
///     assert!(!msg.is_empty());
/// });
/// on_announce.connect(h.clone());
///
/// on_announce.fire("hello".to_string())?;
/// on_announce.disconnect(&h)?;
/// # Ok::<(), EventError>(())
/// ```
pub struct StaticEvent<A> {
    core: Rc<StaticCore<A>>,
}

impl<A: 'static> StaticEvent<A> {
    /// Declares a static event named `name` over the free function `body`.
    pub fn new(name: &'static str, body: StaticEventBody<A>) -> Self {
        StaticEvent {
            core: Rc::new(StaticCore {
                name,
                body,
                handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Fires the event: runs the body, then notifies handlers in order.
    ///
    /// Sequencing and failure behavior match
    /// [`BoundEvent::fire`](crate::BoundEvent::fire): body errors skip all
    /// handlers, the first handler error skips the rest, iteration is live.
    pub fn fire(&self, args: A) -> Result<(), EventError> {
        (self.core.body)(&args)?;

        let mut next = 0;
        loop {
            let handler = match self.core.handlers.borrow().get(next) {
                Some(h) => h.clone(),
                None => break,
            };
            next += 1;
            handler.call(&args)?;
        }
        Ok(())
    }

    /// Appends `handler`; duplicates allowed; returns `&self` for chaining.
    pub fn connect(&self, handler: StaticHandler<A>) -> &Self {
        self.core.handlers.borrow_mut().push(handler);
        self
    }

    /// Wraps an infallible closure, connects it, and returns its token.
    pub fn connect_fn(&self, f: impl Fn(&A) + 'static) -> StaticHandler<A> {
        let handler = StaticHandler::from_fn(f);
        self.connect(handler.clone());
        handler
    }

    /// Removes the first occurrence of `handler` by token identity.
    ///
    /// Fails with [`EventError::HandlerNotFound`] if no occurrence is
    /// connected; the list is left untouched.
    pub fn disconnect(&self, handler: &StaticHandler<A>) -> Result<(), EventError> {
        let mut handlers = self.core.handlers.borrow_mut();
        match handlers.iter().position(|h| h.same(handler)) {
            Some(idx) => {
                handlers.remove(idx);
                Ok(())
            }
            None => Err(EventError::HandlerNotFound {
                event: self.core.name,
            }),
        }
    }

    /// Number of currently connected handler occurrences.
    pub fn handler_count(&self) -> usize {
        self.core.handlers.borrow().len()
    }

    /// The name the event was declared under.
    pub fn name(&self) -> &'static str {
        self.core.name
    }

    /// Returns `true` if `self` and `other` are the same event.
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

impl<A> Clone for StaticEvent<A> {
    fn clone(&self) -> Self {
        StaticEvent {
            core: Rc::clone(&self.core),
        }
    }
}

impl<A> fmt::Debug for StaticEvent<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticEvent")
            .field("name", &self.core.name)
            .field("handlers", &self.core.handlers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn ok(_args: &u32) -> Result<(), EventError> {
        Ok(())
    }

    fn broken(_args: &u32) -> Result<(), EventError> {
        Err(EventError::aborted("no"))
    }

    #[test]
    fn test_handlers_fire_in_order() {
        let ev = StaticEvent::new("ev", ok);
        let log = Rc::new(RefCell::new(Vec::new()));
        let (a, b) = (Rc::clone(&log), Rc::clone(&log));
        ev.connect_fn(move |n| a.borrow_mut().push(*n));
        ev.connect_fn(move |n| b.borrow_mut().push(n + 1));

        ev.fire(10).unwrap();
        assert_eq!(*log.borrow(), [10, 11]);
    }

    #[test]
    fn test_clone_shares_handler_list() {
        let ev = StaticEvent::new("ev", ok);
        let other = ev.clone();
        ev.connect_fn(|_| {});
        assert!(ev.same(&other));
        assert_eq!(other.handler_count(), 1);
    }

    #[test]
    fn test_body_error_skips_handlers() {
        let ev = StaticEvent::new("ev", broken);
        let hit = Rc::new(RefCell::new(false));
        let hit_in = Rc::clone(&hit);
        ev.connect_fn(move |_| *hit_in.borrow_mut() = true);

        assert!(ev.fire(1).is_err());
        assert!(!*hit.borrow());
    }

    #[test]
    fn test_disconnect_by_identity() {
        let ev = StaticEvent::new("ev", ok);
        let h = ev.connect_fn(|_| {});
        ev.connect(h.clone());
        assert_eq!(ev.handler_count(), 2);

        ev.disconnect(&h).unwrap();
        assert_eq!(ev.handler_count(), 1);
        ev.disconnect(&h).unwrap();
        let err = ev.disconnect(&h).unwrap_err();
        assert_eq!(err.as_label(), "handler_not_found");
    }
}
