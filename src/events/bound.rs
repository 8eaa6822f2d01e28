//! # Bound event: one instance's subscription list for one event.
//!
//! A [`BoundEvent`] is what resolving an [`Event`](crate::Event) through a
//! [`Subject`] yields: a callable handle that owns the ordered handler list
//! for exactly one (descriptor, instance) pair.
//!
//! ## What firing guarantees
//! - The body runs first, with exclusive access to the subject state, as if
//!   the undecorated method had been called directly.
//! - Handlers run after the body returns, in insertion order, each as
//!   `handler(&subject, &args)`.
//! - A body error propagates before any handler runs; the first handler
//!   error propagates before any later handler runs. Effects of handlers
//!   that already ran stand.
//!
//! ## What firing does **not** guarantee
//! - No isolation between handlers and no rollback.
//! - No stable view of the handler list across one firing: iteration is
//!   **live**. A handler that connects or disconnects handlers mid-firing
//!   changes what the remainder of that same firing observes.
//!
//! ## Reentrancy
//! The exclusive borrow of subject state is released before handlers run,
//! so a handler may re-fire this event, fire others, or mutate
//! subscriptions. Recursion simply uses the list's state at each respective
//! invocation time.

use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::error::EventError;
use crate::events::descriptor::EventBody;
use crate::handlers::Handler;
use crate::subject::{Subject, SubjectCore};

struct BoundCore<S, A> {
    name: &'static str,
    body: EventBody<S, A>,
    subject: Weak<SubjectCore<S>>,
    handlers: RefCell<Vec<Handler<S, A>>>,
}

/// The per-instance handle for one event: callable, and a mutable ordered
/// collection of handlers.
///
/// Clones share identity — they are the same binding, compare equal, and
/// see the same handler list. The subject reference is weak: a binding (or
/// a user-held clone of one) never keeps its instance alive, and firing
/// after the instance is gone yields [`EventError::SubjectDropped`].
pub struct BoundEvent<S, A> {
    core: Rc<BoundCore<S, A>>,
}

impl<S: 'static, A: 'static> BoundEvent<S, A> {
    pub(crate) fn new(
        name: &'static str,
        body: EventBody<S, A>,
        subject: Weak<SubjectCore<S>>,
    ) -> Self {
        BoundEvent {
            core: Rc::new(BoundCore {
                name,
                body,
                subject,
                handlers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Fires the event: runs the body, then notifies handlers in order.
    ///
    /// The body's success value is discarded — firing is a notification,
    /// not a data-producing call. Errors from the body or from a handler
    /// propagate unchanged; see the module docs for the exact sequencing.
    ///
    /// # Example
    /// ```
    /// use evoke::{Event, EventError, Handler, Subject};
    ///
    /// fn tick(log: &mut Vec<i32>, n: &i32) -> Result<(), EventError> {
    ///     log.push(*n);
    ///     Ok(())
    /// }
    ///
    /// let on_tick = Event::new("on_tick", tick);
    /// let c = Subject::new(Vec::new());
    /// c.event(&on_tick).connect(Handler::from_fn(
    ///     |subject: &Subject<Vec<i32>>, n: &i32| subject.borrow_mut().push(-*n),
    /// ));
    ///
    /// c.event(&on_tick).fire(5)?;
    /// c.event(&on_tick).fire(3)?;
    /// assert_eq!(*c.borrow(), [5, -5, 3, -3]);
    /// # Ok::<(), EventError>(())
    /// ```
    pub fn fire(&self, args: A) -> Result<(), EventError> {
        let core = self
            .core
            .subject
            .upgrade()
            .ok_or(EventError::SubjectDropped {
                event: self.core.name,
            })?;

        (self.core.body)(&mut *core.state.borrow_mut(), &args)?;

        let subject = Subject::from_core(core);
        let mut next = 0;
        loop {
            // Re-consult the live list each step; the clone releases the
            // borrow before the handler runs, so handlers may mutate
            // subscriptions or re-fire without tripping the RefCell.
            let handler = match self.core.handlers.borrow().get(next) {
                Some(h) => h.clone(),
                None => break,
            };
            next += 1;
            handler.call(&subject, &args)?;
        }
        Ok(())
    }

    /// Appends `handler` to the subscription list.
    ///
    /// Duplicates are allowed; each occurrence fires independently, in the
    /// order added. Returns `&self` so connections chain.
    pub fn connect(&self, handler: Handler<S, A>) -> &Self {
        self.core.handlers.borrow_mut().push(handler);
        self
    }

    /// Wraps an infallible closure, connects it, and returns its token.
    ///
    /// Shorthand for `Handler::from_fn` + [`connect`](Self::connect) when
    /// the token is only needed for a later disconnect.
    pub fn connect_fn(&self, f: impl Fn(&Subject<S>, &A) + 'static) -> Handler<S, A> {
        let handler = Handler::from_fn(f);
        self.connect(handler.clone());
        handler
    }

    /// Removes the first occurrence of `handler` from the subscription list.
    ///
    /// Fails with [`EventError::HandlerNotFound`] — leaving the list
    /// untouched — if no occurrence is connected. Removal is by token
    /// identity, never by closure equivalence.
    pub fn disconnect(&self, handler: &Handler<S, A>) -> Result<(), EventError> {
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

    /// Returns `true` if at least one occurrence of `handler` is connected.
    pub fn is_connected(&self, handler: &Handler<S, A>) -> bool {
        self.core.handlers.borrow().iter().any(|h| h.same(handler))
    }

    /// The name of the event this binding was resolved from.
    pub fn name(&self) -> &'static str {
        self.core.name
    }

    /// The subject this binding belongs to, if it is still alive.
    pub fn subject(&self) -> Option<Subject<S>> {
        self.core.subject.upgrade().map(Subject::from_core)
    }

    /// Returns `true` if `self` and `other` are the same binding.
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }
}

impl<S, A> Clone for BoundEvent<S, A> {
    fn clone(&self) -> Self {
        BoundEvent {
            core: Rc::clone(&self.core),
        }
    }
}

impl<S: 'static, A: 'static> PartialEq for BoundEvent<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<S: 'static, A: 'static> Eq for BoundEvent<S, A> {}

impl<S, A> fmt::Debug for BoundEvent<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundEvent")
            .field("name", &self.core.name)
            .field("handlers", &self.core.handlers.borrow().len())
            .finish()
    }
}
