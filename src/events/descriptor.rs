//! # Event descriptor: one per decorated method.
//!
//! [`Event<S, A>`] is the type-level record of "this method is an event".
//! It is created once — typically alongside the subject type, the way a
//! decorator runs once at class-definition time — and shared by every
//! instance. The descriptor itself never holds subscriptions; it only
//! resolves to a per-instance [`BoundEvent`] when accessed through a
//! [`Subject`].
//!
//! ## Signature preservation
//! The descriptor stores the original function as a plain `fn` pointer, so
//! "class-level" access ([`Event::name`], [`Event::body`]) hands back the
//! undecorated function with its exact parameter and return types. Nothing
//! about the wrapping changes what callers of the body see.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::EventError;
use crate::events::BoundEvent;
use crate::subject::Subject;

/// Global counter handing each descriptor a unique identity.
static NEXT_EVENT_ID: AtomicU64 = AtomicU64::new(0);

/// The original method body wrapped by an [`Event`].
///
/// Receives exclusive access to the subject state plus the borrowed firing
/// arguments. Returning an error aborts the firing before any handler runs.
pub type EventBody<S, A> = fn(&mut S, &A) -> Result<(), EventError>;

/// An event declared over a method of subject type `S` with arguments `A`.
///
/// Immutable after construction and shared across all instances: the
/// per-instance state (the handler list) lives in the [`BoundEvent`]
/// resolved via [`Event::bind`] or [`Subject::event`].
///
/// `Event` is `Send + Sync` regardless of `S` — it carries only a function
/// pointer and metadata — so descriptors can live in statics.
///
/// ### Example
/// ```
/// use evoke::{Event, EventError, Subject};
///
/// struct Counter { log: Vec<i32> }
///
/// fn tick(counter: &mut Counter, n: &i32) -> Result<(), EventError> {
///     counter.log.push(*n);
///     Ok(())
/// }
///
/// let on_tick = Event::new("on_tick", tick);
/// assert_eq!(on_tick.name(), "on_tick");
///
/// let c = Subject::new(Counter { log: Vec::new() });
/// c.event(&on_tick).fire(5)?;
/// assert_eq!(c.borrow().log, [5]);
/// # Ok::<(), EventError>(())
/// ```
pub struct Event<S, A> {
    id: u64,
    name: &'static str,
    body: EventBody<S, A>,
}

// Manual impls: the derives would demand `S: Clone` etc., but an `Event`
// holds only a fn pointer and metadata.
impl<S, A> Clone for Event<S, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, A> Copy for Event<S, A> {}

impl<S, A> std::fmt::Debug for Event<S, A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Event")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

impl<S: 'static, A: 'static> Event<S, A> {
    /// Declares an event named `name` over the method `body`.
    ///
    /// `name` is the method's original name; it shows up in error values
    /// and diagnostics.
    pub fn new(name: &'static str, body: EventBody<S, A>) -> Self {
        Event {
            id: NEXT_EVENT_ID.fetch_add(1, Ordering::Relaxed),
            name,
            body,
        }
    }

    /// The name the event was declared under.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The undecorated method body.
    ///
    /// This is class-level access: no instance, no handlers, just the
    /// original function for introspection or direct invocation.
    pub fn body(&self) -> EventBody<S, A> {
        self.body
    }

    /// Resolves this event on `subject`.
    ///
    /// Equivalent to [`Subject::event`]; both directions read naturally in
    /// different call sites.
    pub fn bind(&self, subject: &Subject<S>) -> BoundEvent<S, A> {
        subject.event(self)
    }

    pub(crate) fn id(&self) -> u64 {
        self.id
    }
}
