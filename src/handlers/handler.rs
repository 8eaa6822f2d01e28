//! # Handler tokens: identity-carrying callables.
//!
//! A handler is an ordinary closure wrapped in a cheap, cloneable token.
//! The token is what gets connected to an event, and — crucially — it is
//! also the *identity* used for disconnection: two tokens compare equal
//! exactly when they are clones of one another, never because their
//! closures look alike.
//!
//! ## Rules
//! - Keep a clone of the token if you intend to disconnect later.
//! - Cloning a token does not clone the closure; all clones share it.
//! - Connecting the same token twice is allowed and fires it twice.
//!
//! ## Fallibility
//! Handlers return `Result<(), EventError>`. Most handlers never fail;
//! [`Handler::from_fn`] wraps an infallible closure so the common case
//! stays terse. A failing handler aborts the remainder of its firing.

use std::fmt;
use std::rc::Rc;

use crate::error::EventError;
use crate::subject::Subject;

type HandlerFn<S, A> = dyn Fn(&Subject<S>, &A) -> Result<(), EventError>;
type StaticHandlerFn<A> = dyn Fn(&A) -> Result<(), EventError>;

/// A subscribed callable for a [`BoundEvent`](crate::BoundEvent).
///
/// Invoked as `handler(&subject, &args)` after the event body runs: the
/// subject is passed explicitly so handlers, which are not methods of the
/// subject type, can still reach the instance that fired.
///
/// ### Identity
/// Equality is pointer identity of the shared closure. Clones of one
/// `Handler` are interchangeable for [`disconnect`](crate::BoundEvent::disconnect);
/// two handlers built from textually identical closures are not.
///
/// ### Lifetime hazard
/// A handler that captures a strong [`Subject`] clone of the instance it is
/// connected to forms a reference cycle and leaks both. Capture a
/// [`WeakSubject`](crate::WeakSubject) instead, or rely on the subject
/// argument delivered at call time.
pub struct Handler<S, A> {
    call: Rc<HandlerFn<S, A>>,
}

impl<S, A> Handler<S, A> {
    /// Wraps a fallible closure into a handler token.
    pub fn new(f: impl Fn(&Subject<S>, &A) -> Result<(), EventError> + 'static) -> Self {
        Handler { call: Rc::new(f) }
    }

    /// Wraps an infallible closure into a handler token.
    ///
    /// # Example
    /// ```
    /// use evoke::{Handler, Subject};
    ///
    /// let seen = Handler::from_fn(|_subject: &Subject<Vec<u32>>, n: &u32| {
    ///     println!("observed {n}");
    /// });
    /// assert_eq!(seen, seen.clone());
    /// ```
    pub fn from_fn(f: impl Fn(&Subject<S>, &A) + 'static) -> Self {
        Handler {
            call: Rc::new(move |subject, args| {
                f(subject, args);
                Ok(())
            }),
        }
    }

    /// Invokes the underlying closure.
    pub(crate) fn call(&self, subject: &Subject<S>, args: &A) -> Result<(), EventError> {
        (self.call)(subject, args)
    }

    /// Returns `true` if `self` and `other` are clones of the same token.
    pub fn same(&self, other: &Self) -> bool {
        // Compare data pointers only; vtable addresses are not stable
        // enough to take part in identity.
        std::ptr::eq(
            Rc::as_ptr(&self.call) as *const u8,
            Rc::as_ptr(&other.call) as *const u8,
        )
    }
}

impl<S, A> Clone for Handler<S, A> {
    fn clone(&self) -> Self {
        Handler {
            call: Rc::clone(&self.call),
        }
    }
}

impl<S, A> PartialEq for Handler<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<S, A> Eq for Handler<S, A> {}

impl<S, A> fmt::Debug for Handler<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("ptr", &Rc::as_ptr(&self.call))
            .finish()
    }
}

/// A subscribed callable for a [`StaticEvent`](crate::StaticEvent).
///
/// Identical to [`Handler`] except that there is no subject: the callable
/// receives only the firing arguments.
pub struct StaticHandler<A> {
    call: Rc<StaticHandlerFn<A>>,
}

impl<A> StaticHandler<A> {
    /// Wraps a fallible closure into a handler token.
    pub fn new(f: impl Fn(&A) -> Result<(), EventError> + 'static) -> Self {
        StaticHandler { call: Rc::new(f) }
    }

    /// Wraps an infallible closure into a handler token.
    pub fn from_fn(f: impl Fn(&A) + 'static) -> Self {
        StaticHandler {
            call: Rc::new(move |args| {
                f(args);
                Ok(())
            }),
        }
    }

    pub(crate) fn call(&self, args: &A) -> Result<(), EventError> {
        (self.call)(args)
    }

    /// Returns `true` if `self` and `other` are clones of the same token.
    pub fn same(&self, other: &Self) -> bool {
        std::ptr::eq(
            Rc::as_ptr(&self.call) as *const u8,
            Rc::as_ptr(&other.call) as *const u8,
        )
    }
}

impl<A> Clone for StaticHandler<A> {
    fn clone(&self) -> Self {
        StaticHandler {
            call: Rc::clone(&self.call),
        }
    }
}

impl<A> PartialEq for StaticHandler<A> {
    fn eq(&self, other: &Self) -> bool {
        self.same(other)
    }
}

impl<A> Eq for StaticHandler<A> {}

impl<A> fmt::Debug for StaticHandler<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticHandler")
            .field("ptr", &Rc::as_ptr(&self.call))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_identity() {
        let h: Handler<(), u32> = Handler::from_fn(|_, _| {});
        let dup = h.clone();
        assert!(h.same(&dup));
        assert_eq!(h, dup);
    }

    #[test]
    fn test_identical_source_distinct_identity() {
        let a: Handler<(), u32> = Handler::from_fn(|_, _| {});
        let b: Handler<(), u32> = Handler::from_fn(|_, _| {});
        assert!(!a.same(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn test_static_handler_identity() {
        let a: StaticHandler<u32> = StaticHandler::from_fn(|_| {});
        let b = a.clone();
        assert_eq!(a, b);
        assert_ne!(a, StaticHandler::from_fn(|_| {}));
    }

    #[test]
    fn test_fallible_handler_surfaces_error() {
        let h: StaticHandler<u32> =
            StaticHandler::new(|_| Err(EventError::aborted("nope")));
        let err = h.call(&1).unwrap_err();
        assert_eq!(err.as_label(), "aborted");
    }
}
