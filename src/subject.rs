//! # Subject: the instance handle events bind to.
//!
//! [`Subject<S>`] wraps user state `S` in a shared, single-threaded handle.
//! It plays the role of "the instance" in the observer pattern: event
//! descriptors are resolved *through* a subject, and the subject owns the
//! per-instance cache of resolved [`BoundEvent`]s.
//!
//! ## Architecture
//! ```text
//!   Event<S, A>  (one per decorated method, shared by all instances)
//!        │ bind / Subject::event
//!        ▼
//!   Subject<S> ── bindings: { descriptor id ─► BoundEvent } (per instance)
//!        ▲                                          │
//!        └────────────── Weak ─────────────────────┘
//! ```
//!
//! ## Rules
//! - Cloning a `Subject` clones the *handle*, not the state: clones are the
//!   same instance and resolve to the same bound events.
//! - The binding cache is scoped to the instance, never the type, so
//!   subscriptions on one subject cannot leak to another.
//! - Resolving an event never touches handler lists; a freshly created
//!   binding starts empty.
//! - Bound events reference their subject weakly; dropping the last
//!   `Subject` clone drops the state and the cache with it.

use std::any::Any;
use std::cell::{Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::events::{BoundEvent, Event};

/// Shared per-instance storage: the user state plus the binding cache.
pub(crate) struct SubjectCore<S> {
    pub(crate) state: RefCell<S>,
    bindings: RefCell<HashMap<u64, Box<dyn Any>>>,
}

/// A shared handle to one instance of user state `S`.
///
/// All event resolution goes through a subject. Identity is pointer
/// identity: `Clone` produces another handle to the same instance, and
/// [`Subject::same`] tells two handles to one instance apart from handles
/// to two different instances carrying equal state.
///
/// ### Example
/// ```
/// use evoke::Subject;
///
/// let a = Subject::new(vec![1u32]);
/// let b = a.clone();
/// let c = Subject::new(vec![1u32]);
///
/// assert!(a.same(&b));
/// assert!(!a.same(&c));
/// ```
pub struct Subject<S> {
    core: Rc<SubjectCore<S>>,
}

impl<S: 'static> Subject<S> {
    /// Wraps `state` in a fresh subject with an empty binding cache.
    pub fn new(state: S) -> Self {
        Subject {
            core: Rc::new(SubjectCore {
                state: RefCell::new(state),
                bindings: RefCell::new(HashMap::new()),
            }),
        }
    }

    /// Immutably borrows the subject state.
    ///
    /// Panics if the state is currently borrowed mutably — which only
    /// happens inside an event body, where the state is exclusively held.
    pub fn borrow(&self) -> Ref<'_, S> {
        self.core.state.borrow()
    }

    /// Mutably borrows the subject state.
    pub fn borrow_mut(&self) -> RefMut<'_, S> {
        self.core.state.borrow_mut()
    }

    /// Resolves `event` on this subject, creating and caching the
    /// [`BoundEvent`] on first access.
    ///
    /// Repeated calls return the identical binding (clones of one shared
    /// handle). Resolution has no side effect beyond populating the cache:
    /// no handler runs, and a new binding starts with zero handlers.
    pub fn event<A: 'static>(&self, event: &Event<S, A>) -> BoundEvent<S, A> {
        let mut bindings = self.core.bindings.borrow_mut();
        if let Some(slot) = bindings.get(&event.id()) {
            if let Some(bound) = slot.downcast_ref::<BoundEvent<S, A>>() {
                return bound.clone();
            }
        }
        let bound = BoundEvent::new(event.name(), event.body(), Rc::downgrade(&self.core));
        bindings.insert(event.id(), Box::new(bound.clone()));
        bound
    }

    /// Returns `true` if `self` and `other` are handles to the same instance.
    pub fn same(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.core, &other.core)
    }

    /// Downgrades to a non-owning handle.
    pub fn downgrade(&self) -> WeakSubject<S> {
        WeakSubject {
            core: Rc::downgrade(&self.core),
        }
    }

    pub(crate) fn from_core(core: Rc<SubjectCore<S>>) -> Self {
        Subject { core }
    }
}

impl<S> Clone for Subject<S> {
    fn clone(&self) -> Self {
        Subject {
            core: Rc::clone(&self.core),
        }
    }
}

impl<S: fmt::Debug> fmt::Debug for Subject<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subject")
            .field("state", &self.core.state)
            .finish()
    }
}

/// A non-owning counterpart of [`Subject`].
///
/// Useful inside handlers that must reference their own subject without
/// forming a reference cycle through the handler list.
pub struct WeakSubject<S> {
    core: Weak<SubjectCore<S>>,
}

impl<S: 'static> WeakSubject<S> {
    /// Attempts to recover a strong handle; `None` once the instance is gone.
    pub fn upgrade(&self) -> Option<Subject<S>> {
        self.core.upgrade().map(Subject::from_core)
    }
}

impl<S> Clone for WeakSubject<S> {
    fn clone(&self) -> Self {
        WeakSubject {
            core: Weak::clone(&self.core),
        }
    }
}

impl<S> fmt::Debug for WeakSubject<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WeakSubject")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EventError;

    fn noop(_state: &mut u32, _args: &u8) -> Result<(), EventError> {
        Ok(())
    }

    #[test]
    fn test_clone_is_same_instance() {
        let a = Subject::new(7u32);
        let b = a.clone();
        assert!(a.same(&b));
        *b.borrow_mut() += 1;
        assert_eq!(*a.borrow(), 8);
    }

    #[test]
    fn test_distinct_subjects_differ() {
        let a = Subject::new(0u32);
        let b = Subject::new(0u32);
        assert!(!a.same(&b));
    }

    #[test]
    fn test_event_resolution_is_identity_stable() {
        let ev = Event::new("bump", noop);
        let subject = Subject::new(0u32);
        let first = subject.event(&ev);
        let second = subject.event(&ev);
        assert!(first.same(&second));
    }

    #[test]
    fn test_resolution_does_not_touch_handlers() {
        let ev = Event::new("bump", noop);
        let subject = Subject::new(0u32);
        let bound = subject.event(&ev);
        bound.connect(crate::Handler::from_fn(|_, _| {}));
        // A second resolution must return the same list, unmodified.
        assert_eq!(subject.event(&ev).handler_count(), 1);
    }

    #[test]
    fn test_separate_descriptors_get_separate_bindings() {
        let tick = Event::new("tick", noop);
        let tock = Event::new("tock", noop);
        let subject = Subject::new(0u32);
        assert!(!subject.event(&tick).same(&subject.event(&tock)));
    }

    #[test]
    fn test_weak_subject_dies_with_instance() {
        let subject = Subject::new(1u32);
        let weak = subject.downgrade();
        assert!(weak.upgrade().is_some());
        drop(subject);
        assert!(weak.upgrade().is_none());
    }
}
