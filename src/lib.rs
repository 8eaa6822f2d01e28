//! # evoke
//!
//! **Evoke** is a small synchronous observer-pattern library for Rust.
//!
//! It turns an ordinary method into an *event*: firing the event runs the
//! method body and then notifies a per-instance list of subscribed
//! handlers, passing the originating instance and the call arguments. The
//! crate is deliberately single-threaded and lock-free — firing is plain
//! sequential function calls on the caller's stack.
//!
//! ## Architecture
//! ```text
//!   Event<S, A>            one per decorated method, immutable,
//!   (descriptor)           shared by every instance of S
//!        │
//!        │  Subject::event(&descriptor)   (lazy, cached per instance)
//!        ▼
//!   BoundEvent<S, A>       one per (descriptor, instance) pair
//!        │                 owns the ordered handler list
//!        │
//!        │  fire(args)
//!        ▼
//!   body(&mut state, &args) ──► handler1(&subject, &args)
//!                           ──► handler2(&subject, &args)
//!                           ──► ...            (insertion order,
//!                                               fail-fast, live list)
//! ```
//!
//! ## Features
//! | Area              | Description                                             | Key types                          |
//! |-------------------|---------------------------------------------------------|------------------------------------|
//! | **Declaration**   | Declare events over methods or free functions.          | [`Event`], [`StaticEvent`]         |
//! | **Subscription**  | Per-instance connect/disconnect with identity tokens.   | [`BoundEvent`], [`Handler`]        |
//! | **Instances**     | Shared single-threaded subject handles, weak-safe.      | [`Subject`], [`WeakSubject`]       |
//! | **Errors**        | Typed errors; user failures pass through unchanged.     | [`EventError`]                     |
//!
//! ## Optional features
//! - `logging`: exports prebuilt `tracing`-backed diagnostic handlers
//!   _(demo/reference only)_.
//!
//! ## Example
//! ```
//! use evoke::{Event, EventError, Handler, Subject};
//!
//! struct Counter { log: Vec<i32> }
//!
//! // The "decorated method": an ordinary function over the subject state.
//! fn tick(counter: &mut Counter, n: &i32) -> Result<(), EventError> {
//!     counter.log.push(*n);
//!     Ok(())
//! }
//!
//! // Declared once, shared by every Counter instance.
//! let on_tick = Event::new("on_tick", tick);
//!
//! let c = Subject::new(Counter { log: Vec::new() });
//! let mirror = Handler::from_fn(|subject: &Subject<Counter>, n: &i32| {
//!     subject.borrow_mut().log.push(-*n);
//! });
//! c.event(&on_tick).connect(mirror.clone());
//!
//! c.event(&on_tick).fire(5)?;
//! assert_eq!(c.borrow().log, [5, -5]);
//!
//! c.event(&on_tick).disconnect(&mirror)?;
//! c.event(&on_tick).fire(3)?;
//! assert_eq!(c.borrow().log, [5, -5, 3]);
//! # Ok::<(), EventError>(())
//! ```
//!
//! ## Threading
//! The subscription types are `!Send`/`!Send + !Sync` by construction
//! (`Rc`/`RefCell`): concurrent subscribe/unsubscribe/fire is ruled out at
//! compile time rather than guarded by locks, which would change observable
//! behavior under reentrant handlers. Descriptors themselves are
//! `Send + Sync` and can live in statics.

mod error;
mod events;
mod subject;

pub mod handlers;

// ---- Public re-exports ----

pub use error::EventError;
pub use events::{BoundEvent, Event, EventBody, StaticEvent, StaticEventBody};
pub use handlers::{Handler, StaticHandler};
pub use subject::{Subject, WeakSubject};

// Optional: prebuilt tracing-backed diagnostic handlers.
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use handlers::{log_handler, log_static_handler};
