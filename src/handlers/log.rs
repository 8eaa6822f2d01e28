//! # Prebuilt diagnostic handlers for debugging and demos.
//!
//! Enabled via the `logging` feature. These handlers report every firing
//! through [`tracing`] at debug level, so they compose with whatever
//! subscriber the host application installs. The event machinery itself
//! never logs; attach one of these where visibility is wanted.
//!
//! ## Output
//! ```text
//! DEBUG evoke: event fired event="on_tick" args=5
//! ```
//!
//! Not intended for production use — write a purpose-built handler for
//! structured telemetry.

use std::fmt::Debug;

use crate::handlers::{Handler, StaticHandler};

/// Builds a handler that logs each firing of `event` at debug level.
///
/// # Example
/// ```
/// use evoke::{handlers::log_handler, Event, EventError, Subject};
///
/// fn tick(log: &mut Vec<i32>, n: &i32) -> Result<(), EventError> {
///     log.push(*n);
///     Ok(())
/// }
///
/// let on_tick = Event::new("on_tick", tick);
/// let c = Subject::new(Vec::new());
/// c.event(&on_tick).connect(log_handler("on_tick"));
/// c.event(&on_tick).fire(5)?;
/// # Ok::<(), EventError>(())
/// ```
pub fn log_handler<S, A: Debug>(event: &'static str) -> Handler<S, A> {
    Handler::from_fn(move |_subject, args| {
        tracing::debug!(event, args = ?args, "event fired");
    })
}

/// [`log_handler`] for [`StaticEvent`](crate::StaticEvent)s.
pub fn log_static_handler<A: Debug>(event: &'static str) -> StaticHandler<A> {
    StaticHandler::from_fn(move |args| {
        tracing::debug!(event, args = ?args, "event fired");
    })
}
