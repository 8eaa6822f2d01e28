//! Error types used by the event machinery.
//!
//! This module defines a single error enum:
//!
//! - [`EventError`] — errors surfaced by subscription management and by
//!   firing an event.
//!
//! The type provides helper methods (`as_label`, `as_message`) for
//! logging/metrics, plus [`EventError::aborted`] for user code that needs to
//! abort a firing from inside an event body or handler.

use thiserror::Error;

/// # Errors produced by event subscription and firing.
///
/// `HandlerNotFound` and `SubjectDropped` are raised by the machinery itself;
/// `Aborted` is the carrier for failures raised by user-written event bodies
/// and handlers. The firing loop never wraps or rewrites an `Aborted` value —
/// it propagates unchanged to the caller of [`fire`](crate::BoundEvent::fire).
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum EventError {
    /// Attempted to disconnect a handler that is not currently connected.
    ///
    /// The handler list is left untouched.
    #[error("handler is not connected to '{event}'")]
    HandlerNotFound {
        /// Name of the event the disconnect was attempted on.
        event: &'static str,
    },

    /// Fired a bound event whose subject has already been dropped.
    ///
    /// Bound events hold a weak reference to their subject, so a user-held
    /// clone can outlive the instance it was bound to. Firing such a clone
    /// fails fast without invoking the body or any handler.
    #[error("subject of '{event}' has been dropped")]
    SubjectDropped {
        /// Name of the event that was fired.
        event: &'static str,
    },

    /// An event body or handler aborted the firing.
    ///
    /// Remaining handlers are skipped; already-invoked handlers' side effects
    /// stand.
    #[error("event aborted: {error}")]
    Aborted {
        /// The underlying failure message.
        error: String,
    },
}

impl EventError {
    /// Builds an [`EventError::Aborted`] from any printable failure.
    ///
    /// # Example
    /// ```
    /// use evoke::EventError;
    ///
    /// let err = EventError::aborted("downstream refused");
    /// assert_eq!(err.to_string(), "event aborted: downstream refused");
    /// ```
    pub fn aborted(error: impl Into<String>) -> Self {
        EventError::Aborted {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use evoke::EventError;
    ///
    /// let err = EventError::HandlerNotFound { event: "on_tick" };
    /// assert_eq!(err.as_label(), "handler_not_found");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EventError::HandlerNotFound { .. } => "handler_not_found",
            EventError::SubjectDropped { .. } => "subject_dropped",
            EventError::Aborted { .. } => "aborted",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EventError::HandlerNotFound { event } => {
                format!("no such handler on event={event}")
            }
            EventError::SubjectDropped { event } => {
                format!("subject already dropped; event={event}")
            }
            EventError::Aborted { error } => format!("aborted: {error}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_are_stable() {
        assert_eq!(
            EventError::HandlerNotFound { event: "e" }.as_label(),
            "handler_not_found"
        );
        assert_eq!(
            EventError::SubjectDropped { event: "e" }.as_label(),
            "subject_dropped"
        );
        assert_eq!(EventError::aborted("x").as_label(), "aborted");
    }

    #[test]
    fn test_display_includes_event_name() {
        let err = EventError::HandlerNotFound { event: "on_tick" };
        assert_eq!(err.to_string(), "handler is not connected to 'on_tick'");
    }

    #[test]
    fn test_aborted_preserves_message() {
        let err = EventError::aborted(String::from("boom"));
        assert_eq!(err.as_message(), "aborted: boom");
    }
}
