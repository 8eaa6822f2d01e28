//! # Event declaration and firing.
//!
//! This module groups the event **data model**: the shared, immutable
//! descriptor and the per-instance, mutable binding it resolves to.
//!
//! ## Contents
//! - [`Event`], [`EventBody`] — one descriptor per decorated method,
//!   shared by every instance.
//! - [`BoundEvent`] — the cached (descriptor, instance) handle: callable
//!   plus handler list.
//! - [`StaticEvent`], [`StaticEventBody`] — the same pattern over free
//!   functions, with no instance in play.
//!
//! ## Quick reference
//! - **Declare** once: `Event::new("on_tick", body)`.
//! - **Resolve** per instance: `subject.event(&on_tick)` (cached, identity
//!   stable).
//! - **Subscribe**: `connect` / `connect_fn`; **unsubscribe**:
//!   `disconnect` (errors if absent).
//! - **Fire**: `fire(args)` — body first, handlers in insertion order.

mod bound;
mod descriptor;
mod static_event;

pub use bound::BoundEvent;
pub use descriptor::{Event, EventBody};
pub use static_event::{StaticEvent, StaticEventBody};
