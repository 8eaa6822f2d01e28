//! # Handler tokens and prebuilt handlers.
//!
//! This module provides the callable tokens events subscribe —
//! [`Handler`] for bound events, [`StaticHandler`] for static events —
//! plus, behind the `logging` feature, ready-made diagnostic handlers.
//!
//! ## Identity
//! Connection and disconnection work on *tokens*, not closures: hold a
//! clone of the token you connected if you ever need to disconnect it.
//! See [`Handler`] for the exact equality rules.

mod handler;

pub use handler::{Handler, StaticHandler};

#[cfg(feature = "logging")]
mod log;

#[cfg(feature = "logging")]
pub use log::{log_handler, log_static_handler};
