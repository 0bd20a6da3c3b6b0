//! # Console Lifecycle
//!
//! Starting, wiring and stopping the tasks behind the admin console.
//!
//! - [`AdminConsole`] spawns the three stores and the notification actor and hands out one
//!   controller per table.
//! - [`ConsoleConfig`] sizes the channels, sets the notification duration and decides
//!   whether the tables start with the default data.
//! - [`setup_tracing`] installs the log subscriber; call it once, from `main`.
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - the controllers own the store clients and a queue handle each
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Actors clean up** - stores log their final size, the queue aborts pending timers
//! 4. **Await completion** - a panicked task turns into an `Err`
//!
//! Expiry timers hold only weak senders, so a notification still on screen never keeps
//! the queue alive.

pub mod config;
pub mod console;
pub mod tracing;

pub use config::*;
pub use console::*;
pub use self::tracing::*;
