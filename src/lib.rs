#![doc(html_root_url = "https://stearnsc.github.io/rust-future")]

//! A small, executor-neutral asynchronous value library: [`Expected`] and
//! [`Optional`] sum types, a thread-safe one-shot [`Precursor`] cell, and
//! the public [`Future`] / [`Promise`] pair built on top of it.
//!
//! The library neither owns nor schedules a thread pool: whichever thread
//! calls `Promise::set_value` / `set_exception` also drives any
//! continuation registered via `Future::then` / `Future::then_async`,
//! synchronously, on that same thread.

pub mod error;
pub mod expected;
pub mod future;
pub mod join;
mod link;
pub mod optional;
pub mod precursor;

pub use error::{Failure, HandlerPanic};
pub use expected::{AccessError, Expected, RaiseError, Unexpected};
pub use future::{Future, Promise};
pub use optional::{Optional, OptionalAccessError};
pub use precursor::Precursor;
