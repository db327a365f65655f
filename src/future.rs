use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Duration;

use crate::error::HandlerPanic;
use crate::expected::{Expected, RaiseError};
use crate::link::{invoke_and_deliver, invoke_and_deliver_async, Link};
use crate::optional::Optional;
use crate::precursor::Precursor;

/// A clonable reader handle on a shared, one-shot [`Precursor`]. Multiple
/// `Future`s may read the same precursor (cheap, via `Arc`), but only one
/// continuation may ever be attached to it.
pub struct Future<T, E> {
    precursor: Arc<Precursor<T, E>>,
}

impl<T, E> Clone for Future<T, E> {
    fn clone(&self) -> Self {
        Future {
            precursor: self.precursor.clone(),
        }
    }
}

impl<T, E> Future<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    pub(crate) fn from_precursor(precursor: Arc<Precursor<T, E>>) -> Self {
        Future { precursor }
    }

    pub(crate) fn precursor(&self) -> &Arc<Precursor<T, E>> {
        &self.precursor
    }

    pub fn is_resolved(&self) -> bool {
        self.precursor.is_resolved()
    }

    /// Chains a synchronous handler onto this future: `handler` maps the
    /// resolved value to a plain `R`.
    ///
    /// Registers the one and only continuation this future's precursor will
    /// ever have; calling `then`/`then_async` a second time on a future
    /// sharing the same precursor panics (`DuplicateContinuation`).
    pub fn then<H, R>(self, handler: H) -> Future<R, E>
    where
        H: FnOnce(T) -> R + Send + 'static,
        R: Clone + Send + 'static,
        E: From<HandlerPanic>,
    {
        let out: Arc<Precursor<R, E>> = Precursor::new();
        let link = Link::new(out.clone());
        self.precursor
            .set_continuation(Box::new(move |ev: Expected<T, E>| match ev {
                Expected::Error(e) => link.fulfill(Expected::Error(e)),
                Expected::Value(v) => invoke_and_deliver(handler, v, &link),
            }));
        Future::from_precursor(out)
    }

    /// Chains an asynchronous handler onto this future: `handler` maps the
    /// resolved value to a `Future<R, E>`, which is then flattened into the
    /// returned future instead of nesting (`Future<Future<R,E>,E>`).
    ///
    /// Same single-continuation rule as `then`: attaching twice on the same
    /// precursor panics (`DuplicateContinuation`).
    pub fn then_async<H, R>(self, handler: H) -> Future<R, E>
    where
        H: FnOnce(T) -> Future<R, E> + Send + 'static,
        R: Clone + Send + 'static,
        E: From<HandlerPanic>,
    {
        let out: Arc<Precursor<R, E>> = Precursor::new();
        let out_for_continuation = out.clone();
        self.precursor
            .set_continuation(Box::new(move |ev: Expected<T, E>| match ev {
                Expected::Error(e) => {
                    let link = Link::new(out_for_continuation);
                    link.fulfill(Expected::Error(e));
                }
                Expected::Value(v) => {
                    let link = Link::new(out_for_continuation);
                    invoke_and_deliver_async(handler, v, link);
                }
            }));
        Future::from_precursor(out)
    }
}

impl<T, E> Future<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static + RaiseError,
{
    /// Blocks until resolved. Raises the held error (transparently
    /// re-raising a captured panic when `E = Box<dyn Any + Send>`).
    pub fn get(&self) -> T {
        self.precursor.get().into_raised()
    }

    /// Waits up to `timeout`. Returns `Optional::None` on expiry; raises
    /// the held error if resolved within the deadline.
    pub fn get_timeout(&self, timeout: Duration) -> Optional<T> {
        self.precursor.get_timeout(timeout)
    }
}

/// A move-only writer handle on a shared [`Precursor`]. Producing a value
/// through `set_value` / `set_exception` is the only way a derived
/// `Future` ever resolves.
pub struct Promise<T, E> {
    precursor: Arc<Precursor<T, E>>,
}

impl<T, E> Promise<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    pub fn new() -> Self {
        Promise {
            precursor: Precursor::new(),
        }
    }

    /// Resolves with a value. Panics if this promise (or another handle on
    /// the same precursor) has already been resolved.
    pub fn set_value(&self, v: T) {
        self.precursor.set_value(Expected::Value(v));
    }

    /// Resolves with an error.
    pub fn set_exception(&self, e: E) {
        self.precursor.set_value(Expected::Error(e));
    }

    /// Returns a new reader handle on this promise's precursor. May be
    /// called before or after resolution, and more than once.
    pub fn get_future(&self) -> Future<T, E> {
        Future::from_precursor(self.precursor.clone())
    }
}

impl<T, E> Default for Promise<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Promise<T, Box<dyn Any + Send>>
where
    T: Clone + Send + 'static,
{
    /// Runs `f` to completion, capturing a panic into the promise's error
    /// slot instead of letting it unwind past the caller — convenience for
    /// producers over the opaque exception-handle error type, where a
    /// captured panic later re-raises transparently through `Future::get`.
    pub fn try_run<F>(f: F) -> Future<T, Box<dyn Any + Send>>
    where
        F: FnOnce() -> T + Send + 'static,
    {
        let promise = Promise::new();
        let future = promise.get_future();
        match catch_unwind(AssertUnwindSafe(f)) {
            Ok(v) => promise.set_value(v),
            Err(payload) => promise.set_exception(payload),
        }
        future
    }
}
