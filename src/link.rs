use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

use log::warn;

use crate::error::HandlerPanic;
use crate::expected::Expected;
use crate::future::Future;
use crate::precursor::Precursor;

/// The downstream half of a `then()`/`then_async()` continuation: owns the
/// precursor a chained `Future` reads from.
///
/// Unlike the original's `link`, which doubled as both the upstream
/// continuation object *and* the downstream precursor (via multiple
/// inheritance, kept alive through a `weak_from_this()` back-reference to
/// avoid a cycle through a flattened inner future), this keeps the two
/// roles separate: a `Link` only ever holds a strong, one-directional
/// reference to the precursor it produces into. The flattening path below
/// attaches a continuation directly on the *inner* future's own precursor,
/// which needs no reference back to this `Link` at all, so the cycle the
/// original's weak self-reference guards against cannot arise here.
pub(crate) struct Link<O, E> {
    out: Arc<Precursor<O, E>>,
}

impl<O, E> Link<O, E>
where
    O: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    pub(crate) fn new(out: Arc<Precursor<O, E>>) -> Self {
        Link { out }
    }

    pub(crate) fn fulfill(&self, ev: Expected<O, E>) {
        self.out.set_value(ev);
    }
}

/// Runs `handler(value)` under `catch_unwind`, delivering the plain result
/// (or a captured panic, converted into `E`) into `link`. Used by
/// `Future::then`, the synchronous-map registration.
pub(crate) fn invoke_and_deliver<I, O, E, H>(handler: H, value: I, link: &Link<O, E>)
where
    H: FnOnce(I) -> O,
    O: Clone + Send + 'static,
    E: Clone + Send + 'static + From<HandlerPanic>,
{
    match catch_unwind(AssertUnwindSafe(|| handler(value))) {
        Ok(result) => link.fulfill(Expected::value(result)),
        Err(payload) => {
            let panic = HandlerPanic::new(payload);
            warn!("then handler panicked: {}", panic.message());
            link.fulfill(Expected::Error(E::from(panic)));
        }
    }
}

/// Runs `handler(value)` under `catch_unwind`, where `handler` returns a
/// nested `Future<O, E>` rather than a plain `O`. Attaches a continuation
/// directly to that inner future's precursor so its eventual result
/// flows into `link`'s downstream precursor — this is the flattening half
/// of `Future::then_async`, standing in for the original's `is_future`
/// branch of `resolver::resolve`.
pub(crate) fn invoke_and_deliver_async<I, O, E, H>(handler: H, value: I, link: Link<O, E>)
where
    H: FnOnce(I) -> Future<O, E>,
    O: Clone + Send + 'static,
    E: Clone + Send + 'static + From<HandlerPanic>,
{
    match catch_unwind(AssertUnwindSafe(|| handler(value))) {
        Ok(inner) => {
            let out = link.out.clone();
            inner.precursor().set_continuation(Box::new(move |ev| {
                out.set_value(ev);
            }));
        }
        Err(payload) => {
            let panic = HandlerPanic::new(payload);
            warn!("then_async handler panicked: {}", panic.message());
            link.fulfill(Expected::Error(E::from(panic)));
        }
    }
}
