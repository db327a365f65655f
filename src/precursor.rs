use std::sync::{Arc, Condvar, Mutex};
use std::time::{Duration, Instant};

use log::trace;

use crate::expected::{Expected, RaiseError};
use crate::optional::Optional;

type Continuation<T, E> = Box<dyn FnOnce(Expected<T, E>) + Send>;

struct PrecursorState<T, E> {
    value: Optional<Expected<T, E>>,
    continuation: Option<Continuation<T, E>>,
}

/// The shared one-shot cell backing a `Promise`/`Future` pair: a value slot
/// that is set at most once, and at most one attached continuation that
/// fires exactly once when the value arrives.
///
/// A single mutex plus condition variable suffice because resolution
/// happens exactly once per precursor; this is deliberately not a
/// lock-free structure (see `SPEC_FULL.md` §4.3).
pub struct Precursor<T, E> {
    state: Mutex<PrecursorState<T, E>>,
    condvar: Condvar,
}

impl<T, E> Precursor<T, E> {
    pub fn new() -> Arc<Self> {
        Arc::new(Precursor {
            state: Mutex::new(PrecursorState {
                value: Optional::empty(),
                continuation: None,
            }),
            condvar: Condvar::new(),
        })
    }

    pub fn is_resolved(&self) -> bool {
        self.state.lock().unwrap().value.is_some()
    }
}

impl<T, E> Precursor<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
{
    /// Resolves the precursor. Panics if already resolved (`DuplicateSet`);
    /// callers are responsible for calling this at most once per precursor.
    ///
    /// Holds the internal lock for the whole call, including continuation
    /// invocation, mirroring the original's `std::mutex`-guarded
    /// `set_value`.
    pub fn set_value(&self, ev: Expected<T, E>) {
        let mut guard = self.state.lock().unwrap();
        if guard.value.is_some() {
            panic!("Precursor::set_value called twice on the same precursor");
        }
        guard.value = Optional::Some(ev.clone());
        let continuation = guard.continuation.take();
        trace!("precursor resolved");
        self.condvar.notify_all();
        if let Some(c) = continuation {
            trace!("invoking continuation synchronously on resolving thread");
            c(ev);
        }
    }

    /// Attaches the one and only continuation this precursor will ever
    /// have. Panics if a continuation is already attached
    /// (`DuplicateContinuation`). If the precursor is already resolved, the
    /// continuation fires immediately, synchronously, on the calling
    /// thread.
    pub fn set_continuation(&self, c: Continuation<T, E>) {
        let mut guard = self.state.lock().unwrap();
        if guard.continuation.is_some() {
            panic!("Precursor::set_continuation called twice on the same precursor");
        }
        match &guard.value {
            Optional::Some(ev) => {
                let ev = ev.clone();
                drop(guard);
                trace!("invoking continuation synchronously on attaching thread");
                c(ev);
            }
            Optional::None => {
                guard.continuation = Some(c);
            }
        }
    }

    /// Blocks until resolved, then returns the stored expected.
    pub fn get(&self) -> Expected<T, E> {
        let mut guard = self.state.lock().unwrap();
        while guard.value.is_none() {
            guard = self.condvar.wait(guard).unwrap();
        }
        guard.value.value().expect("checked above").clone()
    }
}

impl<T, E> Precursor<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static + RaiseError,
{
    /// Waits up to `timeout` for resolution. Returns `Optional::None` on
    /// expiry; raises the held error (re-raising transparently for the
    /// opaque exception-handle error type) if resolved with an error
    /// within the deadline.
    pub fn get_timeout(&self, timeout: Duration) -> Optional<T> {
        let deadline = Instant::now() + timeout;
        let mut guard = self.state.lock().unwrap();
        loop {
            if guard.value.is_some() {
                break;
            }
            let now = Instant::now();
            if now >= deadline {
                return Optional::None;
            }
            let (g, timeout_result) = self
                .condvar
                .wait_timeout(guard, deadline - now)
                .unwrap();
            guard = g;
            if timeout_result.timed_out() && guard.value.is_none() {
                return Optional::None;
            }
        }
        let ev = guard.value.value().expect("checked above").clone();
        drop(guard);
        Optional::Some(ev.into_raised())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn set_then_get_returns_value() {
        let p: Arc<Precursor<i32, String>> = Precursor::new();
        p.set_value(Expected::value(42));
        assert_eq!(p.get().into_value().unwrap(), 42);
    }

    #[test]
    fn get_before_set_blocks_until_resolved() {
        let p: Arc<Precursor<i32, String>> = Precursor::new();
        let p2 = p.clone();
        let handle = thread::spawn(move || p2.get().into_value().unwrap());
        thread::sleep(Duration::from_millis(20));
        p.set_value(Expected::value(9));
        assert_eq!(handle.join().unwrap(), 9);
    }

    #[test]
    fn continuation_attached_before_resolution_fires_on_resolving_thread() {
        let p: Arc<Precursor<i32, String>> = Precursor::new();
        let fired = Arc::new(AtomicUsize::new(0));
        let fired2 = fired.clone();
        p.set_continuation(Box::new(move |ev| {
            assert_eq!(ev.into_value().unwrap(), 3);
            fired2.fetch_add(1, Ordering::SeqCst);
        }));
        p.set_value(Expected::value(3));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn continuation_attached_after_resolution_fires_immediately() {
        let p: Arc<Precursor<i32, String>> = Precursor::new();
        p.set_value(Expected::value(5));
        let fired = Arc::new(AtomicUsize::new(0));
        let fired2 = fired.clone();
        p.set_continuation(Box::new(move |ev| {
            assert_eq!(ev.into_value().unwrap(), 5);
            fired2.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    #[should_panic(expected = "called twice")]
    fn double_set_value_panics() {
        let p: Arc<Precursor<i32, String>> = Precursor::new();
        p.set_value(Expected::value(1));
        p.set_value(Expected::value(2));
    }

    #[test]
    #[should_panic(expected = "called twice")]
    fn double_continuation_panics() {
        let p: Arc<Precursor<i32, String>> = Precursor::new();
        p.set_continuation(Box::new(|_| {}));
        p.set_continuation(Box::new(|_| {}));
    }

    #[test]
    fn get_timeout_returns_empty_when_never_set() {
        let p: Arc<Precursor<i32, String>> = Precursor::new();
        let result = p.get_timeout(Duration::from_millis(20));
        assert!(result.is_none());
    }

    #[test]
    fn get_timeout_returns_value_when_resolved_in_time() {
        let p: Arc<Precursor<i32, String>> = Precursor::new();
        p.set_value(Expected::value(11));
        let result = p.get_timeout(Duration::from_millis(20));
        assert_eq!(result.into_value().unwrap(), 11);
    }

    #[test]
    #[should_panic(expected = "error raised")]
    fn get_timeout_raises_stored_error() {
        let p: Arc<Precursor<i32, String>> = Precursor::new();
        p.set_value(Expected::error("boom".to_string()));
        p.get_timeout(Duration::from_millis(20));
    }
}
