//! End-to-end scenarios exercising a promise/future pair the way a caller
//! actually uses one: across threads, through chains, and at timeout
//! boundaries.

use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use pretty_assertions::assert_eq;

use precursor::{Expected, Failure, Future, Optional, Promise};

#[test]
fn scenario_value_set_before_future_is_observed() {
    let promise: Promise<i32, Failure> = Promise::new();
    promise.set_value(10);
    let future = promise.get_future();
    assert_eq!(future.get(), 10);
}

#[test]
fn scenario_value_set_after_future_is_observed_from_another_thread() {
    let promise: Promise<String, Failure> = Promise::new();
    let future = promise.get_future();
    let handle = thread::spawn(move || future.get());
    thread::sleep(Duration::from_millis(20));
    promise.set_value("hello".to_string());
    assert_eq!(handle.join().unwrap(), "hello");
}

#[test]
fn scenario_error_propagates_through_deref() {
    let promise: Promise<i32, Failure> = Promise::new();
    let future = promise.get_future();
    promise.set_exception(Failure::message("disk on fire"));
    let result = catch_unwind(AssertUnwindSafe(|| future.get()));
    assert!(result.is_err());
}

#[test]
fn scenario_error_bypasses_every_chained_handler() {
    let promise: Promise<i32, Failure> = Promise::new();
    let future = promise.get_future();
    let chained = future
        .then(|x| {
            panic!("should never run: {}", x);
        })
        .then(|x: i32| x + 1);
    promise.set_exception(Failure::message("upstream failed"));
    let result = catch_unwind(AssertUnwindSafe(|| chained.get()));
    assert!(result.is_err());
}

#[test]
fn scenario_synchronous_chain_runs_in_order() {
    let promise: Promise<i32, Failure> = Promise::new();
    let future = promise.get_future();
    let chained = future.then(|x| x + 1).then(|x| x * 10).then(|x| x - 5);
    promise.set_value(1);
    assert_eq!(chained.get(), 15);
}

#[test]
fn scenario_asynchronous_handler_flattens_into_one_future() {
    let inner_promise: Promise<i32, Failure> = Promise::new();
    let inner_future = inner_promise.get_future();

    let outer_promise: Promise<i32, Failure> = Promise::new();
    let outer_future = outer_promise.get_future();

    let chained = outer_future.then_async(move |x| inner_future.then(move |y| x + y));

    let inner_promise2 = inner_promise;
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(10));
        inner_promise2.set_value(100);
    });
    outer_promise.set_value(1);

    assert_eq!(chained.get(), 101);
}

#[test]
fn scenario_void_handler_takes_an_ignored_unit_argument() {
    let promise: Promise<(), Failure> = Promise::new();
    let future = promise.get_future();
    let chained = future.then(|_: ()| 7);
    promise.set_value(());
    assert_eq!(chained.get(), 7);
}

#[test]
fn scenario_void_to_void_chain_runs_the_second_continuation() {
    use std::sync::atomic::{AtomicBool, Ordering};

    let promise: Promise<(), Failure> = Promise::new();
    let future = promise.get_future();

    let flag = Arc::new(AtomicBool::new(false));
    let flag2 = flag.clone();

    let chained = future.then(|_: ()| ()).then(move |_: ()| {
        flag2.store(true, Ordering::SeqCst);
    });

    promise.set_value(());
    chained.get();

    assert!(flag.load(Ordering::SeqCst));
}

#[test]
fn scenario_timeout_expires_while_promise_is_unset() {
    let promise: Promise<i32, Failure> = Promise::new();
    let future = promise.get_future();
    let result = future.get_timeout(Duration::from_millis(30));
    assert!(matches!(result, Optional::None));
}

#[test]
fn scenario_handler_panic_is_captured_as_the_downstream_error() {
    let promise: Promise<i32, Box<dyn Any + Send>> = Promise::new();
    let future = promise.get_future();
    let chained: Future<i32, Box<dyn Any + Send>> = future.then(|_: i32| -> i32 {
        panic!("boom, handler died");
    });
    promise.set_value(1);
    let result = catch_unwind(AssertUnwindSafe(|| chained.get()));
    match result {
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_default();
            assert!(message.contains("boom"));
        }
        Ok(_) => panic!("expected the captured panic to re-raise"),
    }
}

#[test]
fn scenario_expected_deref_raises_held_error_directly() {
    let e: Expected<i32, Failure> = Expected::error(Failure::message("bad state"));
    let result = catch_unwind(AssertUnwindSafe(|| e.into_raised()));
    assert!(result.is_err());
}
