use std::any::Any;
use std::fmt::Debug;

use thiserror::Error;

/// Raised by [`Expected::value`] / [`Expected::error`] when the wrong
/// variant is accessed.
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("attempted to access the value of an Expected holding an error")]
    NotAValue,
    #[error("attempted to access the error of an Expected holding a value")]
    NotAnError,
}

/// Wraps an error so that `Expected::from(Unexpected(e))` is unambiguous
/// even when `T == E` — the same role `unexpected<E>` plays in
/// `original_source/src/expected.hpp`.
#[derive(Debug, Clone)]
pub struct Unexpected<E>(pub E);

/// How a held error is turned into a raised (panicking) condition when a
/// caller dereferences an `Expected` that holds an error.
///
/// Two disjoint implementations stand in for the original's
/// `if constexpr (std::is_same<std::exception_ptr, E>::value)` compile-time
/// branch: an ordinary `Debug` error panics with a formatted message, while
/// the opaque exception-handle type (`Box<dyn Any + Send>`, this crate's
/// analogue of `std::exception_ptr`) re-raises the original panic via
/// `resume_unwind`, preserving it exactly. The two impls are coherence-legal
/// on stable Rust because `Box<dyn Any + Send>` does not implement `Debug`,
/// making the bound sets provably disjoint — no specialization needed here.
pub trait RaiseError {
    fn raise(self) -> !;
}

impl<E: Debug + Send + 'static> RaiseError for E {
    fn raise(self) -> ! {
        panic!("error raised: {:?}", self)
    }
}

impl RaiseError for Box<dyn Any + Send> {
    fn raise(self) -> ! {
        std::panic::resume_unwind(self)
    }
}

/// A value-or-error sum type: exactly one of `Value` / `Error` is live.
#[derive(Debug, Clone)]
pub enum Expected<T, E> {
    Value(T),
    Error(E),
}

impl<T, E> Expected<T, E> {
    pub fn value(v: T) -> Self {
        Expected::Value(v)
    }

    pub fn error(e: E) -> Self {
        Expected::Error(e)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Expected::Value(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Expected::Error(_))
    }

    pub fn as_value(&self) -> Result<&T, AccessError> {
        match self {
            Expected::Value(v) => Ok(v),
            Expected::Error(_) => Err(AccessError::NotAValue),
        }
    }

    pub fn as_error(&self) -> Result<&E, AccessError> {
        match self {
            Expected::Error(e) => Ok(e),
            Expected::Value(_) => Err(AccessError::NotAnError),
        }
    }

    pub fn into_value(self) -> Result<T, AccessError> {
        match self {
            Expected::Value(v) => Ok(v),
            Expected::Error(_) => Err(AccessError::NotAValue),
        }
    }

    pub fn into_error(self) -> Result<E, AccessError> {
        match self {
            Expected::Error(e) => Ok(e),
            Expected::Value(_) => Err(AccessError::NotAnError),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Expected<U, E> {
        match self {
            Expected::Value(v) => Expected::Value(f(v)),
            Expected::Error(e) => Expected::Error(e),
        }
    }

    pub fn map_error<F2, G: FnOnce(E) -> F2>(self, g: G) -> Expected<T, F2> {
        match self {
            Expected::Value(v) => Expected::Value(v),
            Expected::Error(e) => Expected::Error(g(e)),
        }
    }
}

impl<T, E: RaiseError> Expected<T, E> {
    /// Returns the held value, or raises the held error — re-raising it
    /// transparently when `E` is the opaque exception-handle type.
    pub fn into_raised(self) -> T {
        match self {
            Expected::Value(v) => v,
            Expected::Error(e) => e.raise(),
        }
    }
}

impl<T, E> From<Unexpected<E>> for Expected<T, E> {
    fn from(u: Unexpected<E>) -> Self {
        Expected::Error(u.0)
    }
}
