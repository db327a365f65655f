use std::fmt;

use thiserror::Error;

/// Raised by [`Optional::value`] / [`Optional::into_value`] when the
/// optional is empty.
#[derive(Error, Debug)]
#[error("attempted to access the value of an empty Optional")]
pub struct OptionalAccessError;

/// A plain "value or nothing" container, used internally as the value slot
/// of a [`crate::precursor::Precursor`].
///
/// This is deliberately a local type rather than `std::option::Option`: it
/// mirrors the original's own `optional<T>` wrapper and keeps the
/// precursor's public timeout-based accessor (`Future::get_timeout`)
/// returning the same container type used internally.
#[derive(Debug, Clone)]
pub enum Optional<T> {
    Some(T),
    None,
}

impl<T> Optional<T> {
    pub fn empty() -> Self {
        Optional::None
    }

    pub fn is_some(&self) -> bool {
        matches!(self, Optional::Some(_))
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Optional::None)
    }

    /// Borrow the held value. Fails if empty.
    pub fn value(&self) -> Result<&T, OptionalAccessError> {
        match self {
            Optional::Some(v) => Ok(v),
            Optional::None => Err(OptionalAccessError),
        }
    }

    /// Consume and return the held value. Fails if empty.
    pub fn into_value(self) -> Result<T, OptionalAccessError> {
        match self {
            Optional::Some(v) => Ok(v),
            Optional::None => Err(OptionalAccessError),
        }
    }

    pub fn as_ref(&self) -> Optional<&T> {
        match self {
            Optional::Some(v) => Optional::Some(v),
            Optional::None => Optional::None,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        match self {
            Optional::Some(v) => Optional::Some(f(v)),
            Optional::None => Optional::None,
        }
    }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(o: Option<T>) -> Self {
        match o {
            Some(v) => Optional::Some(v),
            None => Optional::None,
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(o: Optional<T>) -> Self {
        match o {
            Optional::Some(v) => Some(v),
            Optional::None => None,
        }
    }
}

impl<T: fmt::Display> fmt::Display for Optional<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Optional::Some(v) => write!(f, "Some({})", v),
            Optional::None => write!(f, "None"),
        }
    }
}
