use std::any::Any;
use std::fmt;

use thiserror::Error;

/// The payload captured when a `then` handler panics.
///
/// Carries both a human-readable message and the raw unwind payload, so a
/// chain typed over `Box<dyn Any + Send>` can re-raise the original panic
/// untouched (see [`RaiseError`](crate::expected::RaiseError)), while chains
/// typed over an ordinary `Debug` error get a formatted message instead.
pub struct HandlerPanic {
    message: String,
    payload: Box<dyn Any + Send>,
}

impl HandlerPanic {
    pub fn new(payload: Box<dyn Any + Send>) -> Self {
        let message = panic_message(&payload);
        HandlerPanic { message, payload }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_payload(self) -> Box<dyn Any + Send> {
        self.payload
    }
}

impl fmt::Debug for HandlerPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerPanic")
            .field("message", &self.message)
            .finish()
    }
}

impl fmt::Display for HandlerPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler panicked: {}", self.message)
    }
}

impl std::error::Error for HandlerPanic {}

/// Extracts a printable message from a `catch_unwind` payload, the same
/// way the standard panic hook does (`&str` / `String` special-cased,
/// anything else gets a generic label).
pub fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// `HandlerPanic` converts into the opaque exception-handle error type by
/// handing back the raw payload untouched: this is what lets a panic
/// inside a `then` handler re-raise transparently instead of being
/// reported as a generic `HandlerPanic` error.
impl From<HandlerPanic> for Box<dyn Any + Send> {
    fn from(p: HandlerPanic) -> Self {
        p.into_payload()
    }
}

/// A ready-to-use error type for callers who do not want to define their
/// own. Not required by the core state machine, which is generic over any
/// `E`; provided as a convenience, matching the small `thiserror`-derived
/// error enums used throughout the example pack.
///
/// Only stores a message, not the raw panic payload (unlike the
/// `Box<dyn Any + Send>` conversion above): a precursor's value slot must
/// stay `Clone` to support multiple readers on a shared future, and a raw
/// unwind payload cannot be cloned.
#[derive(Error, Debug, Clone)]
pub enum Failure {
    #[error("handler panicked: {0}")]
    HandlerPanicked(String),

    #[error("{0}")]
    Message(String),
}

impl From<HandlerPanic> for Failure {
    fn from(p: HandlerPanic) -> Self {
        Failure::HandlerPanicked(p.message().to_string())
    }
}

impl Failure {
    pub fn message(msg: impl Into<String>) -> Self {
        Failure::Message(msg.into())
    }
}
