// src/application/error.rs
use crate::domain::errors::RawError;
use std::any::Any;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, Failure>;

/// An error with a known HTTP status and a message that is safe to show to
/// clients.
///
/// Fields are private so status and message cannot change once the error has
/// been built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} ({status_code})")]
pub struct ApplicationError {
    message: String,
    status_code: u16,
    is_operational: bool,
}

impl ApplicationError {
    /// Anticipated failure raised on purpose by handler logic or produced by
    /// classification of a recognised store failure.
    pub fn new(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            message: message.into(),
            status_code,
            is_operational: true,
        }
    }

    /// Unclassified failure. Only the responder builds these.
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            status_code: 500,
            is_operational: false,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(message, 400)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(message, 404)
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::new(message, 405)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn status_code(&self) -> u16 {
        self.status_code
    }

    pub fn is_operational(&self) -> bool {
        self.is_operational
    }
}

/// Everything a handler can fail with. All variants end up in the same
/// responder.
#[derive(Debug, Clone, Error)]
pub enum Failure {
    #[error(transparent)]
    Application(#[from] ApplicationError),
    #[error(transparent)]
    Raw(#[from] RawError),
    #[error("handler panicked: {}", .0.as_deref().unwrap_or("<non-string payload>"))]
    Panic(Option<String>),
}

impl Failure {
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => Some(*message),
            Err(payload) => payload.downcast_ref::<&str>().map(|s| (*s).to_string()),
        };
        Self::Panic(message)
    }
}
