// src/presentation/http/error.rs
//! Terminal stage of the failure pipeline: classification and the JSON error
//! body.
use crate::application::error::{ApplicationError, Failure};
use crate::infrastructure::repositories::{StoreFailure, detect_shape};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

pub const FALLBACK_MESSAGE: &str = "Something went wrong";
pub const INVALID_ID_MESSAGE: &str = "Invalid ID format.";
pub const NOT_FOUND_MESSAGE: &str = "Requested document not found.";
const INVALID_INPUT_MESSAGE: &str = "Invalid input data.";

pub type HttpResult<T> = Result<T, Failure>;

/// Whether unexpected failures may show their own message to clients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MessageExposure {
    /// Unexpected failures always answer with [`FALLBACK_MESSAGE`].
    #[default]
    Sanitized,
    /// Unexpected failures surface their original message when they have one.
    Verbose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub status_code: u16,
    pub message: String,
}

/// Marker placed on a response built from a [`Failure`] so the boundary layer
/// can hand the original failure to the responder.
#[derive(Debug, Clone)]
pub(crate) struct ForwardedFailure(pub(crate) Failure);

/// Map any failure onto an [`ApplicationError`]. The input is left untouched.
pub fn classify(failure: &Failure) -> ApplicationError {
    match failure {
        Failure::Application(err) => err.clone(),
        Failure::Raw(raw) => match detect_shape(raw) {
            Some(shape) => from_store_failure(shape),
            None => unexpected(raw.message.as_deref()),
        },
        Failure::Panic(message) => unexpected(message.as_deref()),
    }
}

fn from_store_failure(shape: StoreFailure) -> ApplicationError {
    match shape {
        StoreFailure::InvalidId => ApplicationError::bad_request(INVALID_ID_MESSAGE),
        StoreFailure::FieldValidation(messages) if messages.is_empty() => {
            ApplicationError::bad_request(INVALID_INPUT_MESSAGE)
        }
        StoreFailure::FieldValidation(messages) => {
            ApplicationError::bad_request(messages.join(". "))
        }
        StoreFailure::DuplicateKey(fields) if fields.is_empty() => {
            ApplicationError::bad_request("Duplicate field value. Please use another value!")
        }
        StoreFailure::DuplicateKey(fields) => ApplicationError::bad_request(format!(
            "Duplicate field value for {}. Please use another value!",
            fields.join(", ")
        )),
        StoreFailure::NotFound => ApplicationError::not_found(NOT_FOUND_MESSAGE),
    }
}

fn unexpected(message: Option<&str>) -> ApplicationError {
    match message.map(str::trim).filter(|m| !m.is_empty()) {
        Some(message) => ApplicationError::unexpected(message),
        None => ApplicationError::unexpected(FALLBACK_MESSAGE),
    }
}

/// Status to send for a classified error; anything that is not a valid
/// 4xx/5xx code becomes 500.
pub fn status_of(err: &ApplicationError) -> StatusCode {
    StatusCode::from_u16(err.status_code())
        .ok()
        .filter(|status| status.is_client_error() || status.is_server_error())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}

pub fn render(err: &ApplicationError, exposure: MessageExposure) -> Response {
    let status = status_of(err);
    let message = if err.is_operational() || exposure == MessageExposure::Verbose {
        err.message().to_string()
    } else {
        FALLBACK_MESSAGE.to_string()
    };
    let body = ErrorBody {
        status_code: status.as_u16(),
        message,
    };
    (status, Json(body)).into_response()
}

/// Logs every failure it receives and answers it with exactly one JSON
/// response.
#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorResponder {
    exposure: MessageExposure,
}

impl ErrorResponder {
    pub fn new(exposure: MessageExposure) -> Self {
        Self { exposure }
    }

    pub fn exposure(&self) -> MessageExposure {
        self.exposure
    }

    pub fn respond(&self, failure: &Failure) -> Response {
        let anticipated = match failure {
            Failure::Application(err) => err.is_operational(),
            Failure::Raw(raw) => detect_shape(raw).is_some(),
            Failure::Panic(_) => false,
        };
        if anticipated {
            tracing::warn!(error = ?failure, "request failed");
        } else {
            tracing::error!(error = ?failure, "request failed with an unexpected error");
        }

        let classified = classify(failure);
        tracing::debug!(
            status = classified.status_code(),
            operational = classified.is_operational(),
            "failure classified"
        );
        render(&classified, self.exposure)
    }
}

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        // Sanitized placeholder; the boundary layer replaces it with the
        // configured responder's answer.
        let mut response = render(&classify(&self), MessageExposure::Sanitized);
        response.extensions_mut().insert(ForwardedFailure(self));
        response
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        Failure::from(self).into_response()
    }
}
