// src/presentation/http/extractors.rs
use crate::application::error::{ApplicationError, Failure};
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use serde::de::DeserializeOwned;

pub const INVALID_JSON_MESSAGE: &str = "Invalid JSON body.";
pub const INVALID_FIELD_TYPE_MESSAGE: &str = "Request body has an invalid field type.";
pub const MISSING_JSON_CONTENT_TYPE_MESSAGE: &str =
    "Expected request with `Content-Type: application/json`.";
pub const UNREADABLE_BODY_MESSAGE: &str = "Request body could not be read.";
pub const INVALID_PATH_MESSAGE: &str = "Invalid URL path parameter.";

/// JSON request body whose rejections travel the failure pipeline instead of
/// being answered with axum's plain-text body.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection_to_failure(rejection)),
        }
    }
}

/// Path parameters with the same treatment as [`JsonBody`].
#[derive(Debug, Clone)]
pub struct PathParam<T>(pub T);

impl<S, T> FromRequestParts<S> for PathParam<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = Failure;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => Err(path_rejection_to_failure(rejection)),
        }
    }
}

// Decoder text carries field paths and line/column positions; it goes to the
// log only and clients get a fixed message.
fn json_rejection_to_failure(rejection: JsonRejection) -> Failure {
    tracing::warn!(rejection = %rejection.body_text(), "json body rejected");
    let message = match &rejection {
        JsonRejection::JsonSyntaxError(_) => INVALID_JSON_MESSAGE,
        JsonRejection::JsonDataError(_) => INVALID_FIELD_TYPE_MESSAGE,
        JsonRejection::MissingJsonContentType(_) => MISSING_JSON_CONTENT_TYPE_MESSAGE,
        _ => UNREADABLE_BODY_MESSAGE,
    };
    ApplicationError::new(message, rejection.status().as_u16()).into()
}

fn path_rejection_to_failure(rejection: PathRejection) -> Failure {
    tracing::warn!(rejection = %rejection.body_text(), "path parameters rejected");
    let status = rejection.status();
    if status.is_server_error() {
        // Route and extractor disagree about the parameters.
        ApplicationError::unexpected(rejection.body_text()).into()
    } else {
        ApplicationError::new(INVALID_PATH_MESSAGE, status.as_u16()).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::header::CONTENT_TYPE};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Sample {
        #[allow(dead_code)]
        duration: i64,
    }

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn rejection_for(req: Request) -> ApplicationError {
        match JsonBody::<Sample>::from_request(req, &()).await {
            Err(Failure::Application(err)) => err,
            other => panic!("expected application failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn type_mismatch_hides_decoder_details() {
        let err = rejection_for(json_request(r#"{"duration":"five"}"#)).await;

        assert_eq!(err.status_code(), 422);
        assert_eq!(err.message(), INVALID_FIELD_TYPE_MESSAGE);
        assert!(err.is_operational());
    }

    #[tokio::test]
    async fn syntax_errors_get_a_fixed_message() {
        let err = rejection_for(json_request(r#"{"duration": "#)).await;

        assert_eq!(err.status_code(), 400);
        assert_eq!(err.message(), INVALID_JSON_MESSAGE);
    }

    #[tokio::test]
    async fn missing_content_type_is_415() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"duration":5}"#))
            .unwrap();

        let err = rejection_for(req).await;

        assert_eq!(err.status_code(), 415);
        assert_eq!(err.message(), MISSING_JSON_CONTENT_TYPE_MESSAGE);
    }
}
