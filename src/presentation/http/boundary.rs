//! Handler boundary: routes every failure of a wrapped service to one sink.
//!
//! The layer is installed by the router builder, so every route and both
//! fallbacks sit behind it. It forwards
//!
//! * responses built from a [`Failure`] (handler `Err` values and extractor
//!   rejections), and
//! * panics raised while the handler future is being polled, including after
//!   it has suspended.
//!
//! Each failing request reaches the sink exactly once.
use crate::application::error::Failure;
use crate::presentation::http::error::{ErrorResponder, ForwardedFailure};
use axum::{extract::Request, response::Response};
use futures_util::future::{BoxFuture, FutureExt};
use std::{
    convert::Infallible,
    panic::{self, AssertUnwindSafe},
    task::{Context, Poll},
};
use tower::{Layer, Service};

/// Destination for failures intercepted by [`FailureBoundary`].
pub trait FailureSink: Clone + Send + Sync + 'static {
    fn forward(&self, failure: &Failure) -> Response;
}

impl FailureSink for ErrorResponder {
    fn forward(&self, failure: &Failure) -> Response {
        self.respond(failure)
    }
}

#[derive(Debug, Clone)]
pub struct FailureBoundaryLayer<F> {
    sink: F,
}

impl<F> FailureBoundaryLayer<F> {
    pub fn new(sink: F) -> Self {
        Self { sink }
    }
}

impl<S, F: Clone> Layer<S> for FailureBoundaryLayer<F> {
    type Service = FailureBoundary<S, F>;

    fn layer(&self, inner: S) -> Self::Service {
        FailureBoundary {
            inner,
            sink: self.sink.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FailureBoundary<S, F> {
    inner: S,
    sink: F,
}

impl<S, F> Service<Request> for FailureBoundary<S, F>
where
    S: Service<Request, Response = Response, Error = Infallible> + Clone + Send + 'static,
    S::Future: Send + 'static,
    F: FailureSink,
{
    type Response = Response;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Response, Infallible>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: Request) -> Self::Future {
        let sink = self.sink.clone();

        let future = match panic::catch_unwind(AssertUnwindSafe(|| self.inner.call(req))) {
            Ok(future) => future,
            Err(payload) => {
                let response = sink.forward(&Failure::from_panic(payload));
                return Box::pin(async move { Ok(response) });
            }
        };

        Box::pin(async move {
            let response = match AssertUnwindSafe(future).catch_unwind().await {
                Ok(Ok(response)) => response,
                Ok(Err(never)) => match never {},
                Err(payload) => return Ok(sink.forward(&Failure::from_panic(payload))),
            };
            Ok(forward_failed(response, &sink))
        })
    }
}

fn forward_failed<F: FailureSink>(mut response: Response, sink: &F) -> Response {
    match response.extensions_mut().remove::<ForwardedFailure>() {
        Some(ForwardedFailure(failure)) => sink.forward(&failure),
        None => response,
    }
}
