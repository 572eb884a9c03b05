//! Request correlation for the HTTP surface.
//!
//! [`Trace`] picks a [`TraceId`] for every request, preferring a well-formed
//! `trace-id` header sent by the caller, and echoes it on the response. The
//! request runs inside an `http_request` span carrying the identifier,
//! method, and path, so every event logged while serving it (including the
//! error mapping in the inbound layer) is tagged with them. The final status
//! is recorded on the span once the response is built.

use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tracing::{Instrument, Span, field, info, info_span, warn};

use crate::domain::{TRACE_ID_HEADER, TraceId};

/// Middleware tagging each request with a [`TraceId`] and a tracing span.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use ecoscholar_backend::Trace;
///
/// let app = App::new().wrap(Trace);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { inner: service }))
    }
}

/// Service produced by [`Trace`].
pub struct TraceMiddleware<S> {
    inner: S,
}

/// Identifier for `req`: the caller's, when usable, otherwise a fresh one.
fn trace_id_for(req: &ServiceRequest) -> TraceId {
    req.headers()
        .get(TRACE_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(TraceId::from_upstream)
        .unwrap_or_else(TraceId::random)
}

fn echo_trace_id<B>(res: &mut ServiceResponse<B>, trace_id: TraceId) {
    match HeaderValue::try_from(trace_id.to_string()) {
        Ok(value) => {
            res.headers_mut()
                .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
        }
        Err(error) => warn!(%error, "trace id is not a valid header value"),
    }
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = trace_id_for(&req);
        let span = info_span!(
            "http_request",
            trace_id = %trace_id,
            method = %req.method(),
            path = %req.path(),
            status = field::Empty,
        );
        let started = Instant::now();
        let pending = span.in_scope(|| self.inner.call(req));

        let served = trace_id.in_scope(async move {
            let mut res = pending.await?;
            echo_trace_id(&mut res, trace_id);
            Span::current().record("status", res.status().as_u16());
            let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
            info!(elapsed_ms, "request completed");
            Ok(res)
        });
        Box::pin(served.instrument(span))
    }
}
