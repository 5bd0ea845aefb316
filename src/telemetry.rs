use actix_service::{Service, Transform, forward_ready};
use actix_web::Error;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use futures::future::{LocalBoxFuture, Ready, ok};
use tracing_batteries::prelude::*;

/// Actix middleware which wraps every request in a server span and records
/// the response status once the handler completes.
pub struct TracingLogger;

impl<S, B> Transform<S, ServiceRequest> for TracingLogger
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = TracingLoggerMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(TracingLoggerMiddleware { service })
    }
}

pub struct TracingLoggerMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TracingLoggerMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let span = info_span!(
            "http.request",
            otel.kind = "server",
            http.request.method = %req.method(),
            url.path = %req.path(),
        );

        let fut = self.service.call(req);

        Box::pin(tracing::Instrument::instrument(
            async move {
                let res = fut.await?;
                debug!({ http.response.status_code = res.status().as_u16() }, "Handled request");
                Ok(res)
            },
            span,
        ))
    }
}
