//! Request ID middleware - tags every request and response with an ID.

use actix_web::{
    Error, HttpMessage,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::header::{HeaderName, HeaderValue},
};
use std::future::{Future, Ready, ready};
use std::pin::Pin;
use uuid::Uuid;

/// Header carrying the request ID, lowercase as actix stores header names.
pub static REQUEST_ID_HEADER: &str = "x-request-id";

/// Request ID stored in the request extensions.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Reuse the caller's ID (client or load balancer) or mint a new one.
    fn from_headers(req: &ServiceRequest) -> Self {
        let id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .map(String::from)
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        Self(id)
    }
}

/// Middleware that attaches a [`RequestId`] to each request and echoes it in
/// the response headers.
pub struct RequestIdMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequestIdMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = RequestIdService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestIdService { service }))
    }
}

pub struct RequestIdService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequestIdService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let request_id = RequestId::from_headers(&req);
        req.extensions_mut().insert(request_id.clone());

        let span = tracing::info_span!("request", request_id = %request_id.as_str());
        let fut = {
            let _guard = span.enter();
            tracing::debug!(path = %req.path(), "Handling request");
            self.service.call(req)
        };

        Box::pin(async move {
            let mut res = fut.await?;

            let value = HeaderValue::from_str(request_id.as_str())
                .unwrap_or_else(|_| HeaderValue::from_static("unknown"));
            res.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);

            Ok(res)
        })
    }
}

/// Extractor to get request ID in handlers.
impl actix_web::FromRequest for RequestId {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &actix_web::HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let request_id = req
            .extensions()
            .get::<RequestId>()
            .cloned()
            .unwrap_or_else(|| RequestId(Uuid::new_v4().to_string()));

        ready(Ok(request_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};

    async fn echo(request_id: RequestId) -> HttpResponse {
        HttpResponse::Ok().body(request_id.0)
    }

    #[actix_rt::test]
    async fn test_generates_request_id() {
        let app = test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .route("/", web::get().to(echo)),
        )
        .await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        let header = res
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(String::from)
            .unwrap();
        let body = test::read_body(res).await;

        assert!(Uuid::parse_str(&header).is_ok());
        assert_eq!(body, header.as_bytes());
    }

    #[actix_rt::test]
    async fn test_keeps_incoming_request_id() {
        let app = test::init_service(
            App::new()
                .wrap(RequestIdMiddleware)
                .route("/", web::get().to(echo)),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("X-Request-ID", "lb-1234"))
            .to_request();
        let res = test::call_service(&app, req).await;

        assert_eq!(res.headers().get(REQUEST_ID_HEADER).unwrap(), "lb-1234");
    }
}
