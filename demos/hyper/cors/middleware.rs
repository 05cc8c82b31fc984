use std::future::Future;
use std::pin::Pin;

use hostspec_cors::{Headers, RequestContext, constants::header};
use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::http::StatusCode;
use hyper::http::header::{HeaderMap, HeaderName, HeaderValue};
use hyper::service::Service;
use hyper::{Request, Response};

use super::SharedCors;

type BoxFuture<T> = Pin<Box<dyn Future<Output = T> + Send>>;

pub type CorsBody = Full<Bytes>;

/// Hyper middleware following the pattern from the official
/// "Getting Started with a Server Middleware" guide:
/// https://hyper.rs/guides/1/server/middleware/
#[derive(Clone)]
pub struct CorsGate<S> {
    inner: S,
    cors: SharedCors,
}

impl<S> CorsGate<S> {
    pub fn new(cors: SharedCors, inner: S) -> Self {
        Self { inner, cors }
    }
}

impl<S> Service<Request<Incoming>> for CorsGate<S>
where
    S: Service<Request<Incoming>, Response = Response<CorsBody>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    S::Error: Send + 'static,
{
    type Response = Response<CorsBody>;
    type Error = S::Error;
    type Future = BoxFuture<Result<Self::Response, Self::Error>>;

    fn call(&self, req: Request<Incoming>) -> Self::Future {
        let owned_ctx = OwnedRequestContext::from_request(&req);
        let decision = self.cors.check(&owned_ctx.as_request_context());

        if decision.terminate {
            return Box::pin(async move { Ok(terminated_response(decision.headers)) });
        }

        let inner = self.inner.clone();
        Box::pin(async move {
            let mut response = inner.call(req).await?;
            apply_headers(response.headers_mut(), &decision.headers);
            Ok(response)
        })
    }
}

fn terminated_response(headers: Headers) -> Response<CorsBody> {
    // No body; 200 is this adapter's conventional status for terminated
    // preflights and rejections.
    let mut builder = Response::builder().status(StatusCode::OK);
    if let Some(map) = builder.headers_mut() {
        apply_headers(map, &headers);
    }
    builder
        .body(Full::new(Bytes::new()))
        .expect("failed to build terminated response")
}

fn apply_headers(map: &mut HeaderMap, headers: &Headers) {
    for (name, value) in headers.iter() {
        if let (Ok(header_name), Ok(header_value)) = (
            HeaderName::try_from(name.as_str()),
            HeaderValue::from_str(value),
        ) {
            map.insert(header_name, header_value);
        }
    }
}

struct OwnedRequestContext {
    method: String,
    host: String,
    origin: Option<String>,
    access_control_request_method: Option<String>,
    access_control_request_headers: Option<String>,
}

impl OwnedRequestContext {
    fn from_request(request: &Request<Incoming>) -> Self {
        let headers = request.headers();

        Self {
            method: request.method().as_str().to_string(),
            host: header_value(headers, header::HOST).unwrap_or_default(),
            origin: header_value(headers, header::ORIGIN),
            access_control_request_method: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_METHOD,
            ),
            access_control_request_headers: header_value(
                headers,
                header::ACCESS_CONTROL_REQUEST_HEADERS,
            ),
        }
    }

    fn as_request_context(&self) -> RequestContext<'_> {
        RequestContext {
            // Plain HTTP demo; derive from the TLS state when terminating TLS.
            scheme: "http",
            host: &self.host,
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.access_control_request_method.as_deref(),
            access_control_request_headers: self.access_control_request_headers.as_deref(),
        }
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
}
