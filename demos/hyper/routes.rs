use std::convert::Infallible;
use std::future::Future;
use std::pin::Pin;

use http_body_util::Full;
use hyper::body::{Bytes, Incoming};
use hyper::service::Service;
use hyper::{Request, Response};

use crate::cors::AppState;

#[derive(Clone)]
pub struct Router {
    state: AppState,
}

pub fn router(state: AppState) -> Router {
    Router { state }
}

impl Service<Request<Incoming>> for Router {
    type Response = Response<Full<Bytes>>;
    type Error = Infallible;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn call(&self, _req: Request<Incoming>) -> Self::Future {
        let greeting = self.state.greeting;
        Box::pin(async move {
            Ok(Response::new(Full::new(Bytes::from(format!(
                "<h1>{greeting}</h1><p>Call this endpoint from another origin to see the decision engine in action.</p>"
            )))))
        })
    }
}
