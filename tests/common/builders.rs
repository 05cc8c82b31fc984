#![allow(dead_code)]

use hostspec_cors::constants::method;
use hostspec_cors::{Cors, CorsOptions, Decision, Origins, RequestContext, ValueList};

#[derive(Default)]
pub struct CorsBuilder {
    options: CorsOptions,
}

pub fn cors() -> CorsBuilder {
    CorsBuilder {
        options: CorsOptions::default(),
    }
}

impl CorsBuilder {
    pub fn origins<O: Into<Origins>>(mut self, origins: O) -> Self {
        self.options = self.options.origins(origins);
        self
    }

    pub fn methods<V: Into<ValueList>>(mut self, methods: V) -> Self {
        self.options = self.options.methods(methods);
        self
    }

    pub fn headers<V: Into<ValueList>>(mut self, headers: V) -> Self {
        self.options = self.options.headers(headers);
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.options = self.options.credentials(enabled);
        self
    }

    pub fn max_age(mut self, seconds: u64) -> Self {
        self.options = self.options.max_age(seconds);
        self
    }

    pub fn expose_headers<V: Into<ValueList>>(mut self, headers: V) -> Self {
        self.options = self.options.expose_headers(headers);
        self
    }

    pub fn build(self) -> Cors {
        Cors::new(self.options).expect("valid CORS configuration")
    }
}

pub struct RequestBuilder {
    scheme: String,
    host: String,
    method: String,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
}

pub fn simple_request() -> RequestBuilder {
    RequestBuilder::new(method::GET)
}

pub fn preflight_request() -> RequestBuilder {
    RequestBuilder::new(method::OPTIONS)
}

impl RequestBuilder {
    fn new(method: &str) -> Self {
        Self {
            scheme: "https".to_string(),
            host: "service.internal".to_string(),
            method: method.to_string(),
            origin: None,
            request_method: None,
            request_headers: None,
        }
    }

    pub fn scheme<S: Into<String>>(mut self, scheme: S) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn host<S: Into<String>>(mut self, host: S) -> Self {
        self.host = host.into();
        self
    }

    pub fn method<S: Into<String>>(mut self, method: S) -> Self {
        self.method = method.into();
        self
    }

    pub fn origin<S: Into<String>>(mut self, origin: S) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method<S: Into<String>>(mut self, value: S) -> Self {
        self.request_method = Some(value.into());
        self
    }

    pub fn request_headers<S: Into<String>>(mut self, value: S) -> Self {
        self.request_headers = Some(value.into());
        self
    }

    pub fn check(&self, cors: &Cors) -> Decision {
        cors.check(&RequestContext {
            scheme: &self.scheme,
            host: &self.host,
            method: &self.method,
            origin: self.origin.as_deref(),
            access_control_request_method: self.request_method.as_deref(),
            access_control_request_headers: self.request_headers.as_deref(),
        })
    }
}
