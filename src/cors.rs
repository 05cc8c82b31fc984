use crate::constants::{header, method};
use crate::context::RequestContext;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::OriginGrant;
use crate::policy::Policy;
use crate::result::Decision;
use crate::util::{equals_ignore_case, split_list};

/// Access-control decision engine. Built once per configured route from a
/// [`CorsOptions`] (or any of its shorthand forms) and shared read-only
/// across requests; [`Cors::check`] is pure and safe to call concurrently.
pub struct Cors {
    policy: Policy,
}

impl Cors {
    pub fn new<O: Into<CorsOptions>>(options: O) -> Result<Self, ValidationError> {
        Ok(Self {
            policy: Policy::resolve(options.into())?,
        })
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }

    /// Evaluates one request.
    ///
    /// Requests without an `Origin` header, or whose origin equals the
    /// request's own `scheme://Host`, are not CORS requests and pass through
    /// untouched. Everything else is checked against the configured origins,
    /// then branched on preflight vs simple handling.
    pub fn check(&self, request: &RequestContext<'_>) -> Decision {
        let Some(origin) = request.origin.map(str::trim).filter(|value| !value.is_empty())
        else {
            return Decision::not_cors();
        };

        if is_own_origin(origin, request.scheme, request.host) {
            return Decision::not_cors();
        }

        let Some(grant) = self.policy.origins.permits(origin) else {
            return Decision::denied();
        };

        if equals_ignore_case(request.method, method::OPTIONS) {
            self.check_preflight(request, origin, grant)
        } else {
            self.check_simple(origin, grant)
        }
    }

    fn check_preflight(
        &self,
        request: &RequestContext<'_>,
        origin: &str,
        grant: OriginGrant,
    ) -> Decision {
        let requested_method = request
            .access_control_request_method
            .map(str::trim)
            .unwrap_or("");
        let requested_headers: Vec<&str> = request
            .access_control_request_headers
            .map(|value| split_list(value).collect())
            .unwrap_or_default();

        let effective_methods: Vec<&str> = match &self.policy.methods {
            Some(methods) => methods.iter().map(String::as_str).collect(),
            None if requested_method.is_empty() => Vec::new(),
            None => vec![requested_method],
        };
        let effective_headers: Vec<&str> = match &self.policy.headers {
            Some(headers) => headers.iter().map(String::as_str).collect(),
            None => requested_headers.clone(),
        };

        let mut headers = HeaderCollection::with_estimate(3);
        // Capability headers go out even when the preflight is rejected.
        headers.push(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            effective_methods.join(", "),
        );
        headers.push(
            header::ACCESS_CONTROL_ALLOW_HEADERS,
            effective_headers.join(", "),
        );

        let method_allowed = effective_methods
            .iter()
            .any(|allowed| *allowed == requested_method);
        let headers_allowed = requested_headers.iter().all(|requested| {
            effective_headers
                .iter()
                .any(|allowed| equals_ignore_case(allowed, requested))
        });

        if !method_allowed || !headers_allowed {
            return Decision::preflight(false, headers.into_headers());
        }

        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, grant.echo_value(origin));
        Decision::preflight(true, headers.into_headers())
    }

    fn check_simple(&self, origin: &str, grant: OriginGrant) -> Decision {
        let mut headers = HeaderCollection::with_estimate(4);

        if self.policy.credentials {
            headers.push(
                header::ACCESS_CONTROL_ALLOW_CREDENTIALS,
                "true".to_string(),
            );
        }
        if let Some(max_age) = self.policy.max_age {
            headers.push(header::ACCESS_CONTROL_MAX_AGE, max_age.to_string());
        }
        if let Some(exposed) = &self.policy.expose_headers
            && !exposed.is_empty()
        {
            headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, exposed.join(", "));
        }
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, grant.echo_value(origin));

        Decision::simple(headers.into_headers())
    }
}

fn is_own_origin(origin: &str, scheme: &str, host: &str) -> bool {
    if host.is_empty() {
        return false;
    }
    let Some((origin_scheme, origin_authority)) = origin.split_once("://") else {
        return false;
    };
    equals_ignore_case(origin_scheme, scheme) && equals_ignore_case(origin_authority, host)
}

#[cfg(test)]
#[path = "cors_test.rs"]
mod cors_test;
