use crate::constants::scheme;
use crate::specifier::OriginSpecifier;

/// The scheme/host/port triple carried by an `Origin` header value.
///
/// The port falls back to the scheme default (80 for http, 443 for https)
/// when the origin carries no explicit port, so `https://github.com` and
/// `https://github.com:443` compare equal against a port constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOrigin<'a> {
    pub scheme: &'a str,
    pub host: &'a str,
    pub port: Option<u16>,
}

impl<'a> RequestOrigin<'a> {
    /// Splits `scheme://host[:port]`. Returns `None` for values that do not
    /// look like an origin, such as the literal `null` sent by opaque
    /// contexts; callers treat those as never matching.
    pub fn parse(value: &'a str) -> Option<Self> {
        let (scheme_part, rest) = value.trim().split_once("://")?;
        if scheme_part.is_empty() || rest.is_empty() {
            return None;
        }

        let (host, port) = match rest.rsplit_once(':') {
            Some((host, port)) if !host.is_empty() => {
                (host, Some(port.parse::<u16>().ok()?))
            }
            _ => (rest, None),
        };

        Some(Self {
            scheme: scheme_part,
            host,
            port: port.or_else(|| default_port(scheme_part)),
        })
    }
}

fn default_port(value: &str) -> Option<u16> {
    if value.eq_ignore_ascii_case(scheme::HTTP) {
        Some(80)
    } else if value.eq_ignore_ascii_case(scheme::HTTPS) {
        Some(443)
    } else {
        None
    }
}

/// Canonical form of the `origins` configuration field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OriginPolicy {
    /// Reject every cross-origin request before any header is staged.
    #[default]
    Disabled,
    /// Accept any origin and answer with a literal `*`.
    AllowAny,
    /// Accept origins matching at least one specifier; first match wins.
    AllowList(Vec<String>),
}

impl OriginPolicy {
    /// Returns how the origin should be echoed back when it is acceptable,
    /// or `None` when the request must be rejected.
    pub(crate) fn permits(&self, origin: &str) -> Option<OriginGrant> {
        match self {
            OriginPolicy::Disabled => None,
            OriginPolicy::AllowAny => Some(OriginGrant::Wildcard),
            OriginPolicy::AllowList(specifiers) => {
                let parsed = RequestOrigin::parse(origin)?;
                specifiers
                    .iter()
                    .any(|entry| {
                        OriginSpecifier::parse(entry)
                            .is_ok_and(|specifier| specifier.matches(&parsed))
                    })
                    .then_some(OriginGrant::Literal)
            }
        }
    }
}

/// How an allowed origin is written into `Access-Control-Allow-Origin`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum OriginGrant {
    Wildcard,
    Literal,
}

impl OriginGrant {
    pub(crate) fn echo_value(self, origin: &str) -> String {
        match self {
            OriginGrant::Wildcard => "*".to_string(),
            OriginGrant::Literal => origin.to_string(),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
