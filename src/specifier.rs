use crate::origin::RequestOrigin;
use crate::util::equals_ignore_case;
use thiserror::Error;

/// One parsed origin specifier.
///
/// Specifiers extend plain origin comparison with an optional scheme, a
/// wildcard-subdomain host pattern and an optional port constraint:
///
/// - `github.com` allow any scheme for this host
/// - `https://github.com` allow only the https scheme for this host
/// - `*.github.com` allow any sub-domain, including the domain itself
/// - `github.com:*` allow any port for this host
/// - `https://*.github.com:8080` combinations of the above
///
/// Grammar: `[ scheme "://" ] hostpart [ ":" portpart ]` where `hostpart` is
/// `"*." domain | domain` and `portpart` is a port number or `*`.
///
/// Specifiers borrow from the configured string and are parsed fresh per
/// list entry at match time; [`Policy::resolve`](crate::Policy::resolve)
/// parses each entry once up front so a malformed specifier fails at setup
/// rather than per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OriginSpecifier<'a> {
    scheme: Option<&'a str>,
    host: HostPattern<'a>,
    port: PortPattern,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HostPattern<'a> {
    Exact(&'a str),
    Subdomains(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PortPattern {
    Unconstrained,
    Any,
    Exact(u16),
}

/// Reasons a specifier string fails to parse.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecifierError {
    #[error("scheme part is empty")]
    EmptyScheme,
    #[error("host part is empty")]
    EmptyHost,
    #[error("`{0}` is not a valid port")]
    InvalidPort(String),
}

impl<'a> OriginSpecifier<'a> {
    pub fn parse(input: &'a str) -> Result<Self, SpecifierError> {
        let input = input.trim();

        let (scheme, rest) = match input.split_once("://") {
            Some((scheme, _)) if scheme.is_empty() => return Err(SpecifierError::EmptyScheme),
            Some((scheme, rest)) => (Some(scheme), rest),
            None => (None, input),
        };

        let (host, port) = match rest.rsplit_once(':') {
            Some((host, "*")) => (host, PortPattern::Any),
            Some((host, port)) => {
                let port = port
                    .parse::<u16>()
                    .map_err(|_| SpecifierError::InvalidPort(port.to_string()))?;
                (host, PortPattern::Exact(port))
            }
            None => (rest, PortPattern::Unconstrained),
        };

        let host = match host.strip_prefix("*.") {
            Some("") => return Err(SpecifierError::EmptyHost),
            Some(suffix) => HostPattern::Subdomains(suffix),
            None if host.is_empty() => return Err(SpecifierError::EmptyHost),
            None => HostPattern::Exact(host),
        };

        Ok(Self { scheme, host, port })
    }

    /// Tests the specifier against a parsed request origin.
    ///
    /// Constraints are checked in declared order (scheme, port, host) and
    /// short-circuit on the first mismatch.
    pub fn matches(&self, origin: &RequestOrigin<'_>) -> bool {
        if let Some(scheme) = self.scheme
            && !equals_ignore_case(scheme, origin.scheme)
        {
            return false;
        }

        match self.port {
            PortPattern::Unconstrained | PortPattern::Any => {}
            PortPattern::Exact(port) => {
                if origin.port != Some(port) {
                    return false;
                }
            }
        }

        match self.host {
            HostPattern::Exact(host) => equals_ignore_case(host, origin.host),
            HostPattern::Subdomains(suffix) => matches_domain_or_subdomain(origin.host, suffix),
        }
    }
}

/// `*.example.com` accepts the registrable domain itself and any of its
/// subdomains. The preceding character must be a label separator, so a host
/// like `fakeexample.com` never matches.
fn matches_domain_or_subdomain(host: &str, suffix: &str) -> bool {
    if host.len() == suffix.len() {
        return equals_ignore_case(host, suffix);
    }
    if host.len() <= suffix.len() {
        return false;
    }

    let split = host.len() - suffix.len();
    if !host.is_char_boundary(split) {
        return false;
    }

    host.as_bytes()[split - 1] == b'.' && equals_ignore_case(&host[split..], suffix)
}

#[cfg(test)]
#[path = "specifier_test.rs"]
mod specifier_test;
