use crate::headers::Headers;

/// Outcome of evaluating one request against a policy.
///
/// `terminate` tells the adapter to apply the staged headers and end the
/// response without running any further handler. It is set for every
/// preflight, accepted or not, and for every rejection; the adapter chooses
/// the status code (200 is conventional) and the core never writes a body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub proceed: bool,
    pub terminate: bool,
    pub headers: Headers,
}

impl Decision {
    pub(crate) fn not_cors() -> Self {
        Self {
            proceed: true,
            terminate: false,
            headers: Headers::new(),
        }
    }

    pub(crate) fn denied() -> Self {
        Self {
            proceed: false,
            terminate: true,
            headers: Headers::new(),
        }
    }

    pub(crate) fn preflight(proceed: bool, headers: Headers) -> Self {
        Self {
            proceed,
            terminate: true,
            headers,
        }
    }

    pub(crate) fn simple(headers: Headers) -> Self {
        Self {
            proceed: true,
            terminate: false,
            headers,
        }
    }

    pub fn is_rejected(&self) -> bool {
        !self.proceed
    }
}
