#![allow(dead_code)]

use hostspec_cors::{Decision, Headers};

use super::headers::header_value;

pub fn assert_not_cors(decision: &Decision) {
    assert!(decision.proceed, "non-CORS request should proceed");
    assert!(!decision.terminate, "non-CORS request should not terminate");
    assert!(
        decision.headers.is_empty(),
        "non-CORS request should stage no headers, got {:?}",
        decision.headers
    );
}

pub fn assert_denied(decision: &Decision) {
    assert!(!decision.proceed, "denied request should not proceed");
    assert!(decision.terminate, "denied request should terminate");
    assert!(
        decision.headers.is_empty(),
        "denied request should stage no headers, got {:?}",
        decision.headers
    );
}

pub fn assert_simple_allowed(decision: Decision) -> Headers {
    assert!(decision.proceed, "allowed simple request should proceed");
    assert!(
        !decision.terminate,
        "allowed simple request should continue to the handler"
    );
    decision.headers
}

pub fn assert_preflight_allowed(decision: Decision) -> Headers {
    assert!(decision.proceed, "allowed preflight should proceed");
    assert!(decision.terminate, "preflight should always terminate");
    decision.headers
}

pub fn assert_preflight_rejected(decision: Decision) -> Headers {
    assert!(!decision.proceed, "rejected preflight should not proceed");
    assert!(decision.terminate, "preflight should always terminate");
    decision.headers
}

pub fn assert_header_eq(headers: &Headers, name: &str, expected: &str) {
    assert_eq!(
        header_value(headers, name),
        Some(expected),
        "unexpected value for `{name}`"
    );
}

pub fn assert_no_header(headers: &Headers, name: &str) {
    assert_eq!(
        header_value(headers, name),
        None,
        "`{name}` should not be staged"
    );
}
