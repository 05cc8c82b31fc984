mod common;

use common::asserts::{assert_preflight_allowed, assert_simple_allowed};
use common::builders::{cors, preflight_request, simple_request};
use common::headers::header_value;
use hostspec_cors::constants::{header, method};
use std::sync::Arc;
use std::thread;

#[test]
fn cors_can_be_shared_across_threads() {
    let cors = Arc::new(
        cors()
            .origins(["*.example.com"])
            .methods([method::GET, method::POST])
            .headers(["X-Thread"])
            .build(),
    );

    let mut handles = Vec::new();
    for i in 0..8 {
        let cors = Arc::clone(&cors);
        handles.push(thread::spawn(move || {
            let origin = format!("https://thread{i}.example.com");

            let headers = assert_preflight_allowed(
                preflight_request()
                    .origin(origin.as_str())
                    .request_method(method::POST)
                    .request_headers("X-Thread")
                    .check(&cors),
            );
            assert_eq!(
                header_value(&headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin.as_str()),
            );

            let simple_headers =
                assert_simple_allowed(simple_request().origin(origin.as_str()).check(&cors));
            assert_eq!(
                header_value(&simple_headers, header::ACCESS_CONTROL_ALLOW_ORIGIN),
                Some(origin.as_str()),
            );
        }));
    }

    for handle in handles {
        handle.join().expect("worker thread panicked");
    }
}
