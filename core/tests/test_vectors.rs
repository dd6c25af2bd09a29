//! Verify request building and response parsing against the JSON vectors in
//! `test-vectors/`.
//!
//! Each case describes call inputs, the expected request, a simulated
//! response and the expected outcome. Bodies are compared as parsed JSON
//! when checking results, and as exact text when checking what goes on the
//! wire.

use apputil_core::{HttpResponse, RequestClient, RequestError};
use serde_json::Value;

fn headers_of(expected: &Value) -> Vec<(String, String)> {
    expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let pair = h.as_array().unwrap();
            (pair[0].as_str().unwrap().to_string(), pair[1].as_str().unwrap().to_string())
        })
        .collect()
}

#[test]
fn send_request_test_vectors() {
    let raw = include_str!("../../test-vectors/send_request.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    let client = RequestClient::default();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input = &case["input"];
        let expected_req = &case["expected_request"];

        // Verify build
        let req = client
            .build_request(
                input["method"].as_str().unwrap(),
                input["url"].as_str().unwrap(),
                &input["payload"],
                input["content_type"].as_str(),
            )
            .unwrap();
        assert_eq!(req.method, expected_req["method"].as_str().unwrap(), "{name}: method");
        assert_eq!(req.url, expected_req["url"].as_str().unwrap(), "{name}: url");
        assert_eq!(req.headers, headers_of(expected_req), "{name}: headers");
        assert_eq!(req.body, expected_req["body"].as_str().unwrap(), "{name}: body");

        // Verify parse
        let sim = &case["simulated_response"];
        let response = HttpResponse::new(
            sim["status"].as_u64().unwrap() as u16,
            sim["body"].as_str().unwrap(),
        );
        let outcome = client.parse_response(response);
        let expected = &case["expected"];
        match expected["error"].as_str() {
            None => assert_eq!(outcome.unwrap(), expected["ok"], "{name}: parsed result"),
            Some("decode") => assert!(matches!(outcome, Err(RequestError::Decode(_))), "{name}: {outcome:?}"),
            Some("status") => assert!(matches!(outcome, Err(RequestError::Status { .. })), "{name}: {outcome:?}"),
            Some(other) => panic!("{name}: unknown expected error kind {other}"),
        }
    }
}
