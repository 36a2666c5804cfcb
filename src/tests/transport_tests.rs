use crate::api::transport::{default_headers, RawResponse};
use crate::api::HttpTransport;

#[test]
fn api_calls_ask_for_fresh_json() {
    let headers = default_headers();

    assert_eq!(headers["content-type"], "application/json");
    assert_eq!(headers["accept"], "application/json");
    assert_eq!(headers["cache-control"], "no-cache, no-store");
    assert_eq!(headers["pragma"], "no-cache");
    assert_eq!(headers.len(), 4);
}

#[test]
fn http_transport_builds_with_default_headers() {
    assert!(HttpTransport::new().is_ok());
}

#[test]
fn only_2xx_counts_as_success() {
    let response = |status| RawResponse { status, body: String::new() };

    assert!(response(200).is_success());
    assert!(response(204).is_success());
    assert!(!response(304).is_success());
    assert!(!response(404).is_success());
}
