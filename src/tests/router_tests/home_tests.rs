use crate::router::{handle, respond};
use crate::tests::utils::{
    body_string, get, header, htmx_post, ok, partner_json, test_state, MockTransport,
};
use astra::Body;
use http::{Method, Request};
use serde_json::json;

#[test]
fn home_page_defaults_to_english() {
    let mock = MockTransport::new();
    let resp = handle(get("/"), &test_state(&mock)).expect("Handler failed");

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Simplify Your Property Management"));
    assert!(body.contains(r#"href="/language/es""#));
    assert!(mock.requests().is_empty(), "home page needs no API call");
}

#[test]
fn language_cookie_selects_spanish() {
    let mock = MockTransport::new();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/")
        .header("Cookie", "easylease-language=es")
        .body(Body::empty())
        .unwrap();

    let body = body_string(handle(req, &test_state(&mock)).unwrap());
    assert!(body.contains("Simplifica la Gestión de tus Propiedades"));
    assert!(body.contains(r#"href="/language/en""#));
}

#[test]
fn switching_language_sets_cookie_and_goes_back() {
    let mock = MockTransport::new();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/language/es")
        .header("Referer", "http://localhost:3000/listings?suburb=Bondi")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &test_state(&mock)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/listings?suburb=Bondi");
    assert!(header(&resp, "Set-Cookie").starts_with("easylease-language=es;"));
}

#[test]
fn switching_language_without_referer_goes_home() {
    let mock = MockTransport::new();
    let resp = handle(get("/language/en"), &test_state(&mock)).unwrap();
    assert_eq!(header(&resp, "Location"), "/");
}

#[test]
fn foreign_referer_is_reduced_to_its_path() {
    let mock = MockTransport::new();
    let req = Request::builder()
        .method(Method::GET)
        .uri("/language/en")
        .header("Referer", "https://elsewhere.test/phish")
        .body(Body::empty())
        .unwrap();

    let resp = handle(req, &test_state(&mock)).unwrap();
    assert_eq!(header(&resp, "Location"), "/phish");
}

#[test]
fn unsupported_language_is_not_found() {
    let mock = MockTransport::new();
    let resp = respond(get("/language/fr"), &test_state(&mock));
    assert_eq!(resp.status(), 404);
}

#[test]
fn unknown_route_renders_not_found_page() {
    let mock = MockTransport::new();
    let state = test_state(&mock);

    assert!(matches!(
        handle(get("/nope"), &state),
        Err(crate::errors::ServerError::NotFound)
    ));

    let resp = respond(get("/nope/deeper"), &state);
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("404 - Page not found"));
}

#[test]
fn registration_creates_partner() {
    let mock = MockTransport::new();
    mock.push_json(201, ok(partner_json("p1", "pending")));

    let req = htmx_post(
        "/register",
        "role=owner&name=Jo+Smith&email=jo%40example.com&phone=&company_name=Harbour",
    );
    let resp = handle(req, &test_state(&mock)).unwrap();
    let body = body_string(resp);

    assert!(body.contains("register-success"));
    assert!(!body.contains("<html"), "htmx gets a fragment");

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://api.test/partners");
    assert_eq!(
        requests[0].body,
        Some(json!({ "name": "Jo Smith", "email": "jo@example.com", "company_name": "Harbour" }))
    );
}

#[test]
fn registration_requires_name_and_email() {
    let mock = MockTransport::new();
    let resp = handle(htmx_post("/register", "name=Jo&email="), &test_state(&mock)).unwrap();

    assert!(body_string(resp).contains("register-error"));
    assert!(mock.requests().is_empty());
}

#[test]
fn registration_failure_is_shown_inline() {
    let mock = MockTransport::new();
    mock.push_json(409, json!({ "success": false, "error": "Email already registered" }));

    let resp = handle(
        htmx_post("/register", "name=Jo&email=jo%40example.com"),
        &test_state(&mock),
    )
    .unwrap();

    let body = body_string(resp);
    assert!(body.contains("register-error"));
    assert!(body.contains("Email already registered"));
}

#[test]
fn status_page_reports_health() {
    let mock = MockTransport::new();
    mock.push_json(
        200,
        json!({ "ok": true, "status": "healthy", "timestamp": "2024-05-01T00:00:00Z" }),
    );

    let body = body_string(handle(get("/status"), &test_state(&mock)).unwrap());
    assert!(body.contains("health-ok"));
    assert!(body.contains("http://api.test"));
}

#[test]
fn status_page_reports_unreachable_api() {
    let mock = MockTransport::new();
    mock.push_network_error("connection refused");

    let body = body_string(handle(get("/status"), &test_state(&mock)).unwrap());
    assert!(body.contains("health-down"));
    assert!(body.contains("connection refused"));
}
