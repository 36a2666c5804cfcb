use crate::errors::ServerError;
use crate::router::{handle, respond};
use crate::tests::utils::{
    body_string, get, htmx_post, lead_json, listing_json, ok, test_state, MockTransport,
};
use serde_json::json;

#[test]
fn missing_listing_is_not_found() {
    let mock = MockTransport::new();
    mock.push_json(404, json!({ "success": false, "error": "Listing not found" }));

    let result = handle(get("/listings/gone"), &test_state(&mock));
    assert!(matches!(result, Err(ServerError::NotFound)));
}

#[test]
fn not_found_message_without_404_still_navigates_to_not_found() {
    let mock = MockTransport::new();
    mock.push_json(400, json!({ "success": false, "error": "Listing not found" }));

    let resp = respond(get("/listings/gone"), &test_state(&mock));
    assert_eq!(resp.status(), 404);
    assert!(body_string(resp).contains("404 - Page not found"));
}

#[test]
fn other_failures_show_error_panel() {
    let mock = MockTransport::new();
    mock.push_json(500, json!({ "success": false, "error": "Database unavailable" }));

    let resp = handle(get("/listings/sunny-double"), &test_state(&mock)).unwrap();
    assert_eq!(resp.status(), 502);

    let body = body_string(resp);
    assert!(body.contains("error-panel"));
    assert!(body.contains("Database unavailable"));
}

#[test]
fn slug_is_decoded_before_lookup() {
    let mock = MockTransport::new();
    mock.push_json(200, ok(listing_json("lst-1", "casa bonita", "Casa bonita")));

    handle(get("/listings/casa%20bonita"), &test_state(&mock)).unwrap();
    assert_eq!(mock.requests()[0].url, "http://api.test/listings/slug/casa%20bonita");
}

#[test]
fn detail_page_shows_listing_and_contact_form() {
    let mock = MockTransport::new();
    mock.push_json(200, ok(listing_json("lst-1", "sunny-double", "Sunny double")));

    let resp = handle(get("/listings/sunny-double?image=1"), &test_state(&mock)).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sunny double"));
    assert!(body.contains("No smoking"));
    assert!(body.contains(r#"name="listing_id" value="lst-1""#));
    assert!(body.contains(r#"hx-post="/listings/sunny-double/contact""#));
    // Second image is showing; next wraps to the first.
    assert!(body.contains(r#"src="https://img.test/2.jpg" alt="Sunny double" class="w-full h-96"#));
    assert!(body.contains(r#"href="/listings/sunny-double?image=0" class="gallery-next"#));
}

#[test]
fn contact_creates_lead_for_listing() {
    let mock = MockTransport::new();
    mock.push_json(201, ok(lead_json("l1", "new")));

    let req = htmx_post(
        "/listings/sunny-double/contact",
        "listing_id=lst-1&listing_title=Sunny+double&name=Ana&email=ana%40example.com&phone=&message=Hi",
    );
    let body = body_string(handle(req, &test_state(&mock)).unwrap());

    assert!(body.contains("contact-sent"));
    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "http://api.test/leads");
    assert_eq!(
        requests[0].body,
        Some(json!({ "name": "Ana", "email": "ana@example.com", "message": "Hi", "listing_id": "lst-1" }))
    );
}

#[test]
fn contact_failure_keeps_entered_values() {
    let mock = MockTransport::new();
    mock.push_json(400, json!({ "success": false, "error": "Invalid email" }));

    let req = htmx_post(
        "/listings/sunny-double/contact",
        "listing_id=lst-1&listing_title=Sunny+double&name=Ana&email=ana%40bad&message=Hi",
    );
    let body = body_string(handle(req, &test_state(&mock)).unwrap());

    assert!(body.contains("Invalid email"));
    assert!(body.contains(r#"value="Ana""#));
    assert!(body.contains(r#"value="ana@bad""#));
    assert!(!body.contains("contact-sent"));
}

#[test]
fn contact_requires_name_and_email() {
    let mock = MockTransport::new();
    let req = htmx_post("/listings/sunny-double/contact", "listing_id=lst-1&name=&email=");

    let body = body_string(handle(req, &test_state(&mock)).unwrap());
    assert!(body.contains("contact-form"));
    assert!(mock.requests().is_empty());
}
