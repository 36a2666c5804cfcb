use crate::router::handle;
use crate::tests::utils::{
    body_string, get, header, listing_json, ok_list, post_form, test_state, MockTransport,
};
use serde_json::json;

#[test]
fn empty_result_shows_empty_state_not_error() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![]));

    let resp = handle(get("/listings"), &test_state(&mock)).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("empty-panel"));
    assert!(!body.contains("error-panel"));
    assert!(!body.contains("listing-card"));
}

#[test]
fn api_failure_shows_error_panel_with_hint() {
    let mock = MockTransport::new();
    mock.push_json(500, json!({ "success": false, "error": "Database unavailable" }));

    let body = body_string(handle(get("/listings"), &test_state(&mock)).unwrap());
    assert!(body.contains("error-panel"));
    assert!(body.contains("Database unavailable"));
    assert!(body.contains("http://api.test"));
    assert!(!body.contains("empty-panel"));
}

#[test]
fn listings_render_as_cards() {
    let mock = MockTransport::new();
    mock.push_json(
        200,
        ok_list(vec![
            listing_json("lst-1", "sunny-double", "Sunny double"),
            listing_json("lst-2", "quiet-single", "Quiet single"),
        ]),
    );

    let body = body_string(handle(get("/listings"), &test_state(&mock)).unwrap());
    assert_eq!(body.matches(r#"class="listing-card"#).count(), 2);
    assert!(body.contains(r#"href="/listings/sunny-double""#));
    assert!(body.contains("results-summary"));
}

#[test]
fn filters_from_url_reach_the_api() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![]));

    let req = get("/listings?suburb=Bondi&room_type=&min_price=abc&max_price=300&limit=10");
    let body = body_string(handle(req, &test_state(&mock)).unwrap());

    assert_eq!(
        mock.requests()[0].url,
        "http://api.test/listings/public?suburb=Bondi&max_price=300&limit=10"
    );
    // The form keeps what the visitor typed.
    assert!(body.contains(r#"value="Bondi""#));
    assert!(body.contains("clear-filters"));
}

#[test]
fn clear_button_hidden_without_filters() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![]));

    let body = body_string(handle(get("/listings"), &test_state(&mock)).unwrap());
    assert!(!body.contains("clear-filters"));
}

#[test]
fn applying_filters_redirects_to_query_url() {
    let mock = MockTransport::new();
    let req = post_form(
        "/listings/filters",
        "suburb=Surry+Hills&room_type=&min_price=100&max_price=",
    );

    let resp = handle(req, &test_state(&mock)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/listings?suburb=Surry+Hills&min_price=100");
    assert!(mock.requests().is_empty());
}

#[test]
fn applying_empty_filters_redirects_to_bare_path() {
    let mock = MockTransport::new();
    let resp = handle(post_form("/listings/filters", "suburb=&room_type="), &test_state(&mock)).unwrap();
    assert_eq!(header(&resp, "Location"), "/listings");
}

#[test]
fn clearing_filters_redirects_to_bare_path() {
    let mock = MockTransport::new();
    let resp = handle(
        post_form("/listings/filters/clear", "suburb=Bondi&max_price=300"),
        &test_state(&mock),
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/listings");
}

#[test]
fn unrecognized_locale_does_not_hide_the_catalog() {
    let mock = MockTransport::new();
    let mut french = listing_json("lst-2", "chambre-calme", "Chambre calme");
    french["locale"] = json!("fr");
    mock.push_json(
        200,
        ok_list(vec![listing_json("lst-1", "sunny-double", "Sunny double"), french]),
    );

    let body = body_string(handle(get("/listings"), &test_state(&mock)).unwrap());
    assert_eq!(body.matches(r#"class="listing-card"#).count(), 2);
    assert!(body.contains(r#"href="/listings/chambre-calme""#));
    assert!(!body.contains("error-panel"));
}

#[test]
fn decimal_price_is_truncated_not_dropped() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![]));

    handle(get("/listings?min_price=150.5"), &test_state(&mock)).unwrap();
    assert_eq!(
        mock.requests()[0].url,
        "http://api.test/listings/public?min_price=150"
    );
}

#[test]
fn card_links_encode_the_slug() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![listing_json("lst-1", "casa bonita", "Casa bonita")]));

    let body = body_string(handle(get("/listings"), &test_state(&mock)).unwrap());
    assert!(body.contains(r#"href="/listings/casa%20bonita""#));
}
