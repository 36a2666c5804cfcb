use crate::api::transport::Method;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, header, listing_json, ok, ok_list, post_form, test_state, MockTransport,
};
use serde_json::json;

#[test]
fn listings_table_links_edit_and_delete() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![listing_json("lst-1", "sunny-double", "Sunny double")]));

    let body = body_string(handle(get("/admin/listings"), &test_state(&mock)).unwrap());
    assert!(body.contains("admin-listings"));
    assert!(body.contains(r#"href="/admin/listings/sunny-double/edit""#));
    assert!(body.contains(r#"action="/admin/listings/lst-1/delete""#));
}

#[test]
fn new_listing_form_needs_no_api_call() {
    let mock = MockTransport::new();
    let body = body_string(handle(get("/admin/listings/new"), &test_state(&mock)).unwrap());

    assert!(body.contains(r#"action="/admin/listings""#));
    assert!(mock.requests().is_empty());
}

#[test]
fn creating_a_listing_posts_draft() {
    let mock = MockTransport::new();
    mock.push_json(201, ok(listing_json("lst-9", "new-room", "New room")));

    let resp = handle(
        post_form(
            "/admin/listings",
            "title=New+room&slug=new-room&address=1+Main+St&price_per_week=200&room_type=single&min_term_weeks=4&locale=en&rules=No+pets%0AQuiet+hours",
        ),
        &test_state(&mock),
    )
    .unwrap();

    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/admin/listings");

    let request = &mock.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(request.url, "http://api.test/listings");
    let sent = request.body.as_ref().unwrap();
    assert_eq!(sent["title"], "New room");
    assert_eq!(sent["room_type"], "single");
    assert_eq!(sent["bills_included"], false);
    assert_eq!(sent["rules"], json!(["No pets", "Quiet hours"]));
}

#[test]
fn invalid_form_is_rerendered_without_calling_api() {
    let mock = MockTransport::new();
    let resp = handle(
        post_form("/admin/listings", "title=Room&min_term_weeks=0"),
        &test_state(&mock),
    )
    .unwrap();

    assert_eq!(resp.status(), 422);
    let body = body_string(resp);
    assert!(body.contains(r#"role="alert""#));
    assert!(body.contains(r#"value="Room""#));
    assert!(mock.requests().is_empty());
}

#[test]
fn editing_loads_by_slug_and_updates_by_id() {
    let mock = MockTransport::new();
    mock.push_json(200, ok(listing_json("lst-1", "sunny-double", "Sunny double")));
    let state = test_state(&mock);

    let body = body_string(handle(get("/admin/listings/sunny-double/edit"), &state).unwrap());
    assert!(body.contains(r#"action="/admin/listings/lst-1/update""#));
    assert!(body.contains(r#"value="Sunny double""#));

    mock.push_json(200, ok(listing_json("lst-1", "sunny-double", "Sunnier double")));
    let resp = handle(
        post_form("/admin/listings/lst-1/update", "title=Sunnier+double&bills_included=on"),
        &state,
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let update = &mock.requests()[1];
    assert_eq!(update.method, Method::Put);
    assert_eq!(update.url, "http://api.test/listings/lst-1");
    assert_eq!(
        update.body,
        Some(json!({ "title": "Sunnier double", "bills_included": true }))
    );
}

#[test]
fn editing_a_listing_can_clear_its_lists() {
    let mock = MockTransport::new();
    mock.push_json(200, ok(listing_json("lst-1", "sunny-double", "Sunny double")));

    let resp = handle(
        post_form(
            "/admin/listings/lst-1/update",
            "title=Sunny+double&suburb=&rules=&house_features=Wifi",
        ),
        &test_state(&mock),
    )
    .unwrap();
    assert_eq!(resp.status(), 303);

    let sent = mock.requests()[0].body.clone().unwrap();
    assert_eq!(sent["rules"], json!([]));
    assert_eq!(sent["suburb"], json!(""));
    assert_eq!(sent["house_features"], json!(["Wifi"]));
    assert!(sent.get("images").is_none());
}

#[test]
fn creating_skips_empty_lists() {
    let mock = MockTransport::new();
    mock.push_json(201, ok(listing_json("lst-9", "new-room", "New room")));

    handle(
        post_form("/admin/listings", "title=New+room&slug=new-room&rules=&suburb="),
        &test_state(&mock),
    )
    .unwrap();

    let sent = mock.requests()[0].body.clone().unwrap();
    assert!(sent.get("rules").is_none());
    assert!(sent.get("suburb").is_none());
}

#[test]
fn deleting_a_listing_redirects_to_table() {
    let mock = MockTransport::new();
    mock.push_json(200, ok(json!({ "message": "Listing deleted" })));

    let resp = handle(post_form("/admin/listings/lst-1/delete", ""), &test_state(&mock)).unwrap();
    assert_eq!(resp.status(), 303);

    let request = &mock.requests()[0];
    assert_eq!(request.method, Method::Delete);
    assert_eq!(request.url, "http://api.test/listings/lst-1");
}

#[test]
fn edit_and_delete_use_encoded_segments() {
    let mock = MockTransport::new();
    mock.push_json(200, ok(listing_json("lst/1", "casa bonita", "Casa bonita")));
    let state = test_state(&mock);

    let body = body_string(handle(get("/admin/listings/casa%20bonita/edit"), &state).unwrap());
    assert_eq!(mock.requests()[0].url, "http://api.test/listings/slug/casa%20bonita");
    assert!(body.contains(r#"action="/admin/listings/lst%2F1/update""#));

    mock.push_json(200, ok(json!({ "message": "Listing deleted" })));
    handle(post_form("/admin/listings/lst%2F1/delete", ""), &state).unwrap();
    assert_eq!(mock.requests()[1].url, "http://api.test/listings/lst%2F1");
}
