use crate::api::transport::Method;
use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, header, htmx_post, lead_json, ok, ok_list, partner_json, post_form,
    test_state, MockTransport,
};
use serde_json::json;

#[test]
fn admin_root_redirects_to_leads() {
    let mock = MockTransport::new();
    let resp = handle(get("/admin"), &test_state(&mock)).unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/admin/leads");
}

#[test]
fn leads_page_lists_rows_with_current_status_disabled() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![lead_json("l1", "contacted")]));

    let resp = handle(get("/admin/leads"), &test_state(&mock)).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains(r#"id="lead-l1""#));
    assert!(body.contains(r#"value="contacted" disabled"#));
    assert!(!body.contains(r#"value="converted" disabled"#));
    // "Mark as new" is offered since the lead is not new.
    assert!(body.contains(r#"value="new""#));
    assert!(body.contains(r#"hx-post="/admin/leads/l1/status""#));
}

#[test]
fn status_filter_is_forwarded() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![]));

    let body = body_string(handle(get("/admin/leads?status=new"), &test_state(&mock)).unwrap());
    assert_eq!(mock.requests()[0].url, "http://api.test/leads?status=new");
    // Empty state mentions the filter.
    assert!(body.contains("empty-panel"));
    assert!(body.contains("new"));
}

#[test]
fn unknown_status_filter_is_ignored() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![]));

    handle(get("/admin/leads?status=archived"), &test_state(&mock)).unwrap();
    assert_eq!(mock.requests()[0].url, "http://api.test/leads");
}

#[test]
fn leads_failure_shows_error_panel() {
    let mock = MockTransport::new();
    mock.push_network_error("connection refused");

    let body = body_string(handle(get("/admin/leads"), &test_state(&mock)).unwrap());
    assert!(body.contains("error-panel"));
    assert!(!body.contains("empty-panel"));
}

#[test]
fn status_change_sends_one_patch_and_rerenders_only_that_row() {
    let mock = MockTransport::new();
    // The API echoes the stale status; the row must still show the target.
    mock.push_json(200, ok(lead_json("l1", "new")));

    let resp = handle(
        htmx_post("/admin/leads/l1/status", "status=converted"),
        &test_state(&mock),
    )
    .unwrap();
    assert_eq!(resp.status(), 200);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Patch);
    assert_eq!(requests[0].url, "http://api.test/leads/l1/status");
    assert_eq!(requests[0].body, Some(json!({ "status": "converted" })));

    let body = body_string(resp);
    assert!(body.starts_with(r#"<li id="lead-l1""#));
    assert!(body.contains(r#"data-status="converted""#));
    assert!(body.contains(r#"value="converted" disabled"#));
    assert!(!body.contains("lead-l2"));
}

#[test]
fn failed_status_change_alerts_without_touching_row() {
    let mock = MockTransport::new();
    mock.push_json(500, json!({ "success": false, "error": "Database unavailable" }));

    let resp = handle(
        htmx_post("/admin/leads/l1/status", "status=discarded"),
        &test_state(&mock),
    )
    .unwrap();

    assert_eq!(header(&resp, "HX-Retarget"), "#lead-l1-alert");
    let body = body_string(resp);
    assert!(body.contains(r#"role="alert""#));
    assert!(body.contains("Database unavailable"));
    assert!(!body.contains(r#"id="lead-l1""#));
    assert_eq!(mock.requests().len(), 1);
}

#[test]
fn plain_form_post_redirects_back_to_list() {
    let mock = MockTransport::new();
    mock.push_json(200, ok(lead_json("l1", "contacted")));

    let resp = handle(
        post_form("/admin/leads/l1/status", "status=contacted"),
        &test_state(&mock),
    )
    .unwrap();
    assert_eq!(resp.status(), 303);
    assert_eq!(header(&resp, "Location"), "/admin/leads");
}

#[test]
fn unknown_target_status_is_rejected_before_any_call() {
    let mock = MockTransport::new();

    let result = handle(
        htmx_post("/admin/leads/l1/status", "status=unknown"),
        &test_state(&mock),
    );
    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert!(mock.requests().is_empty());
}

#[test]
fn partners_page_and_status_change() {
    let mock = MockTransport::new();
    mock.push_json(
        200,
        ok_list(vec![partner_json("p1", "pending"), partner_json("p2", "active")]),
    );
    let state = test_state(&mock);

    let body = body_string(handle(get("/admin/partners"), &state).unwrap());
    assert!(body.contains(r#"id="partner-p1""#));
    assert!(body.contains(r#"id="partner-p2""#));
    assert!(body.contains("Harbour Rentals"));

    mock.push_json(200, ok(partner_json("p1", "active")));
    let resp = handle(htmx_post("/admin/partners/p1/status", "status=active"), &state).unwrap();
    let body = body_string(resp);

    assert_eq!(mock.requests()[1].url, "http://api.test/partners/p1/status");
    assert!(body.contains(r#"data-status="active""#));
    assert!(!body.contains("partner-p2"));
}

#[test]
fn lead_without_timestamps_still_renders() {
    let mock = MockTransport::new();
    let mut bare = lead_json("l2", "new");
    bare.as_object_mut().unwrap().remove("createdAt");
    bare.as_object_mut().unwrap().remove("updatedAt");
    mock.push_json(200, ok_list(vec![lead_json("l1", "contacted"), bare]));

    let body = body_string(handle(get("/admin/leads"), &test_state(&mock)).unwrap());
    assert!(body.contains(r#"id="lead-l1""#));
    assert!(body.contains(r#"id="lead-l2""#));
    assert!(body.contains("📅 -"));
    assert!(!body.contains("error-panel"));
}

#[test]
fn encoded_id_reaches_the_api_encoded_once() {
    let mock = MockTransport::new();
    mock.push_json(500, json!({ "success": false, "error": "Database unavailable" }));

    let resp = handle(
        htmx_post("/admin/leads/a%2Fb/status", "status=contacted"),
        &test_state(&mock),
    )
    .unwrap();

    assert_eq!(mock.requests()[0].url, "http://api.test/leads/a%2Fb/status");
    assert_eq!(header(&resp, "HX-Retarget"), "#lead-a_b-alert");
}

#[test]
fn row_links_and_ids_are_escaped() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![lead_json("a/b c", "new")]));

    let body = body_string(handle(get("/admin/leads"), &test_state(&mock)).unwrap());
    assert!(body.contains(r#"id="lead-a_b_c""#));
    assert!(body.contains(r#"id="lead-a_b_c-alert""#));
    assert!(body.contains(r##"hx-target="#lead-a_b_c""##));
    assert!(body.contains(r#"hx-post="/admin/leads/a%2Fb%20c/status""#));
}
