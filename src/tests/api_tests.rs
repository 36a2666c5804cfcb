use crate::api::models::{LeadDraft, LeadStatus, ListingQuery};
use crate::api::transport::Method;
use crate::api::{ApiClient, ApiError};
use crate::tests::utils::{lead_json, listing_json, ok, ok_list, MockTransport, API_URL};
use serde_json::json;

fn client(mock: &std::sync::Arc<MockTransport>) -> ApiClient {
    ApiClient::new(format!("{API_URL}/"), mock.clone())
}

#[test]
fn listings_query_is_appended_in_order() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![listing_json("lst-1", "a", "A")]));

    let query = ListingQuery {
        suburb: Some("Bondi Beach".to_string()),
        room_type: Some("single".to_string()),
        min_price: Some(100),
        max_price: None,
        limit: Some(5),
    };
    let envelope = client(&mock).get_listings(&query).unwrap();

    assert_eq!(envelope.data.len(), 1);
    assert_eq!(envelope.count, Some(1));
    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(
        requests[0].url,
        "http://api.test/listings/public?suburb=Bondi+Beach&room_type=single&min_price=100&limit=5"
    );
}

#[test]
fn empty_query_hits_bare_endpoint() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![]));

    client(&mock).get_listings(&ListingQuery::default()).unwrap();
    assert_eq!(mock.requests()[0].url, "http://api.test/listings/public");
}

#[test]
fn slug_is_encoded_as_one_segment() {
    let mock = MockTransport::new();
    mock.push_json(200, ok(listing_json("lst-1", "casa bonita/2", "Casa")));

    client(&mock).get_listing_by_slug("casa bonita/2").unwrap();
    assert_eq!(
        mock.requests()[0].url,
        "http://api.test/listings/slug/casa%20bonita%2F2"
    );
}

#[test]
fn server_error_message_is_used() {
    let mock = MockTransport::new();
    mock.push_json(404, json!({ "success": false, "error": "Listing not found" }));

    let err = client(&mock).get_listing_by_slug("missing").unwrap_err();
    assert_eq!(err.to_string(), "Listing not found");
    assert_eq!(err.status(), Some(404));
    assert!(err.is_not_found());
}

#[test]
fn non_json_error_body_gets_generic_message() {
    let mock = MockTransport::new();
    mock.push_raw(500, "<html>Bad Gateway</html>");

    let err = client(&mock).get_leads(None).unwrap_err();
    assert_eq!(err.to_string(), "HTTP error! status: 500");
    assert!(!err.is_not_found());
}

#[test]
fn not_found_text_counts_without_404() {
    let mock = MockTransport::new();
    mock.push_json(400, json!({ "success": false, "error": "Resource NOT FOUND" }));

    let err = client(&mock).get_listing_by_slug("x").unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn unsuccessful_envelope_is_rejected() {
    let mock = MockTransport::new();
    mock.push_json(200, json!({ "success": false, "data": null, "error": "Validation failed" }));

    let err = client(&mock).create_lead(&LeadDraft::default()).unwrap_err();
    assert!(matches!(err, ApiError::Rejected(ref m) if m == "Validation failed"));
}

#[test]
fn network_failure_is_reported() {
    let mock = MockTransport::new();
    mock.push_network_error("connection refused");

    let err = client(&mock).get_partners(None).unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.status(), None);
    assert!(!err.is_not_found());
}

#[test]
fn unexpected_body_is_a_decode_error() {
    let mock = MockTransport::new();
    mock.push_json(200, json!({ "unexpected": true }));

    let err = client(&mock).get_leads(None).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn status_update_is_a_single_patch() {
    let mock = MockTransport::new();
    mock.push_json(200, ok(lead_json("l1", "contacted")));

    let envelope = client(&mock)
        .update_lead_status("l1", LeadStatus::Contacted)
        .unwrap();
    assert_eq!(envelope.data.status, LeadStatus::Contacted);

    let requests = mock.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Patch);
    assert_eq!(requests[0].url, "http://api.test/leads/l1/status");
    assert_eq!(requests[0].body, Some(json!({ "status": "contacted" })));
}

#[test]
fn lead_filter_goes_in_query() {
    let mock = MockTransport::new();
    mock.push_json(200, ok_list(vec![]));

    client(&mock).get_leads(Some(LeadStatus::Converted)).unwrap();
    assert_eq!(mock.requests()[0].url, "http://api.test/leads?status=converted");
}

#[test]
fn draft_omits_unset_fields() {
    let mock = MockTransport::new();
    mock.push_json(201, ok(lead_json("l9", "new")));

    let draft = LeadDraft {
        name: Some("Ana".to_string()),
        email: Some("ana@example.com".to_string()),
        listing_id: Some("lst-1".to_string()),
        ..LeadDraft::default()
    };
    client(&mock).create_lead(&draft).unwrap();

    let request = &mock.requests()[0];
    assert_eq!(request.method, Method::Post);
    assert_eq!(
        request.body,
        Some(json!({ "name": "Ana", "email": "ana@example.com", "listing_id": "lst-1" }))
    );
}

#[test]
fn health_check_is_not_enveloped() {
    let mock = MockTransport::new();
    mock.push_json(
        200,
        json!({ "ok": true, "status": "healthy", "timestamp": "2024-05-01T00:00:00Z" }),
    );

    let health = client(&mock).health_check().unwrap();
    assert!(health.ok);
    assert_eq!(health.status, "healthy");
    assert_eq!(mock.requests()[0].url, "http://api.test/api/health");
}

#[test]
fn unhealthy_api_reports_its_status() {
    let mock = MockTransport::new();
    mock.push_raw(503, "Service Unavailable");

    let err = client(&mock).health_check().unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 503, .. }));
    assert_eq!(err.to_string(), "HTTP error! status: 503");
}

#[test]
fn malformed_health_body_is_a_decode_error() {
    let mock = MockTransport::new();
    mock.push_raw(200, "<html>ok</html>");

    let err = client(&mock).health_check().unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
