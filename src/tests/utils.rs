use crate::api::transport::{ApiRequest, RawResponse, Transport};
use crate::api::ApiError;
use crate::state::AppState;
use astra::{Body, Response};
use http::{Method, Request};
use serde_json::{json, Value};
use std::collections::VecDeque;
use std::io::Read;
use std::sync::{Arc, Mutex};

pub const API_URL: &str = "http://api.test";

/// Replays canned responses in order and records every request it was given.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse, ApiError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push_raw(status, &body.to_string());
    }

    pub fn push_raw(&self, status: u16, body: &str) {
        self.responses.lock().unwrap().push_back(Ok(RawResponse {
            status,
            body: body.to_string(),
        }));
    }

    pub fn push_network_error(&self, message: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(ApiError::Network(message.to_string())));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for MockTransport {
    fn send(&self, req: ApiRequest) -> Result<RawResponse, ApiError> {
        self.requests.lock().unwrap().push(req);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no canned response".to_string())))
    }
}

pub fn test_state(mock: &Arc<MockTransport>) -> AppState {
    AppState::new(API_URL, mock.clone())
}

pub fn ok(data: Value) -> Value {
    json!({ "success": true, "data": data })
}

pub fn ok_list(items: Vec<Value>) -> Value {
    let count = items.len();
    json!({ "success": true, "data": items, "count": count })
}

pub fn listing_json(id: &str, slug: &str, title: &str) -> Value {
    json!({
        "_id": id,
        "title": title,
        "slug": slug,
        "price_per_week": 250,
        "bond": 1000,
        "bills_included": true,
        "address": "12 Beach Rd",
        "suburb": "Bondi",
        "room_type": "double",
        "available_from": "2024-03-01T00:00:00.000Z",
        "min_term_weeks": 12,
        "preferred_tenants": ["Students"],
        "house_features": ["Wifi", "Laundry"],
        "rules": ["No smoking"],
        "images": ["https://img.test/1.jpg", "https://img.test/2.jpg"],
        "owner_id": "owner-1",
        "locale": "en",
        "createdAt": "2024-01-10T09:00:00.000Z",
        "updatedAt": "2024-01-11T09:00:00.000Z"
    })
}

pub fn lead_json(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "name": format!("Lead {id}"),
        "email": format!("{id}@example.com"),
        "phone": "+61 400 000 000",
        "message": "Is the room still available?",
        "listing_id": "lst-1",
        "status": status,
        "createdAt": "2024-02-01T10:30:00.000Z",
        "updatedAt": "2024-02-01T10:30:00.000Z"
    })
}

pub fn partner_json(id: &str, status: &str) -> Value {
    json!({
        "_id": id,
        "name": format!("Partner {id}"),
        "email": format!("{id}@agency.test"),
        "company_name": "Harbour Rentals",
        "status": status,
        "createdAt": "2024-02-01T10:30:00.000Z",
        "updatedAt": "2024-02-01T10:30:00.000Z"
    })
}

pub fn get(uri: &str) -> astra::Request {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_form(uri: &str, form: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn htmx_post(uri: &str, form: &str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("HX-Request", "true")
        .body(Body::from(form.to_string()))
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn header(resp: &Response, name: &str) -> String {
    resp.headers()
        .get(name)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default()
}
