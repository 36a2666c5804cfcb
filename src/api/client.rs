// api/client.rs
use crate::api::models::{
    DeleteAck, Envelope, ErrorBody, HealthStatus, Lead, LeadDraft, LeadStatus, Listing,
    ListingDraft, ListingQuery, Partner, PartnerDraft, PartnerStatus,
};
use crate::api::transport::{ApiRequest, Method, RawResponse, Transport};
use crate::api::ApiError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use tracing::{debug, error};

pub type ApiResult<T> = Result<Envelope<T>, ApiError>;

/// Typed access to the EasyLease REST API. The only place network I/O happens.
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            transport,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // -- Listings ----------------------------------------------------------

    pub fn get_listings(&self, query: &ListingQuery) -> ApiResult<Vec<Listing>> {
        let qs = query.to_query_string();
        let endpoint = if qs.is_empty() {
            "/listings/public".to_string()
        } else {
            format!("/listings/public?{qs}")
        };
        self.request(Method::Get, &endpoint, None)
    }

    pub fn get_listing_by_slug(&self, slug: &str) -> ApiResult<Listing> {
        self.request(Method::Get, &format!("/listings/slug/{}", segment(slug)), None)
    }

    pub fn create_listing(&self, draft: &ListingDraft) -> ApiResult<Listing> {
        self.request(Method::Post, "/listings", Some(to_body(draft)?))
    }

    pub fn update_listing(&self, id: &str, draft: &ListingDraft) -> ApiResult<Listing> {
        self.request(
            Method::Put,
            &format!("/listings/{}", segment(id)),
            Some(to_body(draft)?),
        )
    }

    pub fn delete_listing(&self, id: &str) -> ApiResult<DeleteAck> {
        self.request(Method::Delete, &format!("/listings/{}", segment(id)), None)
    }

    // -- Leads -------------------------------------------------------------

    pub fn get_leads(&self, status: Option<LeadStatus>) -> ApiResult<Vec<Lead>> {
        let endpoint = match status {
            Some(s) => format!("/leads?status={}", s.as_str()),
            None => "/leads".to_string(),
        };
        self.request(Method::Get, &endpoint, None)
    }

    pub fn create_lead(&self, draft: &LeadDraft) -> ApiResult<Lead> {
        self.request(Method::Post, "/leads", Some(to_body(draft)?))
    }

    pub fn update_lead_status(&self, id: &str, status: LeadStatus) -> ApiResult<Lead> {
        self.request(
            Method::Patch,
            &format!("/leads/{}/status", segment(id)),
            Some(json!({ "status": status })),
        )
    }

    // -- Partners ----------------------------------------------------------

    pub fn get_partners(&self, status: Option<PartnerStatus>) -> ApiResult<Vec<Partner>> {
        let endpoint = match status {
            Some(s) => format!("/partners?status={}", s.as_str()),
            None => "/partners".to_string(),
        };
        self.request(Method::Get, &endpoint, None)
    }

    pub fn create_partner(&self, draft: &PartnerDraft) -> ApiResult<Partner> {
        self.request(Method::Post, "/partners", Some(to_body(draft)?))
    }

    pub fn update_partner_status(&self, id: &str, status: PartnerStatus) -> ApiResult<Partner> {
        self.request(
            Method::Patch,
            &format!("/partners/{}/status", segment(id)),
            Some(json!({ "status": status })),
        )
    }

    // -- Health ------------------------------------------------------------

    /// Not enveloped, unlike everything else.
    pub fn health_check(&self) -> Result<HealthStatus, ApiError> {
        const ENDPOINT: &str = "/api/health";
        let raw = self.send(Method::Get, ENDPOINT, None)?;
        if !raw.is_success() {
            let err = status_error(&raw);
            error!(method = "GET", endpoint = ENDPOINT, error = %err, "API request failed");
            return Err(err);
        }
        decode(&raw.body).map_err(|err| {
            error!(method = "GET", endpoint = ENDPOINT, error = %err, "API request failed");
            err
        })
    }

    // -- Plumbing ----------------------------------------------------------

    fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> ApiResult<T> {
        let raw = self.send(method, endpoint, body)?;

        if !raw.is_success() {
            let err = status_error(&raw);
            error!(method = method.as_str(), endpoint, error = %err, "API request failed");
            return Err(err);
        }

        // `success: false` usually comes with `data: null`, so check it before
        // decoding the payload.
        let head: ErrorBody = serde_json::from_str(&raw.body).unwrap_or_default();
        if head.success == Some(false) {
            let message = head
                .error
                .unwrap_or_else(|| "Request was not successful".to_string());
            error!(method = method.as_str(), endpoint, error = %message, "API request failed");
            return Err(ApiError::Rejected(message));
        }

        let envelope: Envelope<T> = decode(&raw.body).map_err(|err| {
            error!(method = method.as_str(), endpoint, error = %err, "API request failed");
            err
        })?;

        Ok(envelope)
    }

    fn send(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<serde_json::Value>,
    ) -> Result<RawResponse, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        debug!(method = method.as_str(), %url, "API request");

        self.transport
            .send(ApiRequest { method, url, body })
            .map_err(|err| {
                error!(method = method.as_str(), endpoint, error = %err, "API request failed");
                err
            })
    }
}

fn status_error(raw: &RawResponse) -> ApiError {
    // A non-JSON error body still produces the generic status message.
    let parsed: ErrorBody = serde_json::from_str(&raw.body).unwrap_or_default();
    ApiError::from_status(raw.status, parsed.error)
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn to_body<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Percent-encode a single path segment.
fn segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}
