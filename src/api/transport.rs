// api/transport.rs
use crate::api::ApiError;
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

/// One outgoing API call. `url` is absolute (base URL already joined).
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<serde_json::Value>,
}

#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Executes exactly one HTTP exchange. Implementations must not retry.
pub trait Transport: Send + Sync {
    fn send(&self, req: ApiRequest) -> Result<RawResponse, ApiError>;
}

pub struct HttpTransport {
    client: Client,
}

/// Headers sent with every API call.
pub fn default_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    // Every page must reflect current server state.
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache, no-store"));
    headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
    headers
}

impl HttpTransport {
    pub fn new() -> Result<Self, ApiError> {
        let client = Client::builder()
            .default_headers(default_headers())
            // reqwest's blocking client defaults to 30s; requests here never time out.
            .timeout(None)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn send(&self, req: ApiRequest) -> Result<RawResponse, ApiError> {
        let builder = match req.method {
            Method::Get => self.client.get(&req.url),
            Method::Post => self.client.post(&req.url),
            Method::Put => self.client.put(&req.url),
            Method::Patch => self.client.patch(&req.url),
            Method::Delete => self.client.delete(&req.url),
        };

        let builder = match &req.body {
            Some(body) => builder.json(body),
            None => builder,
        };

        let response = builder
            .send()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ApiError::Network(format!("reading body failed: {e}")))?;

        Ok(RawResponse { status, body })
    }
}
