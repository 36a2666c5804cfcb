use crate::api::{ApiClient, Transport};
use std::sync::Arc;

/// Everything a request handler needs. Built once in `main`, shared read-only
/// by every worker.
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
}

impl AppState {
    pub fn new(api_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            api: ApiClient::new(api_url, transport),
        }
    }

    pub fn api_url(&self) -> &str {
        self.api.base_url()
    }
}
