mod api_error;
mod client;
pub mod models;
pub mod transport;

pub use api_error::ApiError;
pub use client::{ApiClient, ApiResult};
pub use transport::{HttpTransport, Transport};
