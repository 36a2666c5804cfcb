use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, refused connection, reset).
    #[error("Network error: {0}")]
    Network(String),

    /// Non-2xx response. `message` is the server's `error` field when it sent one.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// 2xx response whose envelope carried `success: false`.
    #[error("{0}")]
    Rejected(String),

    /// Body did not match the expected shape.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16, server_message: Option<String>) -> Self {
        let message = server_message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {status}"));

        ApiError::Status { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure means "this resource does not exist".
    ///
    /// The API does not send a structured code for this, so besides a 404 the
    /// message text is searched for "not found". Keep the substring check only
    /// until the backend exposes an error code.
    pub fn is_not_found(&self) -> bool {
        if self.status() == Some(404) {
            return true;
        }

        match self {
            ApiError::Status { message, .. } | ApiError::Rejected(message) => {
                message.to_ascii_lowercase().contains("not found")
            }
            _ => false,
        }
    }
}
