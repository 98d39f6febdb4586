//! API Error Types
//!
//! Every call into the recommender backend resolves to `Result<T, ApiError>`.
//! The UI collapses all variants to one message per call site, but the
//! variant is kept so the log line says what actually went wrong.

use thiserror::Error;

/// Convenience alias used by every API call.
pub type Result<T> = std::result::Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, CORS, timeout).
    #[error("transport error: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body did not match the expected shape.
    #[error("decode error: {0}")]
    Decode(String),

    /// The request body could not be serialized.
    #[error("encode error: {0}")]
    Encode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status { status: 404, message: "Product not found".to_string() };
        assert_eq!(err.to_string(), "HTTP 404: Product not found");
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn test_json_error_becomes_decode() {
        let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert_eq!(err.status(), None);
    }
}
