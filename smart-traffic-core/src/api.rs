//! Backend API failures shared by the prediction and model endpoints
use thiserror::Error;

/// Fallback message when the backend rejects a prediction without saying why.
pub const PREDICTION_FAILED: &str = "Prediction failed";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error")]
    Status(u16),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Malformed response: {0}")]
    Decode(String),
    #[error("{0}")]
    Backend(String),
}

impl ApiError {
    #[must_use]
    pub fn from_backend(message: Option<String>) -> Self {
        Self::Backend(
            message
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| PREDICTION_FAILED.to_string()),
        )
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_message_defaults_when_missing() {
        assert_eq!(
            ApiError::from_backend(None).to_string(),
            "Prediction failed"
        );
        assert_eq!(
            ApiError::from_backend(Some(" ".into())).to_string(),
            "Prediction failed"
        );
        assert_eq!(
            ApiError::from_backend(Some("model not loaded".into())).to_string(),
            "model not loaded"
        );
    }

    #[test]
    fn status_errors_read_as_network_errors() {
        assert_eq!(ApiError::Status(503).to_string(), "Network error");
    }
}
