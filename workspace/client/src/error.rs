use thiserror::Error;

pub use common::ValidationError;

/// Failure reported by an [`ApiTransport`](crate::transport::ApiTransport)
/// before any HTTP status was received.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Error types for the dashboard client.
///
/// Every variant renders as the message shown in its operation's error slot.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ClientError {
    /// Input rejected before dispatch
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-success HTTP status
    #[error("{message}")]
    Request { status: u16, message: String },

    /// Network failure or unparsable response
    #[error("{0}")]
    Transport(String),

    /// The in-flight task was dropped before its response arrived
    #[error("Request was abandoned before it completed")]
    Abandoned,
}

const TRANSPORT_FALLBACK: &str = "Network error";

impl From<TransportError> for ClientError {
    fn from(error: TransportError) -> Self {
        ClientError::transport(error.0)
    }
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            ClientError::Transport(TRANSPORT_FALLBACK.to_string())
        } else {
            ClientError::Transport(message)
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_displays_message_verbatim() {
        let err = ClientError::Request {
            status: 500,
            message: "db down".to_string(),
        };
        assert_eq!(err.to_string(), "db down");
    }

    #[test]
    fn test_empty_transport_message_falls_back() {
        let err: ClientError = TransportError::new("  ").into();
        assert_eq!(err, ClientError::Transport("Network error".to_string()));

        let err: ClientError = TransportError::new("connection refused").into();
        assert_eq!(err.to_string(), "connection refused");
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: ClientError = ValidationError::CoveredExceedsTotal.into();
        assert!(err.is_validation());
        assert_eq!(
            err.to_string(),
            "Covered households cannot exceed total households"
        );
    }
}
