use async_trait::async_trait;

use crate::error::TransportError;

/// Raw HTTP reply: status code and body text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The seam between the request orchestration and the HTTP stack.
///
/// Implementations return `Err` only when no status was received; any status,
/// success or not, comes back as an [`HttpReply`].
#[async_trait(?Send)]
pub trait ApiTransport {
    async fn get(&self, url: &str) -> Result<HttpReply, TransportError>;

    /// Sends `body`, already serialized as JSON.
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, TransportError>;
}
