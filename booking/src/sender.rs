use async_trait::async_trait;
use shared::{ConsultationRequest, ConsultationResponse};

/// Why a call to the email-dispatch endpoint did not produce a response body
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendError {
    /// Non-2xx status. `message` carries the endpoint's own explanation when
    /// the body could be read as a [`ConsultationResponse`].
    #[error("endpoint responded with HTTP {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("could not decode response: {0}")]
    Decode(String),
}

/// The email-dispatch collaborator invoked once per submission attempt.
///
/// Futures are `?Send` because the browser implementation runs on the
/// single-threaded event loop.
#[async_trait(?Send)]
pub trait ConsultationSender {
    async fn send(&self, request: &ConsultationRequest) -> Result<ConsultationResponse, SendError>;
}
