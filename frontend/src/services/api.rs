use async_trait::async_trait;
use booking::{ConsultationSender, SendError};
use gloo::net::http::Request;
use shared::{ConsultationRequest, ConsultationResponse};

use crate::config::API_BASE_URL;

/// API client for communicating with the backend server
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the configured base URL
    pub fn new() -> Self {
        Self::with_base_url(API_BASE_URL.to_string())
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl ConsultationSender for ApiClient {
    /// POST the booking to `/api/send-consultation`
    async fn send(&self, request: &ConsultationRequest) -> Result<ConsultationResponse, SendError> {
        let response = Request::post(&self.url("/api/send-consultation"))
            .json(request)
            .map_err(|e| SendError::Network(format!("Failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| SendError::Network(e.to_string()))?;

        if !response.ok() {
            // The endpoint explains most failures in a JSON body; fall back to the bare status
            let message = response
                .json::<ConsultationResponse>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(SendError::Status {
                status: response.status(),
                message,
            });
        }

        response
            .json::<ConsultationResponse>()
            .await
            .map_err(|e| SendError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::with_base_url("https://api.example.com/".to_string());
        assert_eq!(
            client.url("/api/send-consultation"),
            "https://api.example.com/api/send-consultation"
        );
    }
}
