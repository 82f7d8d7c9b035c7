use serde::{Deserialize, Serialize};

/// Payload posted to `/api/send-consultation` when a visitor books a consultation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRequest {
    /// Visitor's full name (required)
    #[serde(default)]
    pub name: String,
    /// Visitor's email address (required)
    #[serde(default)]
    pub email: String,
    /// Optional phone number, free-form
    #[serde(default)]
    pub phone: String,
    /// Chosen calendar date in YYYY-MM-DD format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Chosen slot label, e.g. "10:30 AM"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Free-text note from the visitor, may be empty
    #[serde(default)]
    pub message: String,
    /// Destination mailbox for the booking notification, fixed by the site
    #[serde(default)]
    pub recipient: String,
}

/// Reply from `/api/send-consultation`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationResponse {
    pub success: bool,
    /// Reason for a failure, shown to the visitor verbatim when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ConsultationResponse {
    pub fn success() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
        }
    }
}

/// Log line forwarded from the browser to the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRequest {
    /// One of debug, info, warn, error (anything else is logged as info)
    pub level: String,
    pub message: String,
    pub component: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogResponse {
    pub success: bool,
}
