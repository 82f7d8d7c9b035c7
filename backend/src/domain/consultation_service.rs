//! Turns a booking request into a notification email and hands it to the
//! configured [`Mailer`].

use std::sync::Arc;

use shared::ConsultationRequest;
use thiserror::Error;
use tracing::{error, info};
use uuid::Uuid;

use super::email_service::{Mailer, OutgoingEmail};
use crate::config::Config;

pub const NO_MESSAGE_PLACEHOLDER: &str = "No additional message";
pub const NOT_PROVIDED: &str = "Not provided";

#[derive(Debug, Error)]
pub enum ConsultationError {
    #[error("Missing required fields: {0}")]
    MissingFields(String),
    #[error("Recipient not allowed")]
    RecipientNotAllowed,
    #[error("Failed to send consultation request")]
    Delivery(#[source] anyhow::Error),
}

#[derive(Clone)]
pub struct ConsultationService {
    mailer: Arc<dyn Mailer>,
    config: Arc<Config>,
}

impl ConsultationService {
    pub fn new(mailer: Arc<dyn Mailer>, config: Arc<Config>) -> Self {
        Self { mailer, config }
    }

    /// Validate the request, compose the notification and deliver it.
    /// Returns the reference id stamped on the email.
    pub async fn book(&self, request: &ConsultationRequest) -> Result<Uuid, ConsultationError> {
        validate_request(request)?;

        if !self.config.recipient_allowed(&request.recipient) {
            info!("Rejected booking for non-allowed recipient {}", request.recipient);
            return Err(ConsultationError::RecipientNotAllowed);
        }

        let reference = Uuid::new_v4();
        let email = compose_email(request, reference);
        info!("Booking {} from {} for {:?} {:?}", reference, request.email, request.date, request.time);

        self.mailer.send(email).await.map_err(|e| {
            error!("Booking {} could not be delivered: {:#}", reference, e);
            ConsultationError::Delivery(e)
        })?;

        Ok(reference)
    }
}

fn validate_request(request: &ConsultationRequest) -> Result<(), ConsultationError> {
    let missing: Vec<&str> = [
        ("name", &request.name),
        ("email", &request.email),
        ("recipient", &request.recipient),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(field, _)| field)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ConsultationError::MissingFields(missing.join(", ")))
    }
}

pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v,
        _ => placeholder,
    }
}

pub fn compose_email(request: &ConsultationRequest, reference: Uuid) -> OutgoingEmail {
    let rows = [
        ("Name", request.name.trim()),
        ("Email", request.email.trim()),
        ("Phone", or_placeholder(Some(request.phone.as_str()), NOT_PROVIDED)),
        ("Date", or_placeholder(request.date.as_deref(), NOT_PROVIDED)),
        ("Time", or_placeholder(request.time.as_deref(), NOT_PROVIDED)),
        ("Message", or_placeholder(Some(request.message.as_str()), NO_MESSAGE_PLACEHOLDER)),
    ];

    let details: String = rows
        .iter()
        .map(|(label, value)| format!("<p><strong>{}:</strong> {}</p>\n", label, escape_html(value)))
        .collect();

    let html_body = format!(
        "<h2>New Consultation Request</h2>\n{}<p style=\"color:#64748b\">Reference: {}</p>\n",
        details, reference
    );

    OutgoingEmail {
        to: request.recipient.trim().to_string(),
        reply_to: Some(request.email.trim().to_string()),
        subject: format!("New Consultation Booking from {}", request.name.trim()),
        html_body,
    }
}
