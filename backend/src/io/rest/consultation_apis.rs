use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use shared::{ConsultationRequest, ConsultationResponse};
use tracing::info;

use crate::domain::ConsultationError;
use crate::AppState;

pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Create a router for consultation booking APIs
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/send-consultation",
        post(send_consultation).fallback(method_not_allowed),
    )
}

/// POST /api/send-consultation
pub async fn send_consultation(
    State(state): State<AppState>,
    Json(request): Json<ConsultationRequest>,
) -> Response {
    info!("POST /api/send-consultation - from {} to {}", request.email, request.recipient);

    match state.consultation_service.book(&request).await {
        Ok(reference) => {
            info!("Booking {} delivered", reference);
            (StatusCode::OK, Json(ConsultationResponse::success())).into_response()
        }
        Err(e) => {
            let status = match &e {
                ConsultationError::MissingFields(_) => StatusCode::BAD_REQUEST,
                ConsultationError::RecipientNotAllowed => StatusCode::FORBIDDEN,
                ConsultationError::Delivery(_) => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (status, Json(ConsultationResponse::failure(e.to_string()))).into_response()
        }
    }
}

async fn method_not_allowed() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ConsultationResponse::failure(METHOD_NOT_ALLOWED_MESSAGE)),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_app, test_app_with, FailingMailer};
    use axum::body::Body;
    use axum::http::{Method, Request};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn booking_request() -> ConsultationRequest {
        ConsultationRequest {
            name: "Jane Doe".to_string(),
            email: "jane@co.com".to_string(),
            phone: "+1 555 123 4567".to_string(),
            date: Some("2026-10-28".to_string()),
            time: Some("10:30 AM".to_string()),
            message: "<b>hi</b>".to_string(),
            recipient: "bookings@example.com".to_string(),
        }
    }

    fn post_json(body: &ConsultationRequest) -> Result<Request<Body>, Box<dyn std::error::Error>> {
        Ok(Request::builder()
            .uri("/api/send-consultation")
            .method(Method::POST)
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(body)?))?)
    }

    async fn read_reply(response: Response) -> Result<ConsultationResponse, Box<dyn std::error::Error>> {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    #[tokio::test]
    async fn test_send_consultation_success() -> Result<(), Box<dyn std::error::Error>> {
        let (app, mailer) = test_app();

        let response = app.oneshot(post_json(&booking_request())?).await?;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_reply(response).await?, ConsultationResponse::success());

        let sent = mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "bookings@example.com");
        assert!(sent[0].html_body.contains("&lt;b&gt;hi&lt;/b&gt;"));
        Ok(())
    }

    #[tokio::test]
    async fn test_send_consultation_mail_failure() -> Result<(), Box<dyn std::error::Error>> {
        let app = test_app_with(Arc::new(FailingMailer), None);

        let response = app.oneshot(post_json(&booking_request())?).await?;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let reply = read_reply(response).await?;
        assert!(!reply.success);
        assert_eq!(reply.message.as_deref(), Some("Failed to send consultation request"));
        Ok(())
    }

    #[tokio::test]
    async fn test_send_consultation_missing_name() -> Result<(), Box<dyn std::error::Error>> {
        let (app, mailer) = test_app();
        let mut request = booking_request();
        request.name.clear();

        let response = app.oneshot(post_json(&request)?).await?;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(!read_reply(response).await?.success);
        assert!(mailer.sent().is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn test_send_consultation_recipient_not_allowed() -> Result<(), Box<dyn std::error::Error>> {
        let app = test_app_with(
            Arc::new(crate::test_support::RecordingMailer::default()),
            Some(vec!["owner@example.com".to_string()]),
        );

        let response = app.oneshot(post_json(&booking_request())?).await?;

        assert_eq!(response.status(), StatusCode::FORBIDDEN);
        assert_eq!(read_reply(response).await?.message.as_deref(), Some("Recipient not allowed"));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_is_method_not_allowed() -> Result<(), Box<dyn std::error::Error>> {
        let (app, _) = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/send-consultation")
                    .method(Method::GET)
                    .body(Body::empty())?,
            )
            .await?;

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        let reply = read_reply(response).await?;
        assert_eq!(reply, ConsultationResponse::failure(METHOD_NOT_ALLOWED_MESSAGE));
        Ok(())
    }
}
