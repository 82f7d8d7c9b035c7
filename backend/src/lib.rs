//! # NeuraCure backend
//!
//! Small axum service behind the marketing site:
//! - **config**: environment driven settings
//! - **domain**: turning booking requests into notification emails
//! - **io**: REST handlers for bookings and the frontend log sink
//!
//! The built frontend is served from the same origin for everything that
//! is not under `/api`.

pub mod config;
pub mod domain;
pub mod io;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::domain::{ConsultationService, DisabledMailer, Mailer, SmtpMailer};

/// Main application state that holds all services
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub consultation_service: ConsultationService,
}

impl AppState {
    pub fn new(config: Config, mailer: Arc<dyn Mailer>) -> Self {
        let config = Arc::new(config);
        Self {
            consultation_service: ConsultationService::new(mailer, config.clone()),
            config,
        }
    }
}

/// Initialize the backend with all required services
pub fn initialize_backend(config: Config) -> Result<AppState> {
    let mailer: Arc<dyn Mailer> = match &config.smtp {
        Some(smtp) => Arc::new(SmtpMailer::new(smtp)?),
        None => {
            warn!("EMAIL_USER / EMAIL_PASS not set; consultation emails will fail until configured");
            Arc::new(DisabledMailer)
        }
    };

    if let Some(allowed) = &config.allowed_recipients {
        info!("Booking recipients restricted to {:?}", allowed);
    }

    Ok(AppState::new(config, mailer))
}

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Result<Router> {
    let origin = app_state
        .config
        .cors_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("CORS_ORIGIN '{}' is not a valid header value", app_state.config.cors_origin))?;

    // CORS setup to allow the trunk dev server to call the API
    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(io::rest::consultation_apis::router())
        .merge(io::rest::logging_apis::router());

    let frontend = ServeDir::new(&app_state.config.frontend_dist);

    Ok(Router::new()
        .nest("/api", api_routes)
        .fallback_service(frontend)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(app_state))
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Arc, Mutex};

    use anyhow::anyhow;
    use async_trait::async_trait;
    use axum::Router;

    use crate::config::Config;
    use crate::domain::{Mailer, OutgoingEmail};
    use crate::{create_router, AppState};

    #[derive(Default)]
    pub struct RecordingMailer {
        sent: Mutex<Vec<OutgoingEmail>>,
    }

    impl RecordingMailer {
        pub fn sent(&self) -> Vec<OutgoingEmail> {
            self.sent.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl Mailer for RecordingMailer {
        async fn send(&self, email: OutgoingEmail) -> anyhow::Result<()> {
            self.sent.lock().unwrap().push(email);
            Ok(())
        }
    }

    pub struct FailingMailer;

    #[async_trait]
    impl Mailer for FailingMailer {
        async fn send(&self, _email: OutgoingEmail) -> anyhow::Result<()> {
            Err(anyhow!("smtp unavailable"))
        }
    }

    pub fn test_app_with(mailer: Arc<dyn Mailer>, allowed_recipients: Option<Vec<String>>) -> Router {
        let config = Config {
            allowed_recipients,
            ..Config::default()
        };
        create_router(AppState::new(config, mailer)).unwrap()
    }

    pub fn test_app() -> (Router, Arc<RecordingMailer>) {
        let mailer = Arc::new(RecordingMailer::default());
        (test_app_with(mailer.clone(), None), mailer)
    }
}
