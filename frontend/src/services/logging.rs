use gloo::net::http::Request;
use shared::LogRequest;
use wasm_bindgen_futures::spawn_local;

use crate::config::API_BASE_URL;

/// Forwards frontend events to the backend log so they show up next to
/// the server's own tracing output. Also echoes to the browser console.
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        log::debug!("[{}] {}", component, message);
        Self::log("debug", message, component);
    }

    pub fn info_with_component(component: &str, message: &str) {
        log::info!("[{}] {}", component, message);
        Self::log("info", message, component);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        log::warn!("[{}] {}", component, message);
        Self::log("warn", message, component);
    }

    pub fn error_with_component(component: &str, message: &str) {
        log::error!("[{}] {}", component, message);
        Self::log("error", message, component);
    }

    fn log(level: &str, message: &str, component: &str) {
        let request = LogRequest {
            level: level.to_string(),
            message: message.to_string(),
            component: Some(component.to_string()),
        };

        // Send log asynchronously without blocking
        spawn_local(async move {
            let url = format!("{}/api/logs", API_BASE_URL);
            match Request::post(&url).json(&request) {
                Ok(request) => {
                    let _ = request.send().await;
                }
                Err(e) => gloo::console::error!(format!("Failed to encode log line: {}", e)),
            }
        });
    }
}
