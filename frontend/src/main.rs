mod app;
mod components;
mod config;
mod hooks;
mod services;

use app::App;

fn main() {
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        gloo::console::error!(format!("Failed to initialise console logging: {}", e));
    }
    log::info!("Starting NeuraCure frontend against {}", config::API_BASE_URL);
    yew::Renderer::<App>::new().render();
}
