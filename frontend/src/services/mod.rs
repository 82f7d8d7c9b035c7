pub mod api;
pub mod decoration;
pub mod logging;
