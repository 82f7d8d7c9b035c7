//! HTTP endpoints. Handlers only translate between JSON and the domain
//! services; status codes for domain failures are decided here.

pub mod consultation_apis;
pub mod logging_apis;
