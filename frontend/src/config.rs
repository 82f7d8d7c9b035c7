//! Build-time settings for the site. Override with environment variables
//! when running `trunk build`.

/// Backend origin serving `/api/*`
pub const API_BASE_URL: &str = match option_env!("API_BASE_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Mailbox that receives booking notifications. Not editable by visitors.
pub const BOOKING_RECIPIENT: &str = match option_env!("BOOKING_RECIPIENT") {
    Some(address) => address,
    None => "consultations@neuracure.ai",
};

/// Height of the fixed navigation bar, subtracted when scrolling to a section
pub const NAV_OFFSET_PX: f64 = 80.0;

/// Viewport width below which the mobile layout is used
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
