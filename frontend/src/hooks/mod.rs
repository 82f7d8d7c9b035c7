pub mod use_booking_modal;
pub mod use_booking_session;
pub mod use_viewport;
