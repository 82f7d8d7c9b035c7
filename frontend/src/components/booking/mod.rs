pub mod booking_calendar;
pub mod consultation_booking;
pub mod contact_form;
pub mod time_slot_picker;

pub use consultation_booking::ConsultationBooking;
