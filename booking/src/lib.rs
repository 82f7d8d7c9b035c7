//! # Consultation booking core
//!
//! UI-agnostic logic behind the booking modal:
//! - **calendar**: month grids and the rule for which days can be booked
//! - **time_slot**: the fixed set of half-hour consultation slots
//! - **validation**: contact form fields and their inline checks
//! - **sender**: the seam to the email-dispatch endpoint
//! - **session**: the four-step booking state machine tying it together
//!
//! The frontend drives a [`BookingSession`] from user events and renders
//! whatever state it exposes; nothing in this crate touches the DOM or
//! reads the wall clock.

pub mod calendar;
pub mod sender;
pub mod session;
pub mod time_slot;
pub mod validation;

pub use calendar::{
    compute_month_grid, generate_calendar_month, is_date_disabled, CalendarDay, CalendarDayType,
    CalendarMonth, GridCell, YearMonth, DAY_NAMES,
};
pub use sender::{ConsultationSender, SendError};
pub use session::{
    BookingSession, BookingStep, PendingSubmission, SubmissionId, SubmissionState, SubmitRejected,
};
pub use time_slot::{InvalidTimeSlot, TimeSlot};
pub use validation::{validate_contact, ContactDetails, ContactField, FieldError, FieldErrors};
