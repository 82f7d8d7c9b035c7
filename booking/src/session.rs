//! Booking session state machine.
//!
//! One [`BookingSession`] backs one open instance of the booking modal. It
//! walks the visitor through four linear steps:
//!
//! ```text
//! SelectDate ──▶ SelectTime ──▶ ContactDetails ──▶ Confirmation
//!      ◀────────────  ◀─────────────
//! ```
//!
//! Forward moves require the current step's selection; `Confirmation` is
//! terminal and only [`BookingSession::close`] leaves it. Every transition
//! is synchronous except submission, which is split into
//! [`BookingSession::begin_submit`] and [`BookingSession::complete_submit`]
//! so a UI can hold the session in a reducer across the network call.
//! Each begun submission carries a [`SubmissionId`]; outcomes for any other
//! id are dropped, so a reply that arrives after the modal was closed and
//! reopened never lands on a newer attempt.

use chrono::NaiveDate;
use log::{info, warn};
use shared::{ConsultationRequest, ConsultationResponse};

use crate::calendar::{generate_calendar_month, is_date_disabled, CalendarMonth, YearMonth};
use crate::sender::{ConsultationSender, SendError};
use crate::time_slot::TimeSlot;
use crate::validation::{validate_contact, ContactDetails, ContactField, FieldErrors};

pub const BOOKING_SUCCESS_MESSAGE: &str = "Consultation booked successfully! We'll contact you soon.";
pub const BOOKING_REJECTED_MESSAGE: &str = "Failed to book consultation";
pub const SEND_FAILED_MESSAGE: &str = "Failed to send consultation request";
pub const UNEXPECTED_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

/// Step of the booking flow, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BookingStep {
    SelectDate,
    SelectTime,
    ContactDetails,
    Confirmation,
}

impl BookingStep {
    pub const ALL: [BookingStep; 4] = [
        BookingStep::SelectDate,
        BookingStep::SelectTime,
        BookingStep::ContactDetails,
        BookingStep::Confirmation,
    ];

    /// 1-based position for the progress indicator
    pub fn number(&self) -> u8 {
        match self {
            BookingStep::SelectDate => 1,
            BookingStep::SelectTime => 2,
            BookingStep::ContactDetails => 3,
            BookingStep::Confirmation => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BookingStep::SelectDate => "Select Date",
            BookingStep::SelectTime => "Choose Time",
            BookingStep::ContactDetails => "Your Details",
            BookingStep::Confirmation => "Confirmation",
        }
    }
}

/// Transient state of the last submission attempt
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub is_loading: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Identifies one begun submission within a session's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

/// A request ready to be sent, tagged with the attempt it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: SubmissionId,
    pub request: ConsultationRequest,
}

/// Why `begin_submit` refused to start a submission
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("submission is only possible from the contact step (currently {0:?})")]
    WrongStep(BookingStep),
    #[error("a submission is already in flight")]
    InFlight,
    #[error("contact details are incomplete: {0}")]
    Invalid(FieldErrors),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingSession {
    today: NaiveDate,
    step: BookingStep,
    displayed_month: YearMonth,
    selected_date: Option<NaiveDate>,
    selected_time: Option<TimeSlot>,
    contact: ContactDetails,
    field_errors: FieldErrors,
    submission: SubmissionState,
    in_flight: Option<SubmissionId>,
    /// Attempts begun so far; survives `close` and `restart`
    attempts: u64,
}

impl BookingSession {
    /// Fresh session showing the month that contains `today`
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            step: BookingStep::SelectDate,
            displayed_month: YearMonth::containing(today),
            selected_date: None,
            selected_time: None,
            contact: ContactDetails::default(),
            field_errors: FieldErrors::default(),
            submission: SubmissionState::default(),
            in_flight: None,
            attempts: 0,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn step(&self) -> BookingStep {
        self.step
    }

    pub fn displayed_month(&self) -> YearMonth {
        self.displayed_month
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date
    }

    pub fn selected_time(&self) -> Option<TimeSlot> {
        self.selected_time
    }

    pub fn contact(&self) -> &ContactDetails {
        &self.contact
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    pub fn is_loading(&self) -> bool {
        self.submission.is_loading
    }

    /// The displayed month, annotated with selectability and selection
    pub fn calendar_month(&self) -> CalendarMonth {
        generate_calendar_month(self.displayed_month, self.today, self.selected_date)
    }

    pub fn can_advance_from_date(&self) -> bool {
        self.step == BookingStep::SelectDate && self.selected_date.is_some()
    }

    pub fn can_advance_from_time(&self) -> bool {
        self.step == BookingStep::SelectTime && self.selected_time.is_some()
    }

    /// Pick a day on the date step. Disabled days are ignored; returns
    /// whether the pick stuck.
    pub fn select_date(&mut self, date: NaiveDate) -> bool {
        if self.step != BookingStep::SelectDate || is_date_disabled(date, self.today) {
            return false;
        }
        self.selected_date = Some(date);
        true
    }

    pub fn advance_from_date(&mut self) -> bool {
        if !self.can_advance_from_date() {
            return false;
        }
        self.step = BookingStep::SelectTime;
        true
    }

    /// Single-select: replaces any previous slot
    pub fn select_time(&mut self, slot: TimeSlot) {
        self.selected_time = Some(slot);
    }

    pub fn advance_from_time(&mut self) -> bool {
        if !self.can_advance_from_time() {
            return false;
        }
        self.step = BookingStep::ContactDetails;
        true
    }

    pub fn retreat_to_date(&mut self) -> bool {
        if self.step != BookingStep::SelectTime {
            return false;
        }
        self.step = BookingStep::SelectDate;
        true
    }

    pub fn retreat_to_time(&mut self) -> bool {
        if self.step != BookingStep::ContactDetails || self.submission.is_loading {
            return false;
        }
        self.step = BookingStep::SelectTime;
        true
    }

    /// Free-form edit; clears the inline error recorded for that field
    pub fn update_contact_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.contact.set(field, value.into());
        self.field_errors.clear(field);
    }

    pub fn next_month(&mut self) {
        self.displayed_month = self.displayed_month.next();
    }

    pub fn prev_month(&mut self) {
        self.displayed_month = self.displayed_month.prev();
    }

    /// First half of a submission: check preconditions, mark the session as
    /// loading and produce the one request to send.
    ///
    /// Validation failures are recorded as inline field errors and leave
    /// `submission` untouched.
    pub fn begin_submit(&mut self, recipient: &str) -> Result<PendingSubmission, SubmitRejected> {
        if self.step != BookingStep::ContactDetails {
            return Err(SubmitRejected::WrongStep(self.step));
        }
        if self.submission.is_loading {
            return Err(SubmitRejected::InFlight);
        }
        if let Err(errors) = validate_contact(&self.contact) {
            self.field_errors = errors.clone();
            return Err(SubmitRejected::Invalid(errors));
        }

        self.attempts += 1;
        let id = SubmissionId(self.attempts);
        self.in_flight = Some(id);
        self.field_errors = FieldErrors::default();
        self.submission = SubmissionState {
            is_loading: true,
            error: None,
            success: None,
        };

        let request = ConsultationRequest {
            name: self.contact.name.trim().to_string(),
            email: self.contact.email.trim().to_string(),
            phone: self.contact.phone.clone(),
            date: self.selected_date.map(|date| date.format("%Y-%m-%d").to_string()),
            time: self.selected_time.map(|slot| slot.label()),
            message: self.contact.message.clone(),
            recipient: recipient.to_string(),
        };
        Ok(PendingSubmission { id, request })
    }

    /// Second half of a submission: apply the collaborator's outcome for
    /// attempt `id`.
    ///
    /// Ignored unless `id` is the submission currently in flight, e.g. after
    /// the modal was closed while the request was pending.
    pub fn complete_submit(&mut self, id: SubmissionId, outcome: Result<ConsultationResponse, SendError>) {
        if self.in_flight != Some(id) {
            warn!("booking: dropping outcome of {:?}, in flight: {:?}", id, self.in_flight);
            return;
        }
        self.in_flight = None;

        match outcome {
            Ok(response) if response.success => {
                info!("booking: consultation booked for {:?} {:?}", self.selected_date, self.selected_time);
                self.contact = ContactDetails::default();
                self.selected_date = None;
                self.selected_time = None;
                self.step = BookingStep::Confirmation;
                self.submission = SubmissionState {
                    is_loading: false,
                    error: None,
                    success: Some(BOOKING_SUCCESS_MESSAGE.to_string()),
                };
            }
            Ok(response) => {
                let message = response
                    .message
                    .filter(|message| !message.trim().is_empty())
                    .unwrap_or_else(|| BOOKING_REJECTED_MESSAGE.to_string());
                warn!("booking: endpoint rejected consultation: {}", message);
                self.fail_submission(message);
            }
            Err(error) => {
                warn!("booking: consultation request failed: {}", error);
                let message = match error {
                    SendError::Status { message: Some(message), .. } if !message.trim().is_empty() => message,
                    SendError::Status { .. } => SEND_FAILED_MESSAGE.to_string(),
                    SendError::Network(_) | SendError::Decode(_) => UNEXPECTED_FAILURE_MESSAGE.to_string(),
                };
                self.fail_submission(message);
            }
        }
    }

    /// Run a whole submission against `sender`. No retry on failure.
    pub async fn submit<S>(&mut self, sender: &S, recipient: &str) -> Result<(), SubmitRejected>
    where
        S: ConsultationSender + ?Sized,
    {
        let pending = self.begin_submit(recipient)?;
        let outcome = sender.send(&pending.request).await;
        self.complete_submit(pending.id, outcome);
        Ok(())
    }

    /// Back to the initial state, whatever the current step
    pub fn close(&mut self) {
        self.restart(self.today);
    }

    /// Fresh session for `today`. Attempt numbering carries on so outcomes
    /// of earlier submissions stay unmatched.
    pub fn restart(&mut self, today: NaiveDate) {
        let attempts = self.attempts;
        *self = Self::new(today);
        self.attempts = attempts;
    }

    fn fail_submission(&mut self, message: String) {
        self.submission = SubmissionState {
            is_loading: false,
            error: Some(message),
            success: None,
        };
    }
}
