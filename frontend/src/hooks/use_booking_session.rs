use std::rc::Rc;

use booking::{
    BookingSession, ConsultationSender, ContactField, PendingSubmission, SendError, SubmissionId,
    TimeSlot,
};
use chrono::NaiveDate;
use shared::ConsultationResponse;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::logging::Logger;

/// Reducer state wrapping the booking session
#[derive(Clone, PartialEq)]
pub struct BookingState {
    pub session: BookingSession,
    /// Request produced by `BeginSubmit`, waiting for the network effect
    pub outbox: Option<PendingSubmission>,
}

impl BookingState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            session: BookingSession::new(today),
            outbox: None,
        }
    }
}

pub enum BookingAction {
    /// Modal opened; restarts the session if the date rolled over
    Open { today: NaiveDate },
    SelectDate(NaiveDate),
    AdvanceFromDate,
    SelectTime(TimeSlot),
    AdvanceFromTime,
    RetreatToDate,
    RetreatToTime,
    UpdateField(ContactField, String),
    NextMonth,
    PrevMonth,
    BeginSubmit { recipient: String },
    CompleteSubmit(SubmissionId, Result<ConsultationResponse, SendError>),
    Close,
}

impl Reducible for BookingState {
    type Action = BookingAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        if let BookingAction::Open { today } = action {
            if self.session.today() == today {
                return self;
            }
            let mut next = (*self).clone();
            next.session.restart(today);
            next.outbox = None;
            return next.into();
        }

        let mut next = (*self).clone();
        let session = &mut next.session;

        match action {
            BookingAction::Open { .. } => {}
            BookingAction::SelectDate(date) => {
                session.select_date(date);
            }
            BookingAction::AdvanceFromDate => {
                session.advance_from_date();
            }
            BookingAction::SelectTime(slot) => session.select_time(slot),
            BookingAction::AdvanceFromTime => {
                session.advance_from_time();
            }
            BookingAction::RetreatToDate => {
                session.retreat_to_date();
            }
            BookingAction::RetreatToTime => {
                session.retreat_to_time();
            }
            BookingAction::UpdateField(field, value) => session.update_contact_field(field, value),
            BookingAction::NextMonth => session.next_month(),
            BookingAction::PrevMonth => session.prev_month(),
            BookingAction::BeginSubmit { recipient } => match session.begin_submit(&recipient) {
                Ok(pending) => next.outbox = Some(pending),
                Err(rejected) => log::info!("booking: submission not started: {}", rejected),
            },
            BookingAction::CompleteSubmit(id, outcome) => {
                session.complete_submit(id, outcome);
                if next.outbox.as_ref().is_some_and(|pending| pending.id == id) {
                    next.outbox = None;
                }
            }
            BookingAction::Close => {
                session.close();
                next.outbox = None;
            }
        }

        next.into()
    }
}

pub fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Booking session reducer plus the effect that delivers queued requests
#[hook]
pub fn use_booking_session() -> UseReducerHandle<BookingState> {
    let state = use_reducer(|| BookingState::new(local_today()));

    {
        let handle = state.clone();
        use_effect_with(state.outbox.clone(), move |outbox| {
            if let Some(PendingSubmission { id, request }) = outbox.clone() {
                spawn_local(async move {
                    let outcome = ApiClient::new().send(&request).await;
                    match &outcome {
                        Ok(response) if response.success => {
                            Logger::info_with_component("booking", "Consultation request delivered")
                        }
                        Ok(response) => Logger::warn_with_component(
                            "booking",
                            &format!("Consultation request rejected: {:?}", response.message),
                        ),
                        Err(e) => Logger::error_with_component(
                            "booking",
                            &format!("Consultation request failed: {}", e),
                        ),
                    }
                    handle.dispatch(BookingAction::CompleteSubmit(id, outcome));
                });
            }
            || ()
        });
    }

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking::BookingStep;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn reduce(state: BookingState, actions: Vec<BookingAction>) -> BookingState {
        let mut state = Rc::new(state);
        for action in actions {
            state = state.reduce(action);
        }
        (*state).clone()
    }

    fn filled_in() -> Vec<BookingAction> {
        vec![
            BookingAction::SelectDate(date(2026, 10, 28)),
            BookingAction::AdvanceFromDate,
            BookingAction::SelectTime("10:30 AM".parse().unwrap()),
            BookingAction::AdvanceFromTime,
            BookingAction::UpdateField(ContactField::Name, "Jane Doe".to_string()),
            BookingAction::UpdateField(ContactField::Email, "jane@co.com".to_string()),
        ]
    }

    #[test]
    fn test_begin_submit_queues_one_request() {
        let mut actions = filled_in();
        actions.push(BookingAction::BeginSubmit {
            recipient: "bookings@example.com".to_string(),
        });

        let state = reduce(BookingState::new(date(2026, 10, 14)), actions);

        let request = state.outbox.expect("request queued").request;
        assert_eq!(request.date.as_deref(), Some("2026-10-28"));
        assert_eq!(request.time.as_deref(), Some("10:30 AM"));
        assert!(state.session.is_loading());
    }

    #[test]
    fn test_invalid_contact_queues_nothing() {
        let mut actions = filled_in();
        actions.push(BookingAction::UpdateField(ContactField::Email, String::new()));
        actions.push(BookingAction::BeginSubmit {
            recipient: "bookings@example.com".to_string(),
        });

        let state = reduce(BookingState::new(date(2026, 10, 14)), actions);

        assert!(state.outbox.is_none());
        assert!(!state.session.is_loading());
        assert_eq!(state.session.step(), BookingStep::ContactDetails);
    }

    #[test]
    fn test_complete_submit_clears_outbox() {
        let mut actions = filled_in();
        actions.push(BookingAction::BeginSubmit {
            recipient: "bookings@example.com".to_string(),
        });
        let state = reduce(BookingState::new(date(2026, 10, 14)), actions);
        let id = state.outbox.as_ref().expect("request queued").id;

        let state = reduce(
            state,
            vec![BookingAction::CompleteSubmit(id, Ok(ConsultationResponse::success()))],
        );

        assert!(state.outbox.is_none());
        assert_eq!(state.session.step(), BookingStep::Confirmation);
    }

    #[test]
    fn test_reply_from_closed_attempt_is_ignored() {
        let begin = || BookingAction::BeginSubmit {
            recipient: "bookings@example.com".to_string(),
        };
        let mut actions = filled_in();
        actions.push(begin());
        let state = reduce(BookingState::new(date(2026, 10, 14)), actions);
        let first = state.outbox.as_ref().expect("first request queued").id;

        let mut actions = vec![BookingAction::Close];
        actions.extend(filled_in());
        actions.push(begin());
        let state = reduce(state, actions);
        let second = state.outbox.as_ref().expect("second request queued").id;
        assert_ne!(first, second);

        let state = reduce(
            state,
            vec![BookingAction::CompleteSubmit(
                first,
                Err(SendError::Network("timed out".to_string())),
            )],
        );
        assert!(state.session.is_loading());
        assert_eq!(state.outbox.as_ref().map(|pending| pending.id), Some(second));

        let state = reduce(
            state,
            vec![BookingAction::CompleteSubmit(second, Ok(ConsultationResponse::success()))],
        );
        assert_eq!(state.session.step(), BookingStep::Confirmation);
        assert!(state.outbox.is_none());
    }

    #[test]
    fn test_open_on_a_new_day_restarts_session() {
        let today = date(2026, 10, 14);
        let state = reduce(BookingState::new(today), filled_in());

        let same_day = reduce(state.clone(), vec![BookingAction::Open { today }]);
        assert_eq!(same_day.session.step(), BookingStep::ContactDetails);

        let next_day = reduce(state, vec![BookingAction::Open { today: date(2026, 10, 15) }]);
        assert_eq!(next_day.session, BookingSession::new(date(2026, 10, 15)));
        assert!(next_day.outbox.is_none());
    }

    #[test]
    fn test_close_resets_session() {
        let mut actions = filled_in();
        actions.push(BookingAction::Close);

        let state = reduce(BookingState::new(date(2026, 10, 14)), actions);

        assert_eq!(state.session, BookingSession::new(date(2026, 10, 14)));
        assert!(state.outbox.is_none());
    }
}
