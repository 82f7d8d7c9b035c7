use booking::{BookingStep, ContactField, TimeSlot};
use chrono::NaiveDate;
use yew::prelude::*;

use super::booking_calendar::BookingCalendar;
use super::contact_form::ContactForm;
use super::time_slot_picker::TimeSlotPicker;
use crate::config::BOOKING_RECIPIENT;
use crate::hooks::use_booking_modal::use_booking_modal;
use crate::hooks::use_booking_session::{
    local_today, use_booking_session, BookingAction, BookingState,
};
use crate::services::logging::Logger;

fn dispatcher<E: 'static>(
    state: &UseReducerHandle<BookingState>,
    action: fn() -> BookingAction,
) -> Callback<E> {
    let state = state.clone();
    Callback::from(move |_: E| state.dispatch(action()))
}

#[derive(Properties, PartialEq)]
struct ProgressProps {
    step: BookingStep,
}

#[function_component(ProgressIndicator)]
fn progress_indicator(props: &ProgressProps) -> Html {
    let current = props.step.number();

    html! {
        <div class="booking-progress">
            <div class="progress-track">
                { for BookingStep::ALL.iter().map(|step| {
                    let number = step.number();
                    let circle = classes!("progress-step", (current >= number).then_some("reached"));
                    let bar = classes!("progress-bar", (current > number).then_some("reached"));
                    html! {
                        <div class="progress-item" key={number}>
                            <div class={circle}>
                                { if current > number { "✓".to_string() } else { number.to_string() } }
                            </div>
                            if number < BookingStep::ALL.len() as u8 {
                                <div class={bar}></div>
                            }
                        </div>
                    }
                }) }
            </div>
            <div class="progress-labels">
                { for BookingStep::ALL.iter().map(|step| html! { <span>{ step.label() }</span> }) }
            </div>
        </div>
    }
}

/// Four-step booking modal: date, time, contact details, confirmation.
///
/// Visibility comes from the shared [`BookingModalHandle`]; all booking
/// state lives in the session reducer and is reset whenever the modal
/// closes.
///
/// [`BookingModalHandle`]: crate::hooks::use_booking_modal::BookingModalHandle
#[function_component(ConsultationBooking)]
pub fn consultation_booking() -> Html {
    let modal = use_booking_modal();
    let state = use_booking_session();

    {
        let state = state.clone();
        use_effect_with(modal.is_open(), move |is_open| {
            if *is_open {
                Logger::info_with_component("booking", "Booking modal opened");
                state.dispatch(BookingAction::Open { today: local_today() });
            }
            || ()
        });
    }

    let on_close = {
        let state = state.clone();
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| {
            state.dispatch(BookingAction::Close);
            modal.close();
        })
    };

    if !modal.is_open() {
        return html! {};
    }

    let session = &state.session;

    let on_select_date = {
        let state = state.clone();
        Callback::from(move |date: NaiveDate| state.dispatch(BookingAction::SelectDate(date)))
    };
    let on_select_time = {
        let state = state.clone();
        Callback::from(move |slot: TimeSlot| state.dispatch(BookingAction::SelectTime(slot)))
    };
    let on_field_change = {
        let state = state.clone();
        Callback::from(move |(field, value): (ContactField, String)| {
            state.dispatch(BookingAction::UpdateField(field, value))
        })
    };
    let on_submit = {
        let state = state.clone();
        Callback::from(move |_: ()| {
            state.dispatch(BookingAction::BeginSubmit {
                recipient: BOOKING_RECIPIENT.to_string(),
            })
        })
    };

    let content = match session.step() {
        BookingStep::SelectDate => html! {
            <div class="booking-step">
                <div class="step-intro">
                    <div class="step-icon">{"📅"}</div>
                    <h3>{"Select Your Preferred Date"}</h3>
                    <p>{"Choose a convenient date for your AI consultation"}</p>
                </div>
                <BookingCalendar
                    month={session.calendar_month()}
                    on_select={on_select_date}
                    on_previous={dispatcher(&state, || BookingAction::PrevMonth)}
                    on_next={dispatcher(&state, || BookingAction::NextMonth)}
                />
                <div class="step-actions end">
                    <button class="btn btn-gradient"
                        disabled={!session.can_advance_from_date()}
                        onclick={dispatcher(&state, || BookingAction::AdvanceFromDate)}>
                        {"Next: Choose Time"}
                    </button>
                </div>
            </div>
        },
        BookingStep::SelectTime => {
            let chosen_date = session
                .selected_date()
                .map(|date| date.format("%-m/%-d/%Y").to_string())
                .unwrap_or_default();
            html! {
                <div class="booking-step">
                    <div class="step-intro">
                        <div class="step-icon">{"🕒"}</div>
                        <h3>{"Select Your Preferred Time"}</h3>
                        <p>{ format!("Choose a time slot for your {} consultation", chosen_date) }</p>
                    </div>
                    <TimeSlotPicker selected={session.selected_time()} on_select={on_select_time} />
                    <div class="step-actions">
                        <button class="btn btn-outline" onclick={dispatcher(&state, || BookingAction::RetreatToDate)}>
                            {"Back"}
                        </button>
                        <button class="btn btn-gradient"
                            disabled={!session.can_advance_from_time()}
                            onclick={dispatcher(&state, || BookingAction::AdvanceFromTime)}>
                            {"Next: Your Details"}
                        </button>
                    </div>
                </div>
            }
        }
        BookingStep::ContactDetails => html! {
            <div class="booking-step">
                <div class="step-intro">
                    <div class="step-icon">{"👤"}</div>
                    <h3>{"Tell Us About Yourself"}</h3>
                    <p>{"Please provide your contact information so we can prepare for your consultation"}</p>
                </div>
                <ContactForm
                    contact={session.contact().clone()}
                    field_errors={session.field_errors().clone()}
                    submission={session.submission().clone()}
                    on_change={on_field_change}
                    on_submit={on_submit}
                    on_back={dispatcher(&state, || BookingAction::RetreatToTime)}
                />
            </div>
        },
        BookingStep::Confirmation => html! {
            <div class="booking-step confirmation">
                <div class="success-badge">{"✓"}</div>
                <h3>{"Consultation Booked Successfully!"}</h3>
                if let Some(message) = &session.submission().success {
                    <p class="banner banner-success">{ message.clone() }</p>
                }
                <div class="step-actions center">
                    <button class="btn btn-outline" onclick={on_close.clone()}>{"Close"}</button>
                </div>
            </div>
        },
    };

    html! {
        <div class="modal-backdrop" onclick={on_close.clone()}>
            <div class="modal-content booking-modal" onclick={|e: MouseEvent| e.stop_propagation()}>
                <div class="modal-header">
                    <h2>{"Book Your AI Consultation"}</h2>
                    <button class="close-button" onclick={on_close} aria-label="Close booking">{"✕"}</button>
                </div>
                <ProgressIndicator step={session.step()} />
                <div class="modal-body">
                    { content }
                </div>
            </div>
        </div>
    }
}
