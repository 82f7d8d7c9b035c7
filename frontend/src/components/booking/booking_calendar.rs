use booking::{CalendarDayType, CalendarMonth, DAY_NAMES};
use chrono::NaiveDate;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookingCalendarProps {
    pub month: CalendarMonth,
    pub on_select: Callback<NaiveDate>,
    pub on_previous: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(BookingCalendar)]
pub fn booking_calendar(props: &BookingCalendarProps) -> Html {
    let on_previous = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |_: MouseEvent| on_previous.emit(()))
    };
    let on_next = {
        let on_next = props.on_next.clone();
        Callback::from(move |_: MouseEvent| on_next.emit(()))
    };

    html! {
        <div class="booking-calendar">
            <div class="calendar-header">
                <button class="nav-button" onclick={on_previous} aria-label="Previous month">{"‹"}</button>
                <h4 class="month-title">{ props.month.year_month.to_string() }</h4>
                <button class="nav-button" onclick={on_next} aria-label="Next month">{"›"}</button>
            </div>

            <div class="calendar-grid day-headers">
                { for DAY_NAMES.iter().map(|day| html! { <div class="day-header">{ *day }</div> }) }
            </div>

            <div class="calendar-grid">
                { for props.month.days.iter().enumerate().map(|(index, day)| {
                    match (day.day_type, day.date) {
                        (CalendarDayType::MonthDay, Some(date)) => {
                            let class = classes!(
                                "calendar-day",
                                day.is_disabled.then_some("disabled"),
                                day.is_selected.then_some("selected"),
                                day.is_today.then_some("today"),
                            );
                            let onclick = {
                                let on_select = props.on_select.clone();
                                Callback::from(move |_: MouseEvent| on_select.emit(date))
                            };
                            html! {
                                <button key={index} {class} disabled={day.is_disabled} {onclick}>
                                    { day.day().unwrap_or_default() }
                                </button>
                            }
                        }
                        _ => html! { <div key={index} class="calendar-day padding"></div> },
                    }
                }) }
            </div>
        </div>
    }
}
