use booking::TimeSlot;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TimeSlotPickerProps {
    pub selected: Option<TimeSlot>,
    pub on_select: Callback<TimeSlot>,
}

#[function_component(TimeSlotPicker)]
pub fn time_slot_picker(props: &TimeSlotPickerProps) -> Html {
    html! {
        <div class="time-slots">
            { for TimeSlot::all().into_iter().map(|slot| {
                let label = slot.label();
                let class = classes!("time-slot", (props.selected == Some(slot)).then_some("selected"));
                let onclick = {
                    let on_select = props.on_select.clone();
                    Callback::from(move |_: MouseEvent| on_select.emit(slot))
                };
                html! {
                    <button key={label.clone()} {class} {onclick}>{ label }</button>
                }
            }) }
        </div>
    }
}
