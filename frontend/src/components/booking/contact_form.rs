use booking::{ContactDetails, ContactField, FieldErrors, SubmissionState};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub contact: ContactDetails,
    pub field_errors: FieldErrors,
    pub submission: SubmissionState,
    pub on_change: Callback<(ContactField, String)>,
    pub on_submit: Callback<()>,
    pub on_back: Callback<()>,
}

fn input_type(field: ContactField) -> &'static str {
    match field {
        ContactField::Email => "email",
        ContactField::Phone => "tel",
        _ => "text",
    }
}

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::Name => "John Doe",
        ContactField::Email => "john@company.com",
        ContactField::Phone => "+1 (555) 123-4567",
        ContactField::Company => "Your Company",
        ContactField::Message => "Tell us about your current challenges and goals...",
    }
}

fn field_label(field: ContactField) -> String {
    match field {
        ContactField::Message => "Message (Optional)".to_string(),
        _ if field.is_required() => format!("{} *", field.label()),
        _ => field.label().to_string(),
    }
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let loading = props.submission.is_loading;

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let on_back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_: MouseEvent| on_back.emit(()))
    };

    let render_field = |field: ContactField| -> Html {
        let value = props.contact.get(field).to_string();
        let error = props.field_errors.get(field);
        let class = classes!("form-input", error.is_some().then_some("has-error"));

        let control = if field == ContactField::Message {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlTextAreaElement = e.target_unchecked_into();
                on_change.emit((field, input.value()));
            });
            html! {
                <textarea {class} rows="3" {value} {oninput} disabled={loading}
                    placeholder={placeholder(field)} />
            }
        } else {
            let on_change = props.on_change.clone();
            let oninput = Callback::from(move |e: InputEvent| {
                let input: HtmlInputElement = e.target_unchecked_into();
                on_change.emit((field, input.value()));
            });
            html! {
                <input type={input_type(field)} {class} {value} {oninput} disabled={loading}
                    placeholder={placeholder(field)} />
            }
        };

        html! {
            <div class="form-group" key={field.label()}>
                <label>{ field_label(field) }</label>
                { control }
                if let Some(error) = error {
                    <p class="field-error">{ error.to_string() }</p>
                }
            </div>
        }
    };

    html! {
        <form class="contact-form" onsubmit={on_submit}>
            if let Some(error) = &props.submission.error {
                <div class="banner banner-error">{ error.clone() }</div>
            }

            { for ContactField::ALL.into_iter().map(render_field) }

            <div class="step-actions">
                <button type="button" class="btn btn-outline" onclick={on_back} disabled={loading}>
                    {"Back"}
                </button>
                <button type="submit" class="btn btn-gradient" disabled={loading}>
                    if loading {
                        <span class="spinner"></span>{"Booking..."}
                    } else {
                        {"Book Consultation"}
                    }
                </button>
            </div>
        </form>
    }
}
