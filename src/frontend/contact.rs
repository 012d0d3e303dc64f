use crate::notification::{NotificationKind, SUBMIT_FAILED, SUBMIT_SUCCESS};
use crate::validation::{ContactForm, Field, FieldError};
use std::collections::HashMap;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

const INVALID_BORDER: &str = "border-color: #8B0000;";
const VALID_BORDER: &str = "border-color: #E0D5C7;";

/// Per-field outcome of the last validation; fields never validated are absent.
type FieldStatus = HashMap<Field, Option<FieldError>>;

#[derive(Properties, PartialEq)]
pub struct ContactProps {
    pub on_notify: Callback<(NotificationKind, &'static str)>,
}

#[function_component(Contact)]
pub fn contact(props: &ContactProps) -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(FieldStatus::new);

    let on_change = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| {
            let mut next = (*form).clone();
            next.set(field, value);
            form.set(next);
        })
    };

    let on_blur = |field: Field| {
        let form = form.clone();
        let status = status.clone();
        Callback::from(move |_: FocusEvent| {
            let mut next = (*status).clone();
            next.insert(field, field.validate(form.value(field)).err());
            status.set(next);
        })
    };

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let on_notify = props.on_notify.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let errors = form.validate();
            let next: FieldStatus = Field::ALL
                .iter()
                .map(|field| {
                    let error = errors
                        .iter()
                        .find(|(failed, _)| failed == field)
                        .map(|(_, error)| *error);
                    (*field, error)
                })
                .collect();

            if errors.is_empty() {
                tracing::info!(
                    "contact form submitted: name={:?} email={:?} message_chars={}",
                    form.name.trim(),
                    form.email.trim(),
                    form.message.trim().chars().count()
                );
                on_notify.emit((NotificationKind::Success, SUBMIT_SUCCESS));
                form.set(ContactForm::default());
                status.set(FieldStatus::new());
            } else {
                tracing::debug!("contact form rejected: {} invalid field(s)", errors.len());
                on_notify.emit((NotificationKind::Error, SUBMIT_FAILED));
                status.set(next);
            }
        })
    };

    let field_view = |field: Field, label: &'static str, multiline: bool| {
        let outcome = status.get(&field).copied();
        let style = match outcome {
            Some(Some(_)) => Some(INVALID_BORDER),
            Some(None) => Some(VALID_BORDER),
            None => None,
        };
        let error = outcome.flatten();
        let error_id = format!("{}-error", field.id());
        let value = form.value(field).to_string();
        let on_change = on_change(field);
        let onblur = on_blur(field);

        let control = if multiline {
            let oninput = Callback::from(move |event: InputEvent| {
                let input: HtmlTextAreaElement = event.target_unchecked_into();
                on_change.emit(input.value());
            });
            html! {
                <textarea
                    id={field.id()}
                    name={field.id()}
                    rows="5"
                    required=true
                    aria-describedby={error_id.clone()}
                    aria-invalid={error.is_some().to_string()}
                    {style}
                    {value}
                    {oninput}
                    {onblur}
                ></textarea>
            }
        } else {
            let oninput = Callback::from(move |event: InputEvent| {
                let input: HtmlInputElement = event.target_unchecked_into();
                on_change.emit(input.value());
            });
            let input_type = if field == Field::Email { "email" } else { "text" };
            html! {
                <input
                    id={field.id()}
                    name={field.id()}
                    type={input_type}
                    required=true
                    aria-describedby={error_id.clone()}
                    aria-invalid={error.is_some().to_string()}
                    {style}
                    {value}
                    {oninput}
                    {onblur}
                />
            }
        };

        html! {
            <div class="form-group">
                <label for={field.id()}>{label}</label>
                {control}
                <span
                    id={error_id}
                    class="error-message"
                    role="alert"
                    style={if error.is_some() { "display: block;" } else { "display: none;" }}
                >
                    {error.map(|error| error.to_string()).unwrap_or_default()}
                </span>
            </div>
        }
    };

    html! {
        <section id="contact" class="contact scroll-animate">
            <div class="container">
                <h2 class="section-title">{"Let's Work Together"}</h2>
                <p class="section-subtitle">
                    {"Have a story to tell or a manuscript that needs a second pair of eyes? Send a note."}
                </p>
                <form id="contact-form" class="contact-form" novalidate=true {onsubmit}>
                    {field_view(Field::Name, "Name", false)}
                    {field_view(Field::Email, "Email", false)}
                    {field_view(Field::Message, "Message", true)}
                    <button type="submit" class="btn btn-primary">{"Send Message"}</button>
                </form>
            </div>
        </section>
    }
}
