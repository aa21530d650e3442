use crate::Registration;
use crate::field::Field;
use crate::form::RegistrationForm;
use crate::navigation::Notice;
use crate::submit::{SubmitOutcome, SubmitRejected};
use dioxus::prelude::*;
use mfit_domain::constants::LOGIN_ROUTE;

/// The registration page body.
///
/// `on_registered` receives the success notice; `on_login` fires when the
/// "already have an account" link is followed.
#[component]
pub fn RegistrationFormView(
    registration: Registration,
    on_registered: EventHandler<Notice>,
    on_login: EventHandler,
) -> Element {
    let init = registration.clone();
    let mut form = use_signal(move || init.form());

    let messages = registration.messages;
    let terms_url = registration.terms_url.clone();
    let submitting = form.read().is_submitting();
    let top_error = form.read().top_error().map(str::to_owned);
    let accepted = form.read().values().terms_accepted;
    let terms_error = form.read().visible_error(Field::Terms);
    let label = form.read().submit_label();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let ticket = match form.write().begin_submit() {
            Ok(ticket) => ticket,
            Err(SubmitRejected::Invalid(_) | SubmitRejected::Busy) => return,
        };

        let service = registration.service.clone();
        spawn(async move {
            let result = service.register(ticket.payload()).await;
            let outcome = form.write().finish_submit(ticket, result);
            if let SubmitOutcome::Registered(notice) = outcome {
                on_registered.call(notice);
            }
        });
    };

    rsx! {
        div { class: "register-card",
            h1 { class: "register-title", {messages.title} }
            p { class: "register-subtitle", {messages.subtitle} }

            if let Some(message) = top_error {
                div { class: "alert alert-error", role: "alert", {message} }
            }

            form { class: "register-form", onsubmit: onsubmit,
                for field in Field::all().filter(|field| field.is_text()) {
                    TextInput { key: "{field}", form, field }
                }

                div { class: "form-field form-check",
                    input {
                        id: Field::Terms.key(),
                        name: Field::Terms.key(),
                        r#type: Field::Terms.input_type(),
                        class: if terms_error.is_some() { "form-check-input invalid" } else { "form-check-input" },
                        checked: accepted,
                        disabled: submitting,
                        onchange: move |evt: FormEvent| form.write().set_terms(evt.checked()),
                        onblur: move |_| form.write().blur(Field::Terms),
                    }
                    label { r#for: Field::Terms.key(), class: "form-check-label",
                        a { href: terms_url, target: "_blank", rel: "noopener noreferrer", {messages.terms_link} }
                        {messages.terms_suffix}
                    }
                    if let Some(error) = terms_error {
                        p { class: "field-error", {error} }
                    }
                }

                button { r#type: "submit", class: "btn btn-primary", disabled: submitting, {label} }
            }

            p { class: "register-footer",
                {messages.have_account}
                " "
                a {
                    href: LOGIN_ROUTE,
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        on_login.call(());
                    },
                    {messages.login_link}
                }
            }
        }
    }
}

#[component]
fn TextInput(form: Signal<RegistrationForm>, field: Field) -> Element {
    let mut form = form;
    let messages = form.read().messages();
    let value = form.read().values().text(field).unwrap_or_default().to_owned();
    let error = form.read().visible_error(field);
    let submitting = form.read().is_submitting();

    rsx! {
        div { class: "form-field",
            label { r#for: field.key(), class: "form-label", {messages.label(field)} }
            input {
                id: field.key(),
                name: field.key(),
                r#type: field.input_type(),
                class: if error.is_some() { "form-input invalid" } else { "form-input" },
                placeholder: messages.placeholder(field),
                autocomplete: if field.is_secret() { "new-password" } else { "on" },
                value: value,
                disabled: submitting,
                oninput: move |evt: FormEvent| form.write().change_text(field, evt.value()),
                onblur: move |_| form.write().blur(field),
            }
            if let Some(error) = error {
                p { class: "field-error", {error} }
            }
        }
    }
}
