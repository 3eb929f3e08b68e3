use dioxus::logger::tracing::{debug, info};
use dioxus::prelude::*;

use crate::core::config;
use crate::core::look::Look;
use crate::core::settings::{use_settings, Language};
use crate::core::timing::sleep_ms;
use crate::t;

use super::form::{ContactDraft, Field, FieldError, FormErrors, Service, SubmitPhase};

pub fn service_title(language: Language, service: Service) -> String {
    match service {
        Service::Web => t!(language, "service-web-title"),
        Service::Student => t!(language, "service-student-title"),
        Service::Consulting => t!(language, "service-consulting-title"),
        Service::UiUx => t!(language, "service-uiux-title"),
        Service::Maintenance => t!(language, "service-maintenance-title"),
        Service::AiAgents => t!(language, "service-ai-agents-title"),
    }
}

fn error_text(language: Language, error: FieldError) -> String {
    match error {
        FieldError::Required => t!(language, "contact-error-required"),
        FieldError::InvalidEmail => t!(language, "contact-error-email"),
    }
}

fn field_error(errors: &FormErrors, field: Field, language: Language) -> Option<String> {
    errors.get(field).map(|e| error_text(language, e))
}

/// `#contact`: direct channels on one side, the enquiry form on the other.
#[component]
pub fn Contact() -> Element {
    let settings = use_settings();
    let current = settings();
    let look = Look::for_settings(&current);
    let language = current.language;

    let mut draft = use_signal(ContactDraft::default);
    let mut errors = use_signal(FormErrors::default);
    let mut phase = use_signal(SubmitPhase::default);

    let channels = [
        (t!(language, "contact-call"), config::PHONE_DISPLAY, config::PHONE_HREF),
        (t!(language, "contact-email"), config::EMAIL, config::EMAIL_HREF),
        (t!(language, "contact-whatsapp"), config::PHONE_DISPLAY, config::WHATSAPP_HREF),
    ];

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let snapshot = draft();
        if let Err(found) = snapshot.validate() {
            debug!(invalid = found.len(), "contact form rejected");
            errors.set(found);
            return;
        }
        errors.set(FormErrors::default());
        if !phase.with_mut(|p| p.begin()) {
            return;
        }
        spawn(async move {
            sleep_ms(config::CONTACT_SUBMIT_DELAY_MS).await;
            info!(
                service = snapshot.service.map(Service::key).unwrap_or_default(),
                "contact enquiry accepted"
            );
            phase.with_mut(|p| p.complete());
            draft.set(ContactDraft::default());
            sleep_ms(config::CONTACT_SUCCESS_HOLD_MS).await;
            phase.with_mut(|p| p.reset());
        });
    };

    let current_errors = errors();
    let name_error = field_error(&current_errors, Field::Name, language);
    let email_error = field_error(&current_errors, Field::Email, language);
    let service_error = field_error(&current_errors, Field::Service, language);
    let message_error = field_error(&current_errors, Field::Message, language);
    let values = draft();
    let selected = values.service.map(Service::key).unwrap_or_default();
    let busy = phase().is_busy();

    rsx! {
        section { id: "contact", class: "section contact",
            div { class: "contact__channels",
                h2 { class: look.heading, {t!(language, "contact-title")} }
                for (label, value, href) in channels {
                    a { key: "{href}", class: "channel {look.surface}", href: "{href}",
                        span { class: "channel__label", "{label}" }
                        span { class: "channel__value", dir: "ltr", "{value}" }
                    }
                }
            }

            div { class: "contact__panel {look.surface}",
                if phase() == SubmitPhase::Success {
                    div { class: "contact__success", role: "status",
                        span { class: "contact__success-icon", "✓" }
                        h3 { class: look.heading, {t!(language, "contact-success")} }
                    }
                } else {
                    form { class: "contact__form", novalidate: true, onsubmit: on_submit,
                        div { class: "form-row",
                            label { class: "form-field",
                                span { {t!(language, "contact-name")} }
                                input {
                                    class: look.field,
                                    r#type: "text",
                                    placeholder: t!(language, "contact-name"),
                                    value: "{values.name}",
                                    oninput: move |evt| draft.with_mut(|d| d.name = evt.value()),
                                }
                                if let Some(msg) = name_error {
                                    small { class: "form-field__error", "{msg}" }
                                }
                            }
                            label { class: "form-field",
                                span { {t!(language, "contact-email-field")} }
                                input {
                                    class: look.field,
                                    r#type: "email",
                                    placeholder: t!(language, "contact-email-field"),
                                    value: "{values.email}",
                                    oninput: move |evt| draft.with_mut(|d| d.email = evt.value()),
                                }
                                if let Some(msg) = email_error {
                                    small { class: "form-field__error", "{msg}" }
                                }
                            }
                        }
                        div { class: "form-row",
                            label { class: "form-field",
                                span { {t!(language, "contact-phone")} }
                                input {
                                    class: look.field,
                                    r#type: "tel",
                                    dir: "ltr",
                                    placeholder: t!(language, "contact-phone"),
                                    value: "{values.phone}",
                                    oninput: move |evt| draft.with_mut(|d| d.phone = evt.value()),
                                }
                            }
                            label { class: "form-field",
                                span { {t!(language, "contact-service")} }
                                select {
                                    class: look.field,
                                    value: "{selected}",
                                    onchange: move |evt| {
                                        draft.with_mut(|d| d.service = Service::from_key(&evt.value()))
                                    },
                                    option { value: "", disabled: true, selected: selected.is_empty(),
                                        {t!(language, "contact-service")}
                                    }
                                    for service in Service::ALL {
                                        option {
                                            key: "{service.key()}",
                                            value: service.key(),
                                            selected: selected == service.key(),
                                            {service_title(language, service)}
                                        }
                                    }
                                }
                                if let Some(msg) = service_error {
                                    small { class: "form-field__error", "{msg}" }
                                }
                            }
                        }
                        label { class: "form-field",
                            span { {t!(language, "contact-message")} }
                            textarea {
                                class: look.field,
                                rows: 4,
                                placeholder: t!(language, "contact-message"),
                                value: "{values.message}",
                                oninput: move |evt| draft.with_mut(|d| d.message = evt.value()),
                            }
                            if let Some(msg) = message_error {
                                small { class: "form-field__error", "{msg}" }
                            }
                        }
                        button {
                            r#type: "submit",
                            class: "button button--primary contact__submit",
                            disabled: busy,
                            if busy {
                                {t!(language, "contact-sending")}
                            } else {
                                {t!(language, "contact-submit")}
                            }
                            span { class: "{look.chevron} contact__send", "➤" }
                        }
                        p { class: "contact__protection", {t!(language, "contact-protection")} }
                    }
                }
            }
        }
    }
}
