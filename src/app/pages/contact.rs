use dioxus::prelude::*;

use crate::app::components::{Icon, PageHero};
use crate::domain::models::{ContactChannel, FormField, BUSINESS_HOURS, CONTACT_CHANNELS};
use crate::shared::hooks::use_contact_form;

#[component]
pub fn Contact() -> Element {
    rsx! {
        PageHero {
            subtitle: "Ready to transform your business? Let's start the conversation.",
            "Get In Touch"
        }

        section { class: "c-section",
            div { class: "c-contact",
                div { class: "c-contact__form",
                    h2 { class: "c-contact__heading", "Send us a message" }
                    p { class: "c-contact__lead",
                        "Fill out the form below and we'll get back to you as soon as possible."
                    }
                    ConversationalForm {}
                }

                aside { class: "c-contact__info",
                    h2 { class: "c-contact__heading", "Contact Information" }
                    p { class: "c-contact__lead",
                        "Get in touch with us through any of these channels. We're here to help!"
                    }
                    for channel in CONTACT_CHANNELS.iter() {
                        ChannelCard { key: "{channel.title}", channel: *channel }
                    }

                    div { class: "c-panel",
                        div { class: "c-panel__title",
                            Icon { name: "clock" }
                            h3 { "Business Hours" }
                        }
                        for slot in BUSINESS_HOURS.iter() {
                            div { key: "{slot.days}", class: "c-panel__row",
                                span { "{slot.days}" }
                                span { "{slot.hours}" }
                            }
                        }
                    }

                    div { class: "c-panel c-panel--accent",
                        div { class: "c-panel__title",
                            Icon { name: "message-square" }
                            h3 { "Quick Response" }
                        }
                        p { class: "c-panel__text",
                            "We typically respond to all inquiries within 2-4 hours during business hours. \
                             For urgent matters, please call us directly."
                        }
                    }
                }
            }
        }
    }
}

/// One field per screen, with a progress bar over the steps
#[component]
fn ConversationalForm() -> Element {
    let contact = use_contact_form();

    let (prompt, placeholder, field, value, step_number, step_count, percent, submitting, complete, can_advance) = {
        let form = contact.form.read();
        let step = form.step();
        (
            step.prompt,
            step.placeholder,
            form.active_field(),
            form.field_value().to_string(),
            form.current_step() + 1,
            form.steps().len(),
            form.progress_percent(),
            form.is_submitting(),
            form.is_complete(),
            form.can_advance(),
        )
    };

    let button_label = if submitting {
        "Sending..."
    } else if field == Some(FormField::Message) {
        "Send Message"
    } else {
        "Continue"
    };

    rsx! {
        div { class: "c-form",
            div { class: "c-form__progress",
                div { class: "c-form__progress-label",
                    span { "Step {step_number} of {step_count}" }
                    span { "{percent}%" }
                }
                div { class: "c-form__progress-track",
                    div { class: "c-form__progress-fill", style: "width: {percent}%;" }
                }
            }

            h3 { class: "c-form__prompt", "{prompt}" }

            if complete {
                div { class: "c-form__done",
                    div { class: "c-form__done-icon", Icon { name: "check" } }
                    button {
                        class: "c-button c-button--outline",
                        onclick: move |_| contact.reset(),
                        "Send another message"
                    }
                }
            } else if let Some(field) = field {
                form {
                    class: "c-form__body",
                    onsubmit: move |evt: FormEvent| {
                        evt.prevent_default();
                        contact.advance();
                    },
                    FieldInput {
                        field: field,
                        value: value,
                        placeholder: placeholder,
                        disabled: submitting,
                        oninput: move |v: String| contact.set_field(v),
                    }
                    button {
                        class: "c-button c-button--hero c-form__submit",
                        r#type: "submit",
                        disabled: !can_advance,
                        "{button_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn FieldInput(
    field: FormField,
    value: String,
    placeholder: &'static str,
    disabled: bool,
    oninput: EventHandler<String>,
) -> Element {
    let label = field.label();

    if field.input_type() == "textarea" {
        return rsx! {
            label { class: "c-form__label", r#for: "contact-field", "{label}" }
            textarea {
                id: "contact-field",
                class: "c-input c-input--textarea",
                rows: "6",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled: disabled,
                autofocus: true,
                oninput: move |evt| oninput.call(evt.value()),
            }
        };
    }

    let input_type = field.input_type();
    rsx! {
        label { class: "c-form__label", r#for: "contact-field", "{label}" }
        input {
            id: "contact-field",
            class: "c-input",
            r#type: "{input_type}",
            placeholder: "{placeholder}",
            value: "{value}",
            disabled: disabled,
            autofocus: true,
            oninput: move |evt| oninput.call(evt.value()),
        }
    }
}

#[component]
fn ChannelCard(channel: ContactChannel) -> Element {
    rsx! {
        div { class: "c-channel",
            div { class: "c-channel__icon", Icon { name: channel.glyph } }
            div {
                h3 { class: "c-channel__title", "{channel.title}" }
                p { class: "c-channel__content", "{channel.content}" }
                p { class: "c-channel__description", "{channel.description}" }
            }
        }
    }
}
