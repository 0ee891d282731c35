use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Hero,
    Outline,
    Ghost,
    Secondary,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    disabled: Option<bool>,
    submit: Option<bool>,
    class: Option<String>,
    label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Hero);
    let disabled = disabled.unwrap_or(false);
    let button_type = if submit.unwrap_or(false) { "submit" } else { "button" };
    let extra = class.unwrap_or_default();

    let variant_class = match variant {
        ButtonVariant::Hero => "c-button--hero",
        ButtonVariant::Outline => "c-button--outline",
        ButtonVariant::Ghost => "c-button--ghost",
        ButtonVariant::Secondary => "c-button--secondary",
    };

    rsx! {
        button {
            class: "c-button {variant_class} {extra}",
            r#type: "{button_type}",
            disabled: disabled,
            aria_label: label,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
