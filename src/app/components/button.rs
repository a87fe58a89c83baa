use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Secondary,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "c-button--primary",
            ButtonVariant::Secondary => "c-button--secondary",
        }
    }
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    /// Submits the enclosing form instead of acting as a plain button
    submit: Option<bool>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant_class = variant.unwrap_or(ButtonVariant::Primary).class();
    let button_type = if submit.unwrap_or(false) { "submit" } else { "button" };

    rsx! {
        button {
            class: "c-button {variant_class}",
            r#type: "{button_type}",
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
